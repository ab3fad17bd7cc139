//! Shared test fixtures
//!
//! A recording transport stands in for the network: it captures every
//! outbound request the gateway constructs and replays scripted responses in
//! order, which is what lets the tests assert "zero outbound calls" and
//! "identical constructed requests" without sockets.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use api_gateway::services::{
    EndpointRegistry, Gateway, OutboundRequest, RawResponse, Transport,
};
use shared::{Error, Result, UpstreamsConfig};

/// Transport stub that records requests and replays scripted responses
pub struct RecordingTransport {
    requests: Mutex<Vec<OutboundRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    /// Script the next response
    pub fn enqueue_ok(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Script the next response as a transport failure
    pub fn enqueue_err(&self, err: Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Number of outbound calls the gateway actually made
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Outbound request by position
    pub fn request(&self, index: usize) -> OutboundRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(RawResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
    }
}

/// Registry over fixed test addresses
pub fn test_registry() -> EndpointRegistry {
    EndpointRegistry::from_config(&UpstreamsConfig {
        users_base_url: "http://users.test".to_string(),
        routes_base_url: "http://routes.test".to_string(),
        stations_base_url: "http://stations.test".to_string(),
        tickets_base_url: "http://tickets.test".to_string(),
    })
    .expect("test registry must build")
}

/// Gateway app data wired to the recording transport
pub fn test_gateway(transport: Arc<RecordingTransport>) -> web::Data<Gateway> {
    web::Data::new(Gateway::new(test_registry(), transport))
}
