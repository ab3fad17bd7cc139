//! Gateway core: the once-through dispatch pipeline
//!
//! Every inbound request passes exactly once through
//! adapter → auth check → dispatch → translate and terminates. Nothing here
//! persists across calls; the registry is the only shared state and it is
//! read-only.

use serde::de::DeserializeOwned;
use shared::{Error, Result};
use std::sync::Arc;

use super::dispatcher::{OutboundRequest, Transport};
use super::registry::{EndpointRegistry, Upstream};
use super::translator::{self, Forwarded};
use crate::adapters::OutboundCall;

/// Identity and correlation material carried over from the inbound request
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// Bearer token as presented by the client; never inspected here
    pub bearer: Option<String>,
    /// Request id assigned by the request-id middleware
    pub request_id: Option<String>,
}

/// The dispatch and translation core shared by all handlers
pub struct Gateway {
    registry: EndpointRegistry,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(registry: EndpointRegistry, transport: Arc<dyn Transport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Execute a planned backend call and translate the result
    ///
    /// Short-circuits with `Unauthorized`, making zero outbound calls, when the
    /// operation requires identity and the inbound request carried no usable
    /// bearer token. The token is attached to this one outbound request
    /// only; the pooled transport keeps no default headers.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        upstream: Upstream,
        call: OutboundCall,
        ctx: &CallContext,
    ) -> Result<Forwarded<T>> {
        let bearer = if call.requires_token {
            match &ctx.bearer {
                Some(token) => Some(token.clone()),
                None => {
                    return Err(Error::unauthorized(
                        "A bearer token is required for this operation",
                    ))
                }
            }
        } else {
            None
        };

        let base = self.registry.resolve(upstream);
        let url = EndpointRegistry::join(base, &call.path)?;

        tracing::debug!(
            upstream = upstream.as_str(),
            method = %call.method,
            path = %call.path,
            "dispatching upstream call"
        );

        let raw = self
            .transport
            .send(OutboundRequest {
                method: call.method,
                url,
                query: call.query,
                body: call.body,
                bearer,
                request_id: ctx.request_id.clone(),
            })
            .await?;

        tracing::debug!(
            upstream = upstream.as_str(),
            status = raw.status,
            "upstream responded"
        );

        translator::translate(raw)
    }
}
