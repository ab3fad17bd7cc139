//! Request ID middleware
//!
//! Assigns every inbound request a correlation id (or keeps one supplied by
//! the caller via `X-Request-ID`), stores it in the request extensions, adds
//! it to the response, and (through the dispatcher) forwards it to the
//! backend that ends up serving the call.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use uuid::Uuid;

/// Request id stored in request extensions
#[derive(Debug, Clone)]
pub struct RequestIdExt(pub String);

/// Read the request id assigned by the middleware, if any
pub fn get_request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<RequestIdExt>().map(|id| id.0.clone())
}

/// Request ID middleware factory
pub struct RequestId;

impl RequestId {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestIdMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware {
            service: std::rc::Rc::new(service),
        }))
    }
}

pub struct RequestIdMiddleware<S> {
    service: std::rc::Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // Keep a caller-supplied id so traces can span multiple hops
            let request_id = req
                .headers()
                .get("x-request-id")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            req.extensions_mut()
                .insert(RequestIdExt(request_id.clone()));

            let mut res = service.call(req).await?;

            if let Ok(value) = HeaderValue::try_from(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), value);
            }

            Ok(res)
        })
    }
}
