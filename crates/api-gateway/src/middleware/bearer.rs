//! Bearer token propagation
//!
//! Extracts the inbound `Authorization: Bearer <token>` header so the
//! gateway core can re-attach it to outbound calls that require identity.
//! The token is never decoded, verified or expiry-checked here; the identity
//! backend owns all of that.

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::middleware::request_id::get_request_id;
use crate::services::CallContext;

/// Extract a bearer token from the inbound request
///
/// Returns `None` for a missing header, a non-Bearer scheme, or an empty
/// token. Callers decide whether that is fatal for the operation.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Assemble the per-call context handed to the gateway core
pub fn call_context(req: &HttpRequest) -> CallContext {
    CallContext {
        bearer: bearer_token(req),
        request_id: get_request_id(req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_well_formed_bearer_header() {
        let req = TestRequest::get()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        let req = TestRequest::get().to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_non_bearer_scheme_yields_none() {
        let req = TestRequest::get()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_empty_token_yields_none() {
        let req = TestRequest::get()
            .insert_header(("Authorization", "Bearer   "))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_lowercase_scheme_is_rejected() {
        // The propagator only accepts the canonical scheme spelling
        let req = TestRequest::get()
            .insert_header(("Authorization", "bearer abc"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }
}
