//! Backend response translation
//!
//! Converts a raw backend response into either the adapter's declared
//! payload shape (2xx) or an error value the handlers render as the uniform
//! envelope. The gateway never reinterprets domain error semantics it does
//! not own: a non-2xx status and body pass through verbatim.

use actix_web::http::StatusCode;
use serde::de::DeserializeOwned;
use shared::{Error, Result};

use super::dispatcher::RawResponse;

/// A successfully translated backend response
///
/// Carries the backend's success status so the gateway mirrors it (a create
/// answered 201 stays 201).
#[derive(Debug)]
pub struct Forwarded<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> Forwarded<T> {
    /// Reshape the payload while keeping the backend status
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Forwarded<U> {
        Forwarded {
            status: self.status,
            data: f(self.data),
        }
    }
}

/// Translate a raw backend response
pub fn translate<T: DeserializeOwned>(raw: RawResponse) -> Result<Forwarded<T>> {
    let status = StatusCode::from_u16(raw.status).map_err(|_| {
        Error::serialization(format!("backend returned unintelligible status {}", raw.status))
    })?;

    if !status.is_success() {
        return Err(Error::Backend {
            status: raw.status,
            body: raw.body,
        });
    }

    let data = serde_json::from_str(&raw.body).map_err(|e| {
        Error::serialization(format!("backend payload did not match the expected shape: {}", e))
    })?;

    Ok(Forwarded { status, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: i64,
        state: String,
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_success_parses_declared_shape() {
        let forwarded: Forwarded<Payload> =
            translate(raw(200, r#"{"id": 7, "state": "Activo"}"#)).unwrap();
        assert_eq!(forwarded.status, StatusCode::OK);
        assert_eq!(
            forwarded.data,
            Payload {
                id: 7,
                state: "Activo".to_string()
            }
        );
    }

    #[test]
    fn test_created_status_is_kept() {
        let forwarded: Forwarded<Payload> =
            translate(raw(201, r#"{"id": 8, "state": "Activo"}"#)).unwrap();
        assert_eq!(forwarded.status, StatusCode::CREATED);
    }

    #[test]
    fn test_malformed_success_payload_is_serialization_error() {
        let err = translate::<Payload>(raw(200, "definitely not json")).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert_eq!(err.http_status(), 502);
    }

    #[test]
    fn test_shape_mismatch_is_serialization_error() {
        // Valid JSON, wrong shape
        let err = translate::<Payload>(raw(200, r#"{"unexpected": true}"#)).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_backend_error_passes_through_verbatim() {
        let body = r#"{"detail":"a ticket already exists for this user and date"}"#;
        let err = translate::<Payload>(raw(409, body)).unwrap_err();
        match err {
            Error::Backend { status, body: passed } => {
                assert_eq!(status, 409);
                assert_eq!(passed, body);
            }
            other => panic!("expected Backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_keeps_status() {
        let forwarded: Forwarded<Payload> =
            translate(raw(201, r#"{"id": 8, "state": "Activo"}"#)).unwrap();
        let mapped = forwarded.map(|p| p.id);
        assert_eq!(mapped.status, StatusCode::CREATED);
        assert_eq!(mapped.data, 8);
    }
}
