//! Authentication DTOs and identity backend wire shapes
//!
//! The identity backend answers in its own snake_case convention
//! (`access_token`, `user_id`, ...). Those shapes are translated into the
//! gateway's client-facing camelCase at this boundary, never re-exposed.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "full name must be 1-120 characters"))]
    pub full_name: Option<String>,
}

/// Login grant as the identity backend returns it
#[derive(Debug, Deserialize)]
pub struct LoginGrant {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub is_admin: bool,
}

/// Session payload in the gateway's client-facing convention
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub is_admin: bool,
}

impl From<LoginGrant> for SessionResponse {
    fn from(grant: LoginGrant) -> Self {
        Self {
            token: grant.access_token,
            token_type: grant.token_type,
            user_id: grant.user_id,
            email: grant.email,
            is_admin: grant.is_admin,
        }
    }
}

/// User record as the identity backend returns it
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

/// User payload in the gateway's client-facing convention
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id,
            email: record.email,
            full_name: record.full_name,
            is_admin: record.is_admin,
        }
    }
}
