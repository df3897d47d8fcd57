//! Token response value object for successful logins.

use serde::{Deserialize, Serialize};

/// Bearer token handed to a client after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthToken {
    /// Creates a bearer token response
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
