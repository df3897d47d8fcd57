//! Configuration for the token service

use bh_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::claims::{JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
use crate::errors::DomainError;

/// Configuration for the token service
///
/// The signing secret is handed in at construction time; the service never
/// reads process-global state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub token_expiry_seconds: i64,
    /// Value of the `iss` claim
    pub issuer: String,
    /// Value of the `aud` claim
    pub audience: String,
}

impl TokenServiceConfig {
    /// Builds the token configuration from the application JWT settings
    ///
    /// Only HMAC algorithms are accepted since the secret is symmetric.
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = match jwt.algorithm.to_ascii_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::Internal {
                    message: format!("Unsupported JWT algorithm: {}", other),
                })
            }
        };

        if jwt.secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        if jwt.token_expiry <= 0 {
            return Err(DomainError::Internal {
                message: "Token expiry must be positive".to_string(),
            });
        }

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            token_expiry_seconds: jwt.token_expiry,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        })
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: TOKEN_EXPIRY_HOURS * 3600,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}
