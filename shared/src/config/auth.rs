//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

/// Secret used when nothing else is configured. Production refuses to start with it.
const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default bcrypt cost factor
const DEFAULT_BCRYPT_COST: u32 = 11;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_expiry: 86400, // 24 hours
            issuer: String::from("bloghub"),
            audience: String::from("bloghub-api"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.token_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor (4..=31)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_with(Self::default())
    }

    /// Apply environment variables on top of an existing configuration
    ///
    /// Recognised variables: `JWT_SECRET`, `JWT_TOKEN_EXPIRY` (seconds),
    /// `JWT_ISSUER`, `JWT_AUDIENCE`, `BCRYPT_COST`. Unparsable numbers are ignored.
    pub fn from_env_with(mut base: Self) -> Self {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            base.jwt.secret = secret;
        }
        if let Some(expiry) = std::env::var("JWT_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            base.jwt.token_expiry = expiry;
        }
        if let Ok(issuer) = std::env::var("JWT_ISSUER") {
            base.jwt.issuer = issuer;
        }
        if let Ok(audience) = std::env::var("JWT_AUDIENCE") {
            base.jwt.audience = audience;
        }
        if let Some(cost) = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            base.password.bcrypt_cost = cost;
        }
        base
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
