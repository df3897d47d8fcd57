//! Token claims and the identity claim they carry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::Role;

/// Default token lifetime (24 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT issuer
pub const JWT_ISSUER: &str = "bloghub";

/// JWT audience
pub const JWT_AUDIENCE: &str = "bloghub-api";

/// Minimal authenticated-subject data carried through a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Author identifier
    pub id: Uuid,
    /// Author role at the time of authentication
    pub role: Role,
}

impl IdentityClaim {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    /// Checks if the claim belongs to an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this subject may manage the author with the given id
    pub fn can_manage(&self, author_id: Uuid) -> bool {
        self.id == author_id || self.is_admin()
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (author ID)
    pub sub: String,

    /// Author role
    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an identity, valid from `issued_at` for `ttl`
    pub fn new(
        identity: &IdentityClaim,
        issued_at: DateTime<Utc>,
        ttl: Duration,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let expiry = issued_at + ttl;

        Self {
            sub: identity.id.to_string(),
            role: identity.role,
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Recovers the identity claim encoded in these claims
    pub fn identity(&self) -> Result<IdentityClaim, uuid::Error> {
        Ok(IdentityClaim {
            id: Uuid::parse_str(&self.sub)?,
            role: self.role,
        })
    }
}
