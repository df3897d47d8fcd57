//! Access guards
//!
//! A guard turns the raw `Authorization` header of a request into either an
//! authenticated identity or a rejection reason. Guards never produce HTTP
//! responses themselves; the presentation layer maps the outcome.

mod header;
mod password;
mod token;

use async_trait::async_trait;

use crate::domain::entities::claims::IdentityClaim;
use crate::errors::DomainError;

pub use header::{parse_authorization, BASIC_SCHEME, BEARER_SCHEME};
pub use password::PasswordGuard;
pub use token::TokenGuard;

/// Result of running a guard against a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The request carries valid credentials for this identity
    Authenticated(IdentityClaim),
    /// The request must not reach the handler
    Rejected(DomainError),
}

impl From<Result<IdentityClaim, DomainError>> for GuardOutcome {
    fn from(result: Result<IdentityClaim, DomainError>) -> Self {
        match result {
            Ok(identity) => GuardOutcome::Authenticated(identity),
            Err(error) => GuardOutcome::Rejected(error),
        }
    }
}

/// Authentication strategy applied to a request's `Authorization` header
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Authenticate the raw header value, `None` when the header is absent
    async fn authenticate(&self, authorization: Option<&str>) -> GuardOutcome;

    /// Scheme advertised in `WWW-Authenticate` on rejection
    fn scheme(&self) -> &'static str;
}
