//! Bearer token guard

use async_trait::async_trait;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::token::TokenService;

use super::header::{parse_authorization, scheme_matches, BEARER_SCHEME};
use super::{Authenticator, GuardOutcome};

/// Admits requests carrying `Authorization: Bearer <token>` with a valid token
#[derive(Clone)]
pub struct TokenGuard {
    tokens: TokenService,
}

impl TokenGuard {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl Authenticator for TokenGuard {
    async fn authenticate(&self, authorization: Option<&str>) -> GuardOutcome {
        let Some(header) = authorization else {
            return GuardOutcome::Rejected(AuthError::MissingCredentials.into());
        };

        let token = match parse_authorization(header) {
            Some((scheme, token)) if scheme_matches(scheme, BEARER_SCHEME) && !token.is_empty() => {
                token
            }
            _ => return GuardOutcome::Rejected(DomainError::Token(TokenError::InvalidToken)),
        };

        self.tokens.verify(token).into()
    }

    fn scheme(&self) -> &'static str {
        BEARER_SCHEME
    }
}
