//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::claims::{Claims, IdentityClaim};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying signed access tokens
///
/// Stateless apart from its keys; clone or share it freely across workers.
#[derive(Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration carrying the signing secret
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for the given identity
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWT valid for the configured lifetime
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, identity: &IdentityClaim) -> Result<String, DomainError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`
    pub(crate) fn issue_at(
        &self,
        identity: &IdentityClaim,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(
            identity,
            issued_at,
            Duration::seconds(self.config.token_expiry_seconds),
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns the identity it carries
    ///
    /// # Returns
    ///
    /// * `Ok(IdentityClaim)` - Signature, issuer, audience and lifetime check out
    /// * `Err(TokenError::ExpiredToken)` - Valid signature, past its expiry
    /// * `Err(TokenError::InvalidToken)` - Anything else
    pub fn verify(&self, token: &str) -> Result<IdentityClaim, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::ExpiredToken)
                } else {
                    tracing::debug!(error = %e, "Rejected access token");
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        token_data
            .claims
            .identity()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }

    /// Lifetime of issued tokens in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }
}
