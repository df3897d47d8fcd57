//! Mapping from domain errors to HTTP responses
//!
//! Every error is logged with full detail. Clients only ever see the generic
//! body for its class: all authentication failures share one 401 body and
//! server-side faults share one 500 body.

use actix_web::{http::StatusCode, HttpResponse};
use bh_core::errors::{AuthError, DomainError};
use bh_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        e if e.is_unauthorized() => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InsufficientPermissions) => StatusCode::FORBIDDEN,
        DomainError::Auth(AuthError::UserAlreadyExists { .. }) => StatusCode::CONFLICT,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let body = match error {
        e if e.is_unauthorized() => {
            log::warn!("Authentication rejected: {:?}", e);
            ErrorResponse::unauthorized()
        }
        DomainError::Auth(AuthError::InsufficientPermissions) => {
            log::warn!("Domain Error: {:?}", error);
            ErrorResponse::new(
                error_codes::FORBIDDEN,
                "You do not have permission to perform this action",
            )
        }
        DomainError::Auth(AuthError::UserAlreadyExists { user_name }) => {
            log::info!("Domain Error: {:?}", error);
            ErrorResponse::new(error_codes::CONFLICT, "User name is already taken")
                .add_detail("user_name", user_name)
        }
        DomainError::Validation { message } => {
            log::info!("Domain Error: {:?}", error);
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::NotFound { resource } => {
            log::info!("Domain Error: {:?}", error);
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
        }
        _ => {
            log::error!("Domain Error: {:?}", error);
            ErrorResponse::internal()
        }
    };

    body.to_response(status)
}

/// 400 response for request bodies rejected by `validator`
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    log::info!("Request validation failed: {}", errors);

    ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
        .add_detail("fields", errors)
        .to_response(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use bh_core::errors::TokenError;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_all_authentication_failures_share_one_body() {
        let errors = [
            DomainError::from(AuthError::MissingCredentials),
            DomainError::from(AuthError::InvalidCredentials),
            DomainError::from(TokenError::InvalidToken),
            DomainError::from(TokenError::ExpiredToken),
        ];

        for error in errors {
            let response = handle_domain_error(&error);
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let body = body_json(response).await;
            assert_eq!(body["error"], "UNAUTHORIZED");
            assert_eq!(body["message"], "Authentication required");
            assert!(body.get("details").is_none());
        }
    }

    #[actix_web::test]
    async fn test_store_fault_is_generic_500() {
        let response = handle_domain_error(&DomainError::store("mysql at 10.0.0.5 refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("10.0.0.5"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&AuthError::InsufficientPermissions.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(
                &AuthError::UserAlreadyExists {
                    user_name: "a".to_string()
                }
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::Validation {
                message: "bad".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::NotFound {
                resource: "Author".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&TokenError::TokenGenerationFailed.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
