//! Guard middleware for protecting API endpoints.
//!
//! `RequireAuth` runs an [`Authenticator`] against the `Authorization` header
//! before the wrapped service is called. Authenticated requests carry an
//! [`AuthContext`] in their extensions; rejected requests are answered
//! directly and never reach the handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{HeaderValue, AUTHORIZATION, WWW_AUTHENTICATE},
    http::StatusCode,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use bh_core::{
    domain::entities::{author::Role, claims::IdentityClaim},
    services::guard::{Authenticator, GuardOutcome},
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

/// Realm advertised in `WWW-Authenticate`
const REALM: &str = "bloghub";

/// Authenticated subject injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Author ID from the identity claim
    pub author_id: Uuid,
    /// Author role at the time of authentication
    pub role: Role,
}

impl AuthContext {
    /// The identity claim this context was built from
    pub fn identity(&self) -> IdentityClaim {
        IdentityClaim::new(self.author_id, self.role)
    }
}

impl From<IdentityClaim> for AuthContext {
    fn from(identity: IdentityClaim) -> Self {
        Self {
            author_id: identity.id,
            role: identity.role,
        }
    }
}

/// Guard middleware factory
pub struct RequireAuth<G: Authenticator> {
    guard: Arc<G>,
}

impl<G: Authenticator> RequireAuth<G> {
    /// Creates a middleware that admits requests accepted by `guard`
    pub fn new(guard: Arc<G>) -> Self {
        Self { guard }
    }
}

impl<G: Authenticator> Clone for RequireAuth<G> {
    fn clone(&self) -> Self {
        Self {
            guard: Arc::clone(&self.guard),
        }
    }
}

impl<S, B, G> Transform<S, ServiceRequest> for RequireAuth<G>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    G: Authenticator,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S, G>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            guard: Arc::clone(&self.guard),
        }))
    }
}

/// Guard middleware service
pub struct RequireAuthMiddleware<S, G> {
    service: Rc<S>,
    guard: Arc<G>,
}

impl<S, B, G> Service<ServiceRequest> for RequireAuthMiddleware<S, G>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    G: Authenticator,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let guard = Arc::clone(&self.guard);

        Box::pin(async move {
            let authorization = extract_authorization(&req);

            match guard.authenticate(authorization.as_deref()).await {
                GuardOutcome::Authenticated(identity) => {
                    req.extensions_mut().insert(AuthContext::from(identity));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                GuardOutcome::Rejected(error) => {
                    log::info!(
                        "{} {} rejected by {} guard",
                        req.method(),
                        req.path(),
                        guard.scheme()
                    );
                    let response = rejection_response(&error, guard.scheme());
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Raw `Authorization` header value
///
/// A header that is present but not valid UTF-8 is passed on as empty so the
/// guard rejects it as malformed rather than missing.
fn extract_authorization(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

/// Response for a rejected request, with a challenge on 401
fn rejection_response(error: &bh_core::errors::DomainError, scheme: &str) -> HttpResponse {
    let mut response = handle_domain_error(error);

    if response.status() == StatusCode::UNAUTHORIZED {
        if let Ok(challenge) = HeaderValue::from_str(&format!("{} realm=\"{}\"", scheme, REALM)) {
            response.headers_mut().insert(WWW_AUTHENTICATE, challenge);
        }
    }

    response
}

/// Extractor for required authentication
///
/// Fails with the generic 401 when no guard admitted the request.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Error> = req.extensions().get::<AuthContext>().copied().ok_or_else(|| {
            InternalError::from_response(
                "Authentication required",
                HttpResponse::Unauthorized().json(ErrorResponse::unauthorized()),
            )
            .into()
        });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_authorization() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(
            extract_authorization(&req),
            Some("Bearer test_token_123".to_string())
        );

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_authorization(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_round_trips_identity() {
        let identity = IdentityClaim::new(Uuid::new_v4(), Role::Admin);
        let context = AuthContext::from(identity);
        assert_eq!(context.identity(), identity);
    }

    #[actix_web::test]
    async fn test_extractor_without_guard_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthContext::extract(&req).await;

        let error = result.unwrap_err();
        assert_eq!(
            error.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_rejection_carries_challenge() {
        let error = bh_core::errors::AuthError::MissingCredentials.into();
        let response = rejection_response(&error, "Basic");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"bloghub\""
        );
    }

    #[test]
    fn test_store_fault_has_no_challenge() {
        let error = bh_core::errors::DomainError::store("down");
        let response = rejection_response(&error, "Bearer");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(WWW_AUTHENTICATE).is_none());
    }
}
