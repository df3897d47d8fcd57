use actix_web::{web, HttpResponse};

use bh_core::repositories::AuthorRepository;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Runs behind the password guard, so reaching this handler means the Basic
/// credentials matched. Responds with
/// `{"access_token": "...", "token_type": "Bearer", "expires_in": 86400}`.
pub async fn login<R>(state: web::Data<AppState<R>>, auth: AuthContext) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    match state.author_service.login(&auth.identity()) {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(&error),
    }
}
