use actix_web::{web, HttpResponse};

use bh_core::repositories::AuthorRepository;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/auth/me
pub async fn me<R>(state: web::Data<AppState<R>>, auth: AuthContext) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    match state.author_service.get(auth.author_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}
