use actix_web::{web, HttpResponse};
use validator::Validate;

use bh_core::repositories::AuthorRepository;

use crate::dto::RegisterRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "user_name": "ada",
///     "password": "analytical-engine"
/// }
/// ```
///
/// # Responses
/// - 201 with the new author's profile
/// - 400 on invalid input
/// - 409 when the user name is taken
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.author_service.register(request.into()).await {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}
