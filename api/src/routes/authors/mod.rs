//! Author management handlers, all behind the token guard

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bh_core::repositories::AuthorRepository;

use crate::dto::UpdateAuthorRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/authors
pub async fn list_authors<R>(state: web::Data<AppState<R>>, _auth: AuthContext) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    match state.author_service.list().await {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/authors/{id}
pub async fn get_author<R>(
    state: web::Data<AppState<R>>,
    _auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    match state.author_service.get(path.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/authors/{id}
///
/// Authors may edit themselves; admins may edit anyone and change roles.
pub async fn update_author<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateAuthorRequest>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .author_service
        .update(&auth.identity(), path.into_inner(), request.into())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/authors/{id}
pub async fn delete_author<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
{
    match state
        .author_service
        .delete(&auth.identity(), path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
