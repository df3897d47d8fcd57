//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`] and the blog
//! post service. Routes that need an identity are wrapped with [`RequireAuth`]
//! over the matching guard.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    guard,
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use bh_core::repositories::{AuthorRepository, BlogPostRepository};
use bh_core::services::TokenGuard;
use bh_shared::config::AppConfig;
use bh_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::{cors::create_cors, RequireAuth};
use crate::routes::blog_posts::{self, BlogPosts};
use crate::routes::{auth, authors, health, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<R, P>(
    state: web::Data<AppState<R>>,
    posts: BlogPosts<R, P>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    let password_guard = RequireAuth::new(state.password_guard.clone());
    let token_guard = RequireAuth::new(state.token_guard.clone());

    App::new()
        .app_data(state)
        .app_data(posts)
        .app_data(json_config(config.server.max_payload_size))
        .wrap(create_cors(&config.cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<R>))
                        .service(
                            web::resource("/login")
                                .wrap(password_guard)
                                .route(web::post().to(auth::login::<R>)),
                        )
                        .service(
                            web::resource("/me")
                                .wrap(token_guard.clone())
                                .route(web::get().to(auth::me::<R>)),
                        ),
                )
                .service(
                    web::scope("/authors")
                        .wrap(token_guard.clone())
                        .route("", web::get().to(authors::list_authors::<R>))
                        .route("/{id}", web::get().to(authors::get_author::<R>))
                        .route("/{id}", web::put().to(authors::update_author::<R>))
                        .route("/{id}", web::delete().to(authors::delete_author::<R>)),
                )
                .service(blog_post_scope::<R, P>(token_guard)),
        )
        .default_service(web::route().to(health::not_found))
}

/// `/blog-posts`: reads are open, writes need a bearer token
///
/// Resource guards split each path by method so only the write resources are
/// wrapped with the token guard.
fn blog_post_scope<R, P>(token_guard: RequireAuth<TokenGuard>) -> actix_web::Scope
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    web::scope("/blog-posts")
        .service(
            web::resource("")
                .guard(guard::Get())
                .route(web::get().to(blog_posts::list_posts::<R, P>)),
        )
        .service(
            web::resource("")
                .guard(guard::Post())
                .wrap(token_guard.clone())
                .route(web::post().to(blog_posts::create_post::<R, P>)),
        )
        .service(
            web::resource("/me/stories")
                .wrap(token_guard.clone())
                .route(web::get().to(blog_posts::my_posts::<R, P>)),
        )
        .service(
            web::resource("/{id}")
                .guard(guard::Get())
                .route(web::get().to(blog_posts::get_post::<R, P>)),
        )
        .service(
            web::resource("/{id}")
                .guard(guard::Any(guard::Put()).or(guard::Delete()))
                .wrap(token_guard)
                .route(web::put().to(blog_posts::update_post::<R, P>))
                .route(web::delete().to(blog_posts::delete_post::<R, P>)),
        )
}

/// JSON extractor limits; malformed bodies get the standard 400 shape
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}
