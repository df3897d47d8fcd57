//! Blog post handlers
//!
//! Reads are public. Writes and `/me/stories` run behind the token guard,
//! which supplies the [`AuthContext`].

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use bh_core::repositories::{AuthorRepository, BlogPostRepository};
use bh_core::services::BlogPostService;

use crate::dto::{CreateBlogPostRequest, UpdateBlogPostRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;

/// Shared handle to the blog post service
pub type BlogPosts<R, P> = web::Data<BlogPostService<R, P>>;

/// Handler for GET /api/v1/blog-posts
pub async fn list_posts<R, P>(posts: BlogPosts<R, P>) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    match posts.list().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/blog-posts/{id}
///
/// The post is returned with its author's public profile.
pub async fn get_post<R, P>(posts: BlogPosts<R, P>, path: web::Path<Uuid>) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    match posts.get(path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/blog-posts/me/stories
pub async fn my_posts<R, P>(posts: BlogPosts<R, P>, auth: AuthContext) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    match posts.list_by_author(auth.author_id).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/blog-posts
pub async fn create_post<R, P>(
    posts: BlogPosts<R, P>,
    auth: AuthContext,
    request: web::Json<CreateBlogPostRequest>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match posts.create(&auth.identity(), request.into()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/blog-posts/{id}
///
/// Only the post's author or an admin may edit it.
pub async fn update_post<R, P>(
    posts: BlogPosts<R, P>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBlogPostRequest>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match posts
        .update(&auth.identity(), path.into_inner(), request.into())
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/blog-posts/{id}
pub async fn delete_post<R, P>(
    posts: BlogPosts<R, P>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    match posts.delete(&auth.identity(), path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
