use actix_web::HttpResponse;
use bh_shared::types::{HealthResponse, HealthStatus};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::new(
        HealthStatus::Healthy,
        "bloghub-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(bh_shared::errors::ErrorResponse::new(
        bh_shared::errors::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
