//! Type definitions shared by the API layer
//!
//! - `response` - health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};
