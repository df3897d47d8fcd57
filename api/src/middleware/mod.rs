pub mod auth;
pub mod cors;

pub use auth::{AuthContext, RequireAuth};
pub use cors::create_cors;
