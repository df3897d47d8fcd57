//! Value objects returned across the service boundary.

pub mod auth_token;

pub use auth_token::AuthToken;
