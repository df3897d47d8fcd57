//! Token service module for JWT management
//!
//! Issues signed, time-limited bearer tokens for an identity claim and
//! verifies presented tokens back into that claim.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
