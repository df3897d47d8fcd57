//! # BlogHub API
//!
//! HTTP surface of the BlogHub backend: registration, login, and author
//! management behind the password and token guards.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
