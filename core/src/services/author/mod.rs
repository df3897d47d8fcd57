//! Author service module
//!
//! Registration, login token minting and author management on top of the
//! credential store and the token service.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthorService, AuthorUpdate, NewAuthor};
