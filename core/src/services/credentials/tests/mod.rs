//! Tests for the credential store

pub(crate) mod mocks;
mod service_tests;
