//! Tests for token service

mod service_tests;
