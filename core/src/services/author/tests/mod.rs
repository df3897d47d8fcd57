//! Tests for the author service

mod service_tests;
