//! Tests for the blog post service
