//! Integration tests for the docs pipeline
//!
//! These tests run the crawler against wiremock servers and push artifacts
//! to an in-memory object store.

mod common;
mod crawl_tests;
mod pipeline_tests;
