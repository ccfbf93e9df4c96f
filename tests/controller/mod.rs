//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extracted arguments, asserting status codes,
//! which page was rendered and the shape of JSON bodies.

mod auth;
mod owner;
mod restaurant;
