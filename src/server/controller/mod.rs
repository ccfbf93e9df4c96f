//! HTTP controller endpoints for the canteen restaurant routes.
//!
//! Axum handlers for owner pages, restaurant management and restaurant login. Controllers
//! extract the session token and session, call into services, and either render a page or
//! return JSON. Every handler is annotated with utoipa for the OpenAPI document.

pub mod auth;
pub mod owner;
pub mod restaurant;
pub mod util;
