//! Service layer for business logic.
//!
//! Services coordinate repositories, enforce ownership and validation rules, and shape
//! records into the view models rendered by controllers.

pub mod auth;
pub mod order;
pub mod owner;
pub mod restaurant;
