//! Utility functions shared by services and controllers.
//!
//! Field validation for restaurant forms and date/time formatting for order listings.

pub mod time;
pub mod validate;
