//! Session data models and utilities.
//!
//! Type-safe wrappers for the values kept in the tower-sessions session: the signed in
//! owner, the signed in restaurant and the session token checked by authenticated routes.

pub mod owner;
pub mod restaurant;
pub mod token;
