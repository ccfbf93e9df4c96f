//! Server application models and type definitions.
//!
//! This module contains the application state, database model type aliases, session data
//! wrappers and the decoded session token extractor.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
