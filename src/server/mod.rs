//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, token and session
//! authentication, database access through SeaORM repositories, the service layer holding
//! validation and reshaping logic, and the server rendered pages.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
