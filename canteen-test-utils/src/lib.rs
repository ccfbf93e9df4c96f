//! Test utilities for the canteen server.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares which tables the in-memory
//! database needs, `build()` returns a [`TestContext`] holding the database connection, a
//! memory-backed session and the JWT secret. Fixture helpers on the context then insert
//! owners, customers, restaurants, menu items and orders.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
