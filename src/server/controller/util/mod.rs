//! Helpers shared by controllers.

pub mod owner;
