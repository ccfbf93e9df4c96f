//! Restaurant owner backend for a campus food ordering platform.
//!
//! Owners manage their restaurant and menu and follow incoming orders through
//! server rendered pages, while the JSON routes cover restaurant CRUD and login.

pub mod model;
pub mod server;
