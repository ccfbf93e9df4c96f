//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and return entity models,
//! leaving validation and view shaping to the service layer.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod owner;
pub mod restaurant;
