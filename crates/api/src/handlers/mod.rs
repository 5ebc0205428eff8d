//! Request handlers, one module per entity.

pub mod customer;
pub mod item;
pub mod transaction;
