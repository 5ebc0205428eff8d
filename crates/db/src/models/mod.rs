//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO and the `Serialize` echo returned by updates

pub mod customer;
pub mod item;
pub mod transaction;
pub mod transaction_view;
