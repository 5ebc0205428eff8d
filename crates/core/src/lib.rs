//! Shared primitives for the Ledgerline workspace.
//!
//! Holds the id/timestamp aliases used by every row type and the domain
//! error enum. This crate performs no I/O.

pub mod error;
pub mod types;
