//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod item_repo;
pub mod transaction_repo;
pub mod transaction_view_repo;

pub use customer_repo::CustomerRepo;
pub use item_repo::ItemRepo;
pub use transaction_repo::TransactionRepo;
pub use transaction_view_repo::TransactionViewRepo;
