//! In-memory store for testing and development.

mod store;
mod tables;
mod transaction;

pub use store::InMemoryArenaStore;
pub use transaction::InMemoryTransaction;
