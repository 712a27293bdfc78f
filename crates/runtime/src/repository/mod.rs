//! Storage backends for the arena store traits.
//!
//! The traits themselves live in `arena_core::store`; this module only
//! provides implementations:
//! - [`InMemoryArenaStore`]: serializable in-memory tables

mod memory;

pub use memory::{InMemoryArenaStore, InMemoryTransaction};
