//! Runtime wiring for the Arena rules.
//!
//! This crate puts the rules of `arena-core` behind a command surface: every
//! admin command opens one transaction on an [`ArenaDatabase`], answers with a
//! [`GameResponse`] and publishes channel announcements on the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the admin commands and the transaction helper
//! - [`api`] exposes the response and error types clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] provides the in-memory store
//! - [`catalog`] seeds default items and zones
//! - [`config`] loads runtime settings from the environment
//!
//! [`ArenaDatabase`]: arena_core::ArenaDatabase
pub mod api;
pub mod arena;
pub mod catalog;
pub mod config;
pub mod events;
pub mod repository;

pub use api::{
    ConfirmationPrompt, GameResponse, KillRejection, ResponseBody, Result, RuntimeError,
};
pub use arena::{ArenaGameState, ArenaRepository, with_arena_transaction, with_store_transaction};
pub use config::RuntimeConfig;
pub use events::{EventBus, Topic};
pub use repository::{InMemoryArenaStore, InMemoryTransaction};
