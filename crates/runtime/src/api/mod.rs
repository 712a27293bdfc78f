//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the command layer can stay focused on rules and transactions.

pub mod errors;
pub mod response;

pub use errors::{KillRejection, Result, RuntimeError};
pub use response::{ConfirmationPrompt, GameResponse, ResponseBody};
