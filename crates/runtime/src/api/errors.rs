//! Unified error types surfaced by the runtime API.
//!
//! Only unexpected failures become a [`RuntimeError`]. A command whose
//! preconditions are not met answers `Ok(GameResponse::Error(..))` instead.

use thiserror::Error;

use arena_core::PlayerId;
pub use arena_core::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("event bus topic {0} was not initialized")]
    TopicNotInitialized(crate::events::Topic),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no registered user with slack id {0}")]
    UnknownUser(String),

    #[error("failed to render state snapshot")]
    Snapshot(#[source] serde_json::Error),

    #[error("kill of player {dead} by player {killer} rejected: {reason}")]
    InvalidKill {
        killer: PlayerId,
        dead: PlayerId,
        reason: KillRejection,
    },
}

/// Why a kill between two players cannot be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KillRejection {
    #[error("a player cannot kill themselves")]
    SelfKill,
    #[error("the players are in different games")]
    DifferentGames,
    #[error("spectators take no part in kills")]
    Spectator,
    #[error("the killer is already dead")]
    KillerDead,
    #[error("the victim is already dead")]
    VictimDead,
}
