//! Common error infrastructure for arena-core.
//!
//! Two kinds of failure exist in the Arena rules:
//!
//! - **Preconditions** (no active game, caller is not an admin, ...) are not
//!   errors at this layer. Command handlers answer them with a structured
//!   game error response.
//! - **Storage failures** are [`StoreError`]s. They propagate unmodified with
//!   `?` so the caller can roll back the enclosing transaction.

use thiserror::Error;

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input or a missing row the caller asked for explicitly.
    Validation,

    /// Unexpected state inconsistency inside the store.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// The store itself is unusable (poisoned lock, lost connection).
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Entities a store can fail to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Game,
    Player,
    Item,
    InventoryEntry,
    User,
    Zone,
}

/// Errors surfaced by storage collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: u32 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Shorthand for [`StoreError::NotFound`].
    pub fn not_found(entity: EntityKind, id: impl Into<u32>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns the severity level of this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Validation,
            Self::Backend(_) => ErrorSeverity::Internal,
            Self::LockPoisoned => ErrorSeverity::Fatal,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "STORE_LOCK_POISONED",
            Self::NotFound { .. } => "STORE_NOT_FOUND",
            Self::Backend(_) => "STORE_BACKEND",
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
