//! Arena games and zones.

use chrono::{DateTime, Utc};

use super::{GameId, UserId, ZoneId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaGame {
    pub id: GameId,
    pub name: String,
    pub is_active: bool,
    pub team_based: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_by: UserId,
}

impl ArenaGame {
    /// Marks the game finished at `now`.
    pub fn end(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.ended_at = Some(now);
    }
}

/// Parameters for starting a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGame {
    pub name: String,
    pub team_based: bool,
    pub created_by: UserId,
    pub started_at: DateTime<Utc>,
}

/// A location players move between.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaZone {
    pub id: ZoneId,
    pub name: String,
    pub emoji: String,
    pub is_active: bool,
}

impl ArenaZone {
    pub fn new(id: ZoneId, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            is_active: true,
        }
    }
}
