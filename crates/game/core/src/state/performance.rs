//! Per-game action counters used for the end-of-game leaderboard.

use super::{GameId, PlayerId, PlayerProfile};

/// Action types tracked per player and game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum PerformanceAction {
    Kills,
    DamageDealt,
    Healed,
    WeaponsFound,
    ArmorFound,
    HealthKitsFound,
    CheersGiven,
    CheersReceived,
}

impl PerformanceAction {
    /// Leaderboard section title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Kills => "Most Kills",
            Self::DamageDealt => "Most Damage Dealt",
            Self::Healed => "Most Healing",
            Self::WeaponsFound => "Most Weapons Found",
            Self::ArmorFound => "Most Armor Found",
            Self::HealthKitsFound => "Most Health Kits Found",
            Self::CheersGiven => "Most Cheers Given",
            Self::CheersReceived => "Most Cheers Received",
        }
    }
}

/// One counter row per (player, action, game).
///
/// `player` is the joined display identity; a store may not be able to
/// resolve it (for example when the user row was removed).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceRecord {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub action: PerformanceAction,
    pub value: u32,
    pub player: Option<PlayerProfile>,
}

impl PerformanceRecord {
    pub fn new(game_id: GameId, player_id: PlayerId, action: PerformanceAction, value: u32) -> Self {
        Self {
            game_id,
            player_id,
            action,
            value,
            player: None,
        }
    }

    #[must_use]
    pub fn with_player(mut self, profile: PlayerProfile) -> Self {
        self.player = Some(profile);
        self
    }
}
