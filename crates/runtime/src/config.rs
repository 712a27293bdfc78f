//! Runtime configuration structures and loaders.
use std::env;

use arena_core::ArenaConfig;

use crate::api::{Result, RuntimeError};

/// Configuration required to run the arena command surface.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub arena: ArenaConfig,
    /// Capacity of each event bus topic.
    pub event_buffer: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER: usize = 100;

    pub fn new(arena: ArenaConfig) -> Self {
        Self {
            arena,
            event_buffer: Self::DEFAULT_EVENT_BUFFER,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_MAX_PLAYER_HEALTH` - Health cap for players (default: 100)
    /// - `ARENA_HEALTH_KIT_NAME` - Catalog name of the health kit (default: "Health Kit")
    /// - `ARENA_TOP_PERFORMANCE_LIMIT` - Entries per leaderboard section (default: 3)
    /// - `ARENA_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(health) = read_env::<u32>("ARENA_MAX_PLAYER_HEALTH") {
            config.arena.max_player_health = health;
        }

        if let Ok(name) = env::var("ARENA_HEALTH_KIT_NAME")
            && !name.trim().is_empty()
        {
            config.arena.health_kit_name = name.trim().to_string();
        }

        if let Some(limit) = read_env::<usize>("ARENA_TOP_PERFORMANCE_LIMIT") {
            config.arena.top_performance_limit = limit;
        }

        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }

    /// Reject values the rules cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.arena.max_player_health == 0 {
            return Err(RuntimeError::InvalidConfig(
                "max player health must be positive".to_string(),
            ));
        }
        if self.arena.top_performance_limit == 0 {
            return Err(RuntimeError::InvalidConfig(
                "top performance limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RuntimeConfig::default();
        assert_eq!(config.arena.max_player_health, 100);
        assert_eq!(config.event_buffer, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_health_cap_is_rejected() {
        let config = RuntimeConfig::new(ArenaConfig::new().with_max_player_health(0));
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig(_))
        ));
    }
}
