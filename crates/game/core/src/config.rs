/// Arena rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Health cap for players; heals are clamped to it.
    pub max_player_health: u32,
    /// Catalog name of the item looted as a health kit.
    pub health_kit_name: String,
    /// Entries shown per action in the outstanding-performance report.
    pub top_performance_limit: usize,
}

impl ArenaConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_PLAYER_HEALTH: u32 = 100;
    pub const DEFAULT_HEALTH_KIT_NAME: &'static str = "Health Kit";
    pub const DEFAULT_TOP_PERFORMANCE_LIMIT: usize = 3;

    pub fn new() -> Self {
        Self {
            max_player_health: Self::DEFAULT_MAX_PLAYER_HEALTH,
            health_kit_name: Self::DEFAULT_HEALTH_KIT_NAME.to_string(),
            top_performance_limit: Self::DEFAULT_TOP_PERFORMANCE_LIMIT,
        }
    }

    #[must_use]
    pub fn with_max_player_health(mut self, max_player_health: u32) -> Self {
        self.max_player_health = max_player_health;
        self
    }

    #[must_use]
    pub fn with_health_kit_name(mut self, name: impl Into<String>) -> Self {
        self.health_kit_name = name.into();
        self
    }

    #[must_use]
    pub fn with_top_performance_limit(mut self, limit: usize) -> Self {
        self.top_performance_limit = limit;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
