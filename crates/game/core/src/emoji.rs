//! Slack emoji shortcodes used in Arena messages.

use crate::state::RarityTier;

pub const NO_ENTRY_SIGN: &str = ":no_entry_sign:";
pub const FULL_HEALTH_HEART: &str = ":health-full:";
pub const HALF_HEALTH_HEART: &str = ":health-half:";
pub const EMPTY_HEALTH_HEART: &str = ":health-empty:";
pub const PLAYER_DEAD: &str = ":rip:";
pub const HEALTH_KIT: &str = ":medkit:";
pub const LOOT_CRATE: &str = ":loot-crate:";
pub const FREE_AGENT: &str = ":dove_of_peace:";
pub const BOSS: &str = ":arena-boss:";
pub const SPECTATOR: &str = ":eyes:";

/// Small colored circle shown next to an item of this tier.
pub const fn rarity_color(tier: RarityTier) -> &'static str {
    match tier {
        RarityTier::Common => ":small_blue_circle:",
        RarityTier::Rare => ":small_green_circle:",
        RarityTier::Epic => ":small_purple_circle:",
        RarityTier::Legendary => ":small_orange_circle:",
    }
}

/// Team emoji, or the free-agent emoji for players without a team.
pub fn team_emoji(emoji: Option<&str>) -> &str {
    match emoji {
        Some(emoji) if !emoji.is_empty() => emoji,
        _ => FREE_AGENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_team_renders_free_agent() {
        assert_eq!(team_emoji(None), FREE_AGENT);
        assert_eq!(team_emoji(Some("")), FREE_AGENT);
        assert_eq!(team_emoji(Some(":fire:")), ":fire:");
    }
}
