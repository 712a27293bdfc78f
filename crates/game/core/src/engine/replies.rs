//! Text of the notifications the engine publishes.

use crate::emoji;
use crate::state::{ArenaPlayer, Item};

pub fn player_loot_weapon(killer: &ArenaPlayer, weapon: &Item, dead: &ArenaPlayer) -> String {
    format!(
        "{} {} looted {} {} from {}.",
        emoji::LOOT_CRATE,
        killer.mention(),
        emoji::rarity_color(weapon.rarity),
        weapon.emoji,
        dead.mention(),
    )
}

pub fn player_loot_health_kit(killer: &ArenaPlayer, dead: &ArenaPlayer, healed: bool) -> String {
    if healed {
        format!(
            "{} {} used the health kit {} was carrying and is back at {} {}.",
            emoji::HEALTH_KIT,
            killer.mention(),
            dead.mention(),
            killer.health,
            emoji::FULL_HEALTH_HEART,
        )
    } else {
        format!(
            "{} {} looted a health kit from {} and stored it for later.",
            emoji::HEALTH_KIT,
            killer.mention(),
            dead.mention(),
        )
    }
}

pub fn player_killed(killer: &ArenaPlayer, dead: &ArenaPlayer) -> String {
    format!(
        "{} {} was taken down by {}.",
        emoji::PLAYER_DEAD,
        dead.mention(),
        killer.mention(),
    )
}
