//! Loot transfer from a dead player to their killer.
//!
//! Two independent steps run in order:
//!
//! 1. **Weapon**: the dead player's highest-rarity weapon moves to the killer.
//!    A killer who already owns that limited-use weapon receives the ammo
//!    instead. A fresh grant keeps only the ammo above one full load
//!    (`remaining_uses - usage_limit`, which may be zero or negative).
//! 2. **Health kit**: the dead player's kits either heal the killer (consumed)
//!    or, for a killer at full health without kits, move into the killer's
//!    inventory. A full-health killer who already carries a kit gets nothing.

use tracing::debug;

use super::replies;
use crate::config::ArenaConfig;
use crate::error::StoreResult;
use crate::notify::{Notification, Notifier};
use crate::rarity::best_weapon;
use crate::state::{ArenaPlayer, ItemId, OwnedItem};
use crate::store::{InventoryStore, PlayerStore};

/// What happens to the looted weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponPlan {
    /// Killer keeps their own entry and receives this much ammo on it.
    MergeAmmo { ammo: i32 },
    /// Killer gets a new entry; `excess_ammo` is added to it for limited items.
    Grant { excess_ammo: Option<i32> },
}

/// Decide how `weapon` reaches a killer that holds `killer_quantity` of it.
pub fn plan_weapon_loot(weapon: &OwnedItem, killer_quantity: u32) -> WeaponPlan {
    let remaining = weapon.remaining_uses.unwrap_or(0);
    match weapon.item.usage_limit {
        Some(_) if killer_quantity > 0 => WeaponPlan::MergeAmmo { ammo: remaining },
        Some(limit) => WeaponPlan::Grant {
            excess_ammo: Some(remaining.saturating_sub(to_uses(limit))),
        },
        None => WeaponPlan::Grant { excess_ammo: None },
    }
}

/// Health-kit branch, decided from quantities read before any mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthKitDecision {
    /// Dead player carried no kits.
    Nothing,
    /// Killer is hurt: heal with the kits, which are consumed.
    Heal,
    /// Killer is at full health with no kits: move the kits over.
    Store,
    /// Killer is at full health and already carries kits: leave everything.
    Skip,
}

pub fn decide_health_kit(
    killer_health: u32,
    max_health: u32,
    killer_kits: u32,
    dead_kits: u32,
) -> HealthKitDecision {
    if dead_kits == 0 {
        HealthKitDecision::Nothing
    } else if killer_health < max_health {
        HealthKitDecision::Heal
    } else if killer_kits == 0 {
        HealthKitDecision::Store
    } else {
        HealthKitDecision::Skip
    }
}

/// Outcome of the weapon step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponLoot {
    /// Dead player had no weapons.
    NoWeapon,
    MergedAmmo { item: ItemId, ammo: i32 },
    Granted {
        item: ItemId,
        excess_ammo: Option<i32>,
    },
}

/// Outcome of the health-kit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthKitLoot {
    /// The catalog has no item with the configured health-kit name.
    NoCatalogEntry,
    NothingToLoot,
    Healed { healed: u32, consumed: u32 },
    Stored { quantity: u32 },
    Skipped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootReport {
    pub weapon: WeaponLoot,
    pub health_kit: HealthKitLoot,
}

/// Run both loot steps for `killer` over `dead`.
///
/// Storage errors abort immediately and leave rollback to the caller.
pub fn aggressive_loot<T, N>(
    killer: &mut ArenaPlayer,
    dead: &mut ArenaPlayer,
    config: &ArenaConfig,
    tx: &mut T,
    notifier: &N,
) -> StoreResult<LootReport>
where
    T: InventoryStore + PlayerStore + ?Sized,
    N: Notifier + ?Sized,
{
    tx.load_full_inventory(killer)?;
    tx.load_full_inventory(dead)?;

    let weapon = loot_weapon(killer, dead, tx, notifier)?;
    let health_kit = loot_health_kit(killer, dead, config, tx, notifier)?;

    Ok(LootReport { weapon, health_kit })
}

fn loot_weapon<T, N>(
    killer: &mut ArenaPlayer,
    dead: &mut ArenaPlayer,
    tx: &mut T,
    notifier: &N,
) -> StoreResult<WeaponLoot>
where
    T: InventoryStore + PlayerStore + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(weapon) = best_weapon(&dead.weapons).cloned() else {
        debug!(dead = %dead.id, "dead player carried no weapon");
        return Ok(WeaponLoot::NoWeapon);
    };
    let item_id = weapon.id();

    let killer_quantity = tx.item_count(killer.id, item_id)?;
    let outcome = match plan_weapon_loot(&weapon, killer_quantity) {
        WeaponPlan::MergeAmmo { ammo } => {
            tx.add_ammo(killer.id, item_id, ammo)?;
            WeaponLoot::MergedAmmo { item: item_id, ammo }
        }
        WeaponPlan::Grant { excess_ammo } => {
            tx.add_weapon(killer.id, &weapon.item)?;
            if let Some(excess) = excess_ammo {
                tx.load_full_inventory(killer)?;
                tx.add_ammo(killer.id, item_id, excess)?;
            }
            WeaponLoot::Granted {
                item: item_id,
                excess_ammo,
            }
        }
    };
    tx.remove_weapon(dead.id, item_id)?;

    tx.load_full_inventory(killer)?;
    tx.load_full_inventory(dead)?;

    debug!(killer = %killer.id, dead = %dead.id, item = %item_id, ?outcome, "weapon looted");
    notifier.publish(Notification::engine(replies::player_loot_weapon(
        killer,
        &weapon.item,
        dead,
    )));
    Ok(outcome)
}

fn loot_health_kit<T, N>(
    killer: &mut ArenaPlayer,
    dead: &mut ArenaPlayer,
    config: &ArenaConfig,
    tx: &mut T,
    notifier: &N,
) -> StoreResult<HealthKitLoot>
where
    T: InventoryStore + PlayerStore + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(kit) = tx.find_health_kit_by_name(&config.health_kit_name)? else {
        debug!(name = %config.health_kit_name, "no health kit in catalog");
        return Ok(HealthKitLoot::NoCatalogEntry);
    };

    let dead_kits = tx.item_count(dead.id, kit.id)?;
    let killer_kits = tx.item_count(killer.id, kit.id)?;
    let decision = decide_health_kit(
        killer.health,
        config.max_player_health,
        killer_kits,
        dead_kits,
    );
    debug!(killer = %killer.id, dead = %dead.id, killer_kits, dead_kits, ?decision, "health kit loot");

    let outcome = match decision {
        HealthKitDecision::Nothing => HealthKitLoot::NothingToLoot,
        HealthKitDecision::Skip => HealthKitLoot::Skipped,
        HealthKitDecision::Heal => {
            let before = killer.health;
            tx.heal_or_revive(killer, kit.healing_power(), config.max_player_health)?;
            tx.subtract_health_kit_quantity(dead.id, kit.id, dead_kits)?;
            notifier.publish(Notification::engine(replies::player_loot_health_kit(
                killer, dead, true,
            )));
            HealthKitLoot::Healed {
                healed: killer.health.saturating_sub(before),
                consumed: dead_kits,
            }
        }
        HealthKitDecision::Store => {
            tx.add_health_kit_quantity(killer.id, kit.id, dead_kits)?;
            tx.subtract_health_kit_quantity(dead.id, kit.id, dead_kits)?;
            notifier.publish(Notification::engine(replies::player_loot_health_kit(
                killer, dead, false,
            )));
            HealthKitLoot::Stored {
                quantity: dead_kits,
            }
        }
    };
    Ok(outcome)
}

fn to_uses(limit: u32) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InventoryEntry, Item, ItemKind, PlayerId, RarityTier};

    fn rifle(remaining: Option<i32>, usage_limit: Option<u32>) -> OwnedItem {
        let mut item = Item::new(
            ItemId(10),
            "Rifle",
            ":rifle:",
            RarityTier::Epic,
            ItemKind::Weapon {
                min_damage: 10,
                max_damage: 20,
            },
        );
        item.usage_limit = usage_limit;
        OwnedItem::new(item, &InventoryEntry::new(PlayerId(2), ItemId(10), remaining))
    }

    #[test]
    fn merge_adds_dead_players_ammo_without_clamping() {
        let weapon = rifle(Some(9), Some(5));
        assert_eq!(
            plan_weapon_loot(&weapon, 1),
            WeaponPlan::MergeAmmo { ammo: 9 }
        );
    }

    #[test]
    fn grant_keeps_only_ammo_beyond_one_load() {
        let weapon = rifle(Some(8), Some(5));
        assert_eq!(
            plan_weapon_loot(&weapon, 0),
            WeaponPlan::Grant {
                excess_ammo: Some(3)
            }
        );
    }

    #[test]
    fn grant_below_one_load_goes_negative() {
        let weapon = rifle(Some(2), Some(5));
        assert_eq!(
            plan_weapon_loot(&weapon, 0),
            WeaponPlan::Grant {
                excess_ammo: Some(-3)
            }
        );

        let exact = rifle(Some(5), Some(5));
        assert_eq!(
            plan_weapon_loot(&exact, 0),
            WeaponPlan::Grant {
                excess_ammo: Some(0)
            }
        );
    }

    #[test]
    fn unlimited_weapon_is_granted_even_when_owned() {
        let weapon = rifle(None, None);
        assert_eq!(
            plan_weapon_loot(&weapon, 1),
            WeaponPlan::Grant { excess_ammo: None }
        );
        assert_eq!(
            plan_weapon_loot(&weapon, 0),
            WeaponPlan::Grant { excess_ammo: None }
        );
    }

    #[test]
    fn health_kit_decision_table_is_exhaustive_and_exclusive() {
        const MAX: u32 = 100;
        for killer_health in [0, 1, 99, 100] {
            for killer_kits in [0, 1, 3] {
                for dead_kits in [0, 1, 2] {
                    let decision = decide_health_kit(killer_health, MAX, killer_kits, dead_kits);
                    let expected = if dead_kits == 0 {
                        HealthKitDecision::Nothing
                    } else if killer_health < MAX {
                        HealthKitDecision::Heal
                    } else if killer_kits == 0 {
                        HealthKitDecision::Store
                    } else {
                        HealthKitDecision::Skip
                    };
                    assert_eq!(
                        decision, expected,
                        "health={killer_health} killer_kits={killer_kits} dead_kits={dead_kits}"
                    );
                }
            }
        }
    }

    #[test]
    fn hurt_killer_heals_even_when_carrying_kits() {
        assert_eq!(decide_health_kit(40, 100, 2, 1), HealthKitDecision::Heal);
    }
}
