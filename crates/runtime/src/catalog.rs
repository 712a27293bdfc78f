//! Default items and zones for a fresh store.
//!
//! Ids are fixed so seeded runs are reproducible.

use arena_core::{ArenaConfig, ArenaZone, Item, ItemId, ItemKind, RarityTier, StoreResult, ZoneId};

use crate::repository::InMemoryArenaStore;

pub fn default_items(config: &ArenaConfig) -> Vec<Item> {
    vec![
        Item::new(
            ItemId(1),
            "Stick",
            ":stick:",
            RarityTier::Common,
            ItemKind::Weapon {
                min_damage: 5,
                max_damage: 10,
            },
        ),
        Item::new(
            ItemId(2),
            "Bow",
            ":bow_and_arrow:",
            RarityTier::Rare,
            ItemKind::Weapon {
                min_damage: 10,
                max_damage: 20,
            },
        )
        .with_usage_limit(10),
        Item::new(
            ItemId(3),
            "Crossbow",
            ":crossbow:",
            RarityTier::Epic,
            ItemKind::Weapon {
                min_damage: 20,
                max_damage: 35,
            },
        )
        .with_usage_limit(5),
        Item::new(
            ItemId(4),
            "Rocket Launcher",
            ":rocket:",
            RarityTier::Legendary,
            ItemKind::Weapon {
                min_damage: 50,
                max_damage: 80,
            },
        )
        .with_usage_limit(2),
        Item::new(
            ItemId(5),
            config.health_kit_name.as_str(),
            ":medkit:",
            RarityTier::Common,
            ItemKind::HealthKit { healing_power: 30 },
        ),
        Item::new(
            ItemId(6),
            "Leather Armor",
            ":shield:",
            RarityTier::Rare,
            ItemKind::Armor { reduction_rate: 15 },
        ),
    ]
}

pub fn default_zones() -> Vec<ArenaZone> {
    vec![
        ArenaZone::new(ZoneId(101), "Forest", ":evergreen_tree:"),
        ArenaZone::new(ZoneId(102), "Desert", ":desert:"),
        ArenaZone::new(ZoneId(103), "Ruins", ":classical_building:"),
    ]
}

/// Load the default catalog and zones into `store`.
pub fn seed_defaults(store: &InMemoryArenaStore, config: &ArenaConfig) -> StoreResult<()> {
    for item in default_items(config) {
        store.insert_item(item)?;
    }
    for zone in default_zones() {
        store.insert_zone(zone)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_the_configured_health_kit() {
        let config = ArenaConfig::new().with_health_kit_name("Medipack");
        let items = default_items(&config);
        let kit = items
            .iter()
            .find(|item| item.is_health_kit())
            .expect("health kit");
        assert_eq!(kit.name, "Medipack");
        assert!(kit.healing_power() > 0);
    }

    #[test]
    fn seeding_enables_every_item() {
        let config = ArenaConfig::default();
        let store = InMemoryArenaStore::new();
        seed_defaults(&store, &config).expect("seed");
        assert_eq!(
            store.enabled_item_count().expect("count"),
            default_items(&config).len()
        );
    }
}
