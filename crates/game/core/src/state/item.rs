//! Catalog items and the inventory rows that reference them.

use super::{ItemId, PlayerId};

/// Ordered rarity classification of items.
///
/// Declaration order is the loot priority order; see [`crate::rarity`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RarityTier {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Weapon with its damage range.
    Weapon { min_damage: u32, max_damage: u32 },

    /// Armor reducing incoming damage by a percentage.
    Armor { reduction_rate: u32 },

    /// Consumable restoring a fixed amount of health.
    HealthKit { healing_power: u32 },
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub emoji: String,
    pub rarity: RarityTier,
    /// Maximum ammo/uses per load. `None` for unlimited-use items.
    pub usage_limit: Option<u32>,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        rarity: RarityTier,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            rarity,
            usage_limit: None,
            kind,
        }
    }

    /// Sets a finite usage limit (builder pattern).
    #[must_use]
    pub fn with_usage_limit(mut self, usage_limit: u32) -> Self {
        self.usage_limit = Some(usage_limit);
        self
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    pub fn is_health_kit(&self) -> bool {
        matches!(self.kind, ItemKind::HealthKit { .. })
    }

    /// Healing power for health kits, zero for everything else.
    pub fn healing_power(&self) -> u32 {
        match self.kind {
            ItemKind::HealthKit { healing_power } => healing_power,
            _ => 0,
        }
    }

    /// True when the item has a finite number of uses per load.
    pub fn has_usage_limit(&self) -> bool {
        self.usage_limit.is_some()
    }
}

/// Stored relation between a player and an item.
///
/// `remaining_uses` is signed: the loot grant formula may leave a freshly
/// looted weapon at zero or below. An entry at zero stays in the inventory
/// until it is removed explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub player_id: PlayerId,
    pub item_id: ItemId,
    /// Uses left. `None` means unlimited.
    pub remaining_uses: Option<i32>,
    pub quantity: u32,
}

impl InventoryEntry {
    pub fn new(player_id: PlayerId, item_id: ItemId, remaining_uses: Option<i32>) -> Self {
        Self {
            player_id,
            item_id,
            remaining_uses,
            quantity: 1,
        }
    }

    /// Sets the stack size (builder pattern).
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// An inventory entry joined with its catalog item.
///
/// This is what `load_full_inventory` places on a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedItem {
    pub item: Item,
    pub remaining_uses: Option<i32>,
    pub quantity: u32,
}

impl OwnedItem {
    pub fn new(item: Item, entry: &InventoryEntry) -> Self {
        Self {
            item,
            remaining_uses: entry.remaining_uses,
            quantity: entry.quantity,
        }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }
}
