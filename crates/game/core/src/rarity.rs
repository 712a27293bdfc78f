//! Rarity ranking.
//!
//! Tier order is the only input; numeric item ids never influence which item
//! counts as "best".

use crate::state::{OwnedItem, RarityTier};

/// Sort key for a rarity tier. Strictly increasing in declaration order.
pub const fn rarity_weight(tier: RarityTier) -> u32 {
    match tier {
        RarityTier::Common => 1,
        RarityTier::Rare => 2,
        RarityTier::Epic => 3,
        RarityTier::Legendary => 4,
    }
}

/// Picks the highest-rarity element.
///
/// Stable ascending sort by weight, then the last element: among several items
/// of the top tier the one appearing last in `items` wins.
pub fn best_by_rarity<T>(items: &[T], tier: impl Fn(&T) -> RarityTier) -> Option<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by_key(|item| rarity_weight(tier(item)));
    ordered.pop()
}

/// The dead player's weapon that a killer loots.
pub fn best_weapon(weapons: &[OwnedItem]) -> Option<&OwnedItem> {
    best_by_rarity(weapons, |owned| owned.item.rarity)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::state::{InventoryEntry, Item, ItemId, ItemKind, PlayerId};

    fn weapon(id: u32, rarity: RarityTier) -> OwnedItem {
        let item = Item::new(
            ItemId(id),
            format!("weapon-{id}"),
            ":dagger_knife:",
            rarity,
            ItemKind::Weapon {
                min_damage: 1,
                max_damage: 2,
            },
        );
        let entry = InventoryEntry::new(PlayerId(1), ItemId(id), None);
        OwnedItem::new(item, &entry)
    }

    #[test]
    fn weight_is_strictly_monotonic() {
        let weights: Vec<u32> = RarityTier::iter().map(rarity_weight).collect();
        assert!(weights.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn legendary_wins_regardless_of_input_order() {
        let orders = [
            [RarityTier::Rare, RarityTier::Legendary, RarityTier::Common],
            [RarityTier::Legendary, RarityTier::Common, RarityTier::Rare],
            [RarityTier::Common, RarityTier::Rare, RarityTier::Legendary],
        ];
        for tiers in orders {
            let weapons: Vec<OwnedItem> = tiers
                .iter()
                .enumerate()
                .map(|(index, tier)| weapon(index as u32 + 1, *tier))
                .collect();
            let best = best_weapon(&weapons).expect("non-empty");
            assert_eq!(best.item.rarity, RarityTier::Legendary);
        }
    }

    #[test]
    fn item_id_does_not_influence_ranking() {
        let weapons = vec![weapon(1, RarityTier::Epic), weapon(999, RarityTier::Common)];
        assert_eq!(best_weapon(&weapons).map(OwnedItem::id), Some(ItemId(1)));
    }

    #[test]
    fn ties_resolve_to_last_in_input() {
        let weapons = vec![
            weapon(1, RarityTier::Epic),
            weapon(2, RarityTier::Common),
            weapon(3, RarityTier::Epic),
        ];
        assert_eq!(best_weapon(&weapons).map(OwnedItem::id), Some(ItemId(3)));
    }

    #[test]
    fn empty_inventory_has_no_best_weapon() {
        assert!(best_weapon(&[]).is_none());
    }
}
