mod common;

use arena_core::{
    ArenaConfig, ArenaPlayer, ArenaTransaction, GameId, HealthKitLoot, InventoryStore, Item,
    ItemId, LootReport, NotificationKind, ParticipantKind, PlayerId, PlayerStore,
    RecordingNotifier, StoreError, StoreResult, User, WeaponLoot, aggressive_loot,
};
use arena_runtime::InMemoryTransaction;

use common::{BOW, CROSSBOW, Fixture, HEALTH_KIT, ROCKET, STICK, give_weapon, remaining_uses};

fn loot(
    fixture: &Fixture,
    tx: &mut InMemoryTransaction<'_>,
    notifier: &RecordingNotifier,
) -> LootReport {
    let (mut killer, mut dead) = fixture.players(tx);
    aggressive_loot(&mut killer, &mut dead, &fixture.config, tx, notifier).expect("loot")
}

#[test]
fn ammo_counter_saturates_instead_of_overflowing() {
    let fixture = Fixture::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.killer, BOW, i32::MAX);

    tx.add_ammo(fixture.killer, BOW, 5).expect("add ammo");
    assert_eq!(remaining_uses(&tx, fixture.killer, BOW), Some(i32::MAX));

    tx.add_ammo(fixture.killer, BOW, i32::MIN).expect("drain ammo");
    tx.add_ammo(fixture.killer, BOW, i32::MIN).expect("drain ammo");
    assert_eq!(remaining_uses(&tx, fixture.killer, BOW), Some(i32::MIN));
}

#[test]
fn owned_limited_weapon_merges_ammo_without_clamping() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.killer, BOW, 4);
    give_weapon(&mut tx, fixture.dead, BOW, 9);

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(
        report.weapon,
        WeaponLoot::MergedAmmo {
            item: BOW,
            ammo: 9
        }
    );
    // 4 + 9 exceeds the usage limit of 10 and is kept as is.
    assert_eq!(remaining_uses(&tx, fixture.killer, BOW), Some(13));
    assert_eq!(tx.item_count(fixture.killer, BOW).expect("count"), 1);
    assert!(tx.inventory_entry(fixture.dead, BOW).is_none());
}

#[test]
fn fresh_grant_keeps_only_ammo_above_one_load() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.dead, CROSSBOW, 8);

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(
        report.weapon,
        WeaponLoot::Granted {
            item: CROSSBOW,
            excess_ammo: Some(3)
        }
    );
    assert_eq!(remaining_uses(&tx, fixture.killer, CROSSBOW), Some(3));
    assert!(tx.inventory_entry(fixture.dead, CROSSBOW).is_none());
}

#[test]
fn fresh_grant_may_leave_zero_or_negative_uses() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.dead, BOW, 4);

    loot(&fixture, &mut tx, &notifier);

    assert_eq!(remaining_uses(&tx, fixture.killer, BOW), Some(-6));

    let fixture = Fixture::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.dead, CROSSBOW, 5);

    loot(&fixture, &mut tx, &notifier);

    let entry = tx
        .inventory_entry(fixture.killer, CROSSBOW)
        .expect("entry stays at zero uses");
    assert_eq!(entry.remaining_uses, Some(0));
}

#[test]
fn unlimited_weapon_is_granted_without_counter() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.killer, STICK, 0);
    give_weapon(&mut tx, fixture.dead, STICK, 0);

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(
        report.weapon,
        WeaponLoot::Granted {
            item: STICK,
            excess_ammo: None
        }
    );
    assert_eq!(remaining_uses(&tx, fixture.killer, STICK), None);
    assert_eq!(tx.item_count(fixture.killer, STICK).expect("count"), 1);
    assert!(tx.inventory_entry(fixture.dead, STICK).is_none());
}

#[test]
fn only_the_rarest_weapon_changes_hands() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.dead, BOW, 3);
    give_weapon(&mut tx, fixture.dead, ROCKET, 2);
    give_weapon(&mut tx, fixture.dead, STICK, 0);

    let report = loot(&fixture, &mut tx, &notifier);

    assert!(matches!(report.weapon, WeaponLoot::Granted { item, .. } if item == ROCKET));
    let (killer, dead) = fixture.players(&mut tx);
    let killer_weapons: Vec<ItemId> = killer.weapons.iter().map(|owned| owned.id()).collect();
    let dead_weapons: Vec<ItemId> = dead.weapons.iter().map(|owned| owned.id()).collect();
    assert_eq!(killer_weapons, vec![ROCKET]);
    assert_eq!(dead_weapons, vec![BOW, STICK]);

    let weapon_messages: Vec<_> = notifier
        .published()
        .into_iter()
        .filter(|n| n.text.contains(":rocket:"))
        .collect();
    assert_eq!(weapon_messages.len(), 1);
    assert_eq!(weapon_messages[0].kind, NotificationKind::Engine);
}

#[test]
fn unarmed_victim_yields_no_weapon_and_no_message() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(report.weapon, WeaponLoot::NoWeapon);
    assert_eq!(report.health_kit, HealthKitLoot::NothingToLoot);
    assert!(notifier.published().is_empty());
}

#[test]
fn hurt_killer_is_healed_and_victim_kits_are_consumed() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    let (mut killer, _) = fixture.players(&mut tx);
    tx.set_health(&mut killer, 60).expect("hurt killer");
    tx.add_health_kit_quantity(fixture.dead, HEALTH_KIT, 2)
        .expect("give kits");

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(
        report.health_kit,
        HealthKitLoot::Healed {
            healed: 30,
            consumed: 2
        }
    );
    let (killer, _) = fixture.players(&mut tx);
    assert_eq!(killer.health, 90);
    assert_eq!(tx.item_count(fixture.dead, HEALTH_KIT).expect("count"), 0);
    assert_eq!(tx.item_count(fixture.killer, HEALTH_KIT).expect("count"), 0);
    assert_eq!(notifier.published().len(), 1);
}

#[test]
fn healing_is_clamped_to_max_health() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    let (mut killer, _) = fixture.players(&mut tx);
    tx.set_health(&mut killer, 95).expect("hurt killer");
    tx.add_health_kit_quantity(fixture.dead, HEALTH_KIT, 1)
        .expect("give kit");

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(
        report.health_kit,
        HealthKitLoot::Healed {
            healed: 5,
            consumed: 1
        }
    );
    let (killer, _) = fixture.players(&mut tx);
    assert_eq!(killer.health, fixture.config.max_player_health);
}

#[test]
fn healthy_killer_without_kits_stores_them() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    tx.add_health_kit_quantity(fixture.dead, HEALTH_KIT, 3)
        .expect("give kits");

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(report.health_kit, HealthKitLoot::Stored { quantity: 3 });
    assert_eq!(tx.item_count(fixture.killer, HEALTH_KIT).expect("count"), 3);
    assert_eq!(tx.item_count(fixture.dead, HEALTH_KIT).expect("count"), 0);
    assert_eq!(notifier.published().len(), 1);
}

#[test]
fn healthy_killer_with_kits_leaves_everything() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    tx.add_health_kit_quantity(fixture.killer, HEALTH_KIT, 1)
        .expect("killer kit");
    tx.add_health_kit_quantity(fixture.dead, HEALTH_KIT, 2)
        .expect("dead kits");

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(report.health_kit, HealthKitLoot::Skipped);
    assert_eq!(tx.item_count(fixture.killer, HEALTH_KIT).expect("count"), 1);
    assert_eq!(tx.item_count(fixture.dead, HEALTH_KIT).expect("count"), 2);
    assert!(notifier.published().is_empty());
}

#[test]
fn unknown_health_kit_name_skips_the_step() {
    let fixture = Fixture::with_config(ArenaConfig::new().with_health_kit_name("Elixir"));
    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    tx.add_health_kit_quantity(fixture.dead, HEALTH_KIT, 2)
        .expect("dead kits");

    let report = loot(&fixture, &mut tx, &notifier);

    assert_eq!(report.health_kit, HealthKitLoot::NoCatalogEntry);
    assert_eq!(tx.item_count(fixture.dead, HEALTH_KIT).expect("count"), 2);
}

/// Delegates to the in-memory transaction but fails to delete inventory rows.
struct BrokenRemoval<'a, 'tx> {
    inner: &'a mut InMemoryTransaction<'tx>,
}

impl InventoryStore for BrokenRemoval<'_, '_> {
    fn load_full_inventory(&mut self, player: &mut ArenaPlayer) -> StoreResult<()> {
        self.inner.load_full_inventory(player)
    }

    fn item_count(&self, player: PlayerId, item: ItemId) -> StoreResult<u32> {
        self.inner.item_count(player, item)
    }

    fn add_ammo(&mut self, player: PlayerId, item: ItemId, amount: i32) -> StoreResult<()> {
        self.inner.add_ammo(player, item, amount)
    }

    fn add_weapon(&mut self, player: PlayerId, item: &Item) -> StoreResult<()> {
        self.inner.add_weapon(player, item)
    }

    fn remove_weapon(&mut self, _player: PlayerId, _item: ItemId) -> StoreResult<()> {
        Err(StoreError::Backend("inventory table is read-only".to_string()))
    }

    fn add_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()> {
        self.inner.add_health_kit_quantity(player, item, quantity)
    }

    fn subtract_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()> {
        self.inner.subtract_health_kit_quantity(player, item, quantity)
    }

    fn find_health_kit_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        self.inner.find_health_kit_by_name(name)
    }
}

impl PlayerStore for BrokenRemoval<'_, '_> {
    fn heal_or_revive(
        &mut self,
        player: &mut ArenaPlayer,
        amount: u32,
        max_health: u32,
    ) -> StoreResult<()> {
        self.inner.heal_or_revive(player, amount, max_health)
    }

    fn mark_dead(&mut self, player: &mut ArenaPlayer) -> StoreResult<()> {
        self.inner.mark_dead(player)
    }

    fn find_player(&self, player: PlayerId) -> StoreResult<Option<ArenaPlayer>> {
        self.inner.find_player(player)
    }

    fn find_players_by_game(
        &self,
        game: GameId,
        include_spectators: bool,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        self.inner.find_players_by_game(game, include_spectators)
    }

    fn find_living_players_by_game(
        &self,
        game: GameId,
        include_hidden: bool,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        self.inner.find_living_players_by_game(game, include_hidden)
    }

    fn find_spectators_by_game(&self, game: GameId) -> StoreResult<Vec<ArenaPlayer>> {
        self.inner.find_spectators_by_game(game)
    }

    fn add_players(
        &mut self,
        game: GameId,
        users: &[User],
        kind: ParticipantKind,
        health: u32,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        self.inner.add_players(game, users, kind, health)
    }
}

#[test]
fn store_failure_propagates_and_rollback_discards_partial_loot() {
    let fixture = Fixture::new();
    let mut tx = fixture.begin();
    give_weapon(&mut tx, fixture.dead, CROSSBOW, 8);
    tx.commit().expect("seed weapon");

    let notifier = RecordingNotifier::new();
    let mut tx = fixture.begin();
    let (mut killer, mut dead) = fixture.players(&mut tx);
    let mut broken = BrokenRemoval { inner: &mut tx };

    let err = aggressive_loot(&mut killer, &mut dead, &fixture.config, &mut broken, &notifier)
        .expect_err("removal fails");
    assert!(matches!(err, StoreError::Backend(_)));
    // The grant already happened inside the transaction.
    assert!(tx.inventory_entry(fixture.killer, CROSSBOW).is_some());
    assert!(notifier.published().is_empty());
    tx.rollback();

    let tx = fixture.begin();
    assert!(tx.inventory_entry(fixture.killer, CROSSBOW).is_none());
    assert_eq!(remaining_uses(&tx, fixture.dead, CROSSBOW), Some(8));
}
