#![allow(dead_code)]

use arena_core::{
    ArenaConfig, ArenaDatabase, ArenaPlayer, ArenaTransaction, GameId, GameStore, InventoryStore,
    Item, ItemId, NewGame, ParticipantKind, PlayerId, PlayerStore, UserRole,
};
use arena_runtime::InMemoryArenaStore;
use arena_runtime::InMemoryTransaction;
use arena_runtime::catalog::{default_items, seed_defaults};
use chrono::Utc;

pub const STICK: ItemId = ItemId(1);
pub const BOW: ItemId = ItemId(2);
pub const CROSSBOW: ItemId = ItemId(3);
pub const ROCKET: ItemId = ItemId(4);
pub const HEALTH_KIT: ItemId = ItemId(5);

/// A seeded store with one active game and two players in it.
pub struct Fixture {
    pub store: InMemoryArenaStore,
    pub config: ArenaConfig,
    pub game: GameId,
    pub killer: PlayerId,
    pub dead: PlayerId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    pub fn with_config(config: ArenaConfig) -> Self {
        let store = InMemoryArenaStore::new();
        seed_defaults(&store, &ArenaConfig::default()).expect("seed catalog");
        let admin = store
            .register_user("UADMIN", "admin", UserRole::Admin)
            .expect("admin");
        let alice = store
            .register_user("U1", "alice", UserRole::User)
            .expect("alice");
        let bob = store
            .register_user("U2", "bob", UserRole::User)
            .expect("bob");

        let mut tx = store.begin().expect("begin");
        let game = tx
            .start_game(NewGame {
                name: "fixture".to_string(),
                team_based: false,
                created_by: admin.id,
                started_at: Utc::now(),
            })
            .expect("start game");
        let players = tx
            .add_players(
                game.id,
                &[alice, bob],
                ParticipantKind::Player,
                config.max_player_health,
            )
            .expect("add players");
        let (killer, dead) = (players[0].id, players[1].id);
        tx.commit().expect("commit");

        Self {
            store,
            config,
            game: game.id,
            killer,
            dead,
        }
    }

    pub fn begin(&self) -> InMemoryTransaction<'_> {
        self.store.begin().expect("begin")
    }

    /// Fresh copies of (killer, dead) with inventories loaded.
    pub fn players(&self, tx: &mut InMemoryTransaction<'_>) -> (ArenaPlayer, ArenaPlayer) {
        let mut killer = tx.find_player(self.killer).expect("find").expect("killer");
        let mut dead = tx.find_player(self.dead).expect("find").expect("dead");
        tx.load_full_inventory(&mut killer).expect("load killer");
        tx.load_full_inventory(&mut dead).expect("load dead");
        (killer, dead)
    }
}

pub fn item(id: ItemId) -> Item {
    default_items(&ArenaConfig::default())
        .into_iter()
        .find(|item| item.id == id)
        .expect("catalog item")
}

/// Give `player` a weapon with exactly `remaining` uses left.
pub fn give_weapon(
    tx: &mut InMemoryTransaction<'_>,
    player: PlayerId,
    id: ItemId,
    remaining: i32,
) {
    let weapon = item(id);
    tx.add_weapon(player, &weapon).expect("add weapon");
    if weapon.has_usage_limit() {
        tx.add_ammo(player, id, remaining).expect("add ammo");
    }
}

pub fn remaining_uses(tx: &InMemoryTransaction<'_>, player: PlayerId, id: ItemId) -> Option<i32> {
    tx.inventory_entry(player, id)
        .expect("inventory entry")
        .remaining_uses
}
