//! Arena admin commands.
//!
//! Every command runs in exactly one transaction. Unmet preconditions answer
//! with [`GameResponse::Error`]; only store failures surface as `Err` and roll
//! the transaction back.

use chrono::Utc;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use arena_core::engine::outstanding_performance_report;
use arena_core::{
    ArenaConfig, ArenaDatabase, ArenaEngine, ArenaPlayer, EntityKind, GameStore, InventoryStore,
    LootReport, NewGame, Notification, Notifier, ParticipantKind, PerformanceAction,
    PerformanceStore, PlayerId, PlayerStore, StoreError, StoreResult, User, UserStore, ZoneStore,
};

use super::command::{parse_boss_or_guest, parse_new_game, parse_slack_ids, random_game_name};
use super::replies;
use super::state::ArenaGameState;
use super::transaction::{with_arena_transaction, with_store_transaction};
use crate::api::{GameResponse, KillRejection, Result, RuntimeError};

/// Admin command surface over a database and a notifier.
pub struct ArenaRepository<D, N> {
    db: D,
    notifier: N,
    engine: ArenaEngine,
}

impl<D, N> ArenaRepository<D, N>
where
    D: ArenaDatabase,
    N: Notifier,
{
    pub fn new(db: D, notifier: N, config: ArenaConfig) -> Self {
        Self {
            db,
            notifier,
            engine: ArenaEngine::new(config),
        }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn engine(&self) -> &ArenaEngine {
        &self.engine
    }

    fn config(&self) -> &ArenaConfig {
        self.engine.config()
    }

    /// Registered user behind a Slack id.
    pub fn requesting_user(&self, slack_id: &str) -> Result<User> {
        with_store_transaction(&self.db, |tx| tx.find_user_by_slack_id(slack_id))?
            .ok_or_else(|| RuntimeError::UnknownUser(slack_id.to_string()))
    }

    pub fn new_game(&self, text: &str, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if tx.find_active_game()?.is_some() {
                return Ok(GameResponse::error(replies::active_game()));
            }

            let command = parse_new_game(text);
            let name = if command.name.is_empty() {
                random_game_name(&mut rand::thread_rng())
            } else {
                command.name
            };
            let game = tx.start_game(NewGame {
                name,
                team_based: command.team_based,
                created_by: user.id,
                started_at: Utc::now(),
            })?;
            tx.enable_all_items()?;
            tx.activate_all_zones()?;

            info!(game = %game.id, name = %game.name, team_based = game.team_based, "arena game created");
            Ok(GameResponse::text(replies::admin_created_game(&game)))
        })
    }

    pub fn ask_end_game(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if tx.find_active_game()?.is_none() {
                return Ok(GameResponse::error(replies::no_active_game()));
            }
            Ok(GameResponse::confirmation(replies::end_game_confirmation()))
        })
    }

    pub fn end_game(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            let Some(mut game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            tx.enable_all_items()?;
            tx.end_game(&mut game, Utc::now())?;
            tx.activate_all_zones()?;
            self.notifier
                .publish(Notification::channel(replies::channel_end_game(&game)));

            info!(game = %game.id, "arena game ended");
            Ok(GameResponse::text(replies::admin_ended_game(&game)))
        })
    }

    pub fn cancel_end_game(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if tx.find_active_game()?.is_none() {
                return Ok(GameResponse::error(replies::no_active_game()));
            }
            Ok(GameResponse::text(replies::cancel_end_game()))
        })
    }

    /// Add the registered users mentioned in `text` as players and place
    /// them in zones. Unregistered mentions are skipped.
    pub fn add_player(&self, text: &str, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if text.trim().is_empty() {
                return Ok(GameResponse::error(replies::no_command_text_provided()));
            }
            let Some(game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            let users = tx.find_users_by_slack_ids(&parse_slack_ids(text))?;
            let mut players = tx.add_players(
                game.id,
                &users,
                ParticipantKind::Player,
                self.config().max_player_health,
            )?;
            add_players_to_zones(tx, &mut players, &mut rand::thread_rng())?;

            let added = joined_slack_ids(&players);
            info!(game = %game.id, count = added.len(), "players added");
            Ok(GameResponse::text(replies::admin_added_players(&added)))
        })
    }

    pub fn add_spectator(&self, text: &str, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if text.trim().is_empty() {
                return Ok(GameResponse::error(replies::no_command_text_provided()));
            }
            let Some(game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            let users = tx.find_users_by_slack_ids(&parse_slack_ids(text))?;
            let spectators = tx.add_players(
                game.id,
                &users,
                ParticipantKind::Spectator,
                self.config().max_player_health,
            )?;

            let added = joined_slack_ids(&spectators);
            info!(game = %game.id, count = added.len(), "spectators added");
            Ok(GameResponse::text(replies::admin_added_spectators(&added)))
        })
    }

    /// Add bosses or guests from `"<team name> <mentions...>"`, registering
    /// unknown users on the way.
    pub fn add_boss_or_guest(&self, text: &str, user: &User, is_boss: bool) -> Result<GameResponse> {
        let missing = || {
            if is_boss {
                replies::no_boss_provided()
            } else {
                replies::no_guest_provided()
            }
        };
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if text.trim().is_empty() {
                return Ok(GameResponse::error(missing()));
            }
            let Some(game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            let (team_name, mentions) = parse_boss_or_guest(text);
            if game.team_based && team_name.is_none() {
                return Ok(GameResponse::error(replies::team_name_needed()));
            }
            let slack_ids = parse_slack_ids(mentions);
            if slack_ids.is_empty() {
                return Ok(GameResponse::error(missing()));
            }

            let users = tx.get_or_create_bosses_or_guests(&slack_ids, team_name.as_deref(), is_boss)?;
            let kind = if is_boss {
                ParticipantKind::Boss
            } else {
                ParticipantKind::Guest
            };
            let mut players =
                tx.add_players(game.id, &users, kind, self.config().max_player_health)?;
            add_players_to_zones(tx, &mut players, &mut rand::thread_rng())?;

            let added = joined_slack_ids(&players);
            info!(game = %game.id, kind = %kind, count = added.len(), "bosses or guests added");
            Ok(GameResponse::text(replies::admin_added_bosses_or_guests(
                &added, is_boss,
            )))
        })
    }

    pub fn list_players(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            let Some(game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            let alive = tx.find_living_players_by_game(game.id, false)?;
            self.notifier.publish(Notification::channel(
                replies::channel_display_players_info(&alive),
            ));
            Ok(GameResponse::text(replies::admin_players_info_posted()))
        })
    }

    pub fn list_spectators(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            let Some(game) = tx.find_active_game()? else {
                return Ok(GameResponse::error(replies::no_active_game()));
            };

            let spectators = tx.find_spectators_by_game(game.id)?;
            self.notifier.publish(Notification::channel(
                replies::channel_display_spectators(&spectators),
            ));
            Ok(GameResponse::text(replies::admin_players_info_posted()))
        })
    }

    /// Announce the leaderboard of the last finished game and clear its zones.
    pub fn performance(&self, user: &User) -> Result<GameResponse> {
        with_store_transaction(&self.db, |tx| {
            if !user.is_admin() {
                return Ok(GameResponse::error(replies::admins_only()));
            }
            if tx.find_active_game()?.is_some() {
                return Ok(GameResponse::error(replies::active_game()));
            }
            let Some(last_game) = tx.find_last_game()? else {
                return Ok(GameResponse::error(replies::no_last_game()));
            };

            let first_blood = tx.find_first_blood(last_game.id)?;
            let per_action = PerformanceAction::iter()
                .map(|action| {
                    tx.find_players_performance_by_action(last_game.id, action)
                        .map(|records| (action, records))
                })
                .collect::<StoreResult<Vec<_>>>()?;
            let report = outstanding_performance_report(
                self.config().top_performance_limit,
                first_blood.as_ref(),
                &per_action,
            );
            self.notifier.publish(Notification::channel(
                replies::channel_list_outstanding_performance(&report),
            ));

            let cleared = self.engine.clear_game_zones(last_game.id, tx)?;
            info!(game = %last_game.id, cleared, "outstanding performance displayed");
            Ok(GameResponse::text(replies::PERFORMANCE_DISPLAYED))
        })
    }

    /// Resolve a kill between two living combatants of the same game and
    /// loot the victim.
    pub fn resolve_kill(&self, killer_id: PlayerId, dead_id: PlayerId) -> Result<LootReport> {
        let rejected = |reason| RuntimeError::InvalidKill {
            killer: killer_id,
            dead: dead_id,
            reason,
        };
        if killer_id == dead_id {
            return Err(rejected(KillRejection::SelfKill));
        }
        with_arena_transaction(&self.db, |tx| {
            let mut killer = tx
                .find_player(killer_id)?
                .ok_or_else(|| StoreError::not_found(EntityKind::Player, killer_id))?;
            let mut dead = tx
                .find_player(dead_id)?
                .ok_or_else(|| StoreError::not_found(EntityKind::Player, dead_id))?;
            if let Some(reason) = kill_rejection(&killer, &dead) {
                return Err(rejected(reason));
            }
            Ok(self
                .engine
                .resolve_kill(&mut killer, &mut dead, tx, &self.notifier)?)
        })
    }

    /// Snapshot of the active game, if any.
    pub fn current_state(&self) -> Result<Option<ArenaGameState>> {
        with_store_transaction(&self.db, |tx| {
            let Some(game) = tx.find_active_game()? else {
                return Ok(None);
            };
            let mut players = tx.find_players_by_game(game.id, false)?;
            for player in &mut players {
                tx.load_full_inventory(player)?;
            }
            let spectators = tx.find_spectators_by_game(game.id)?;
            let zones = tx.find_active_zones()?;
            Ok(Some(ArenaGameState {
                game,
                players,
                spectators,
                zones,
            }))
        })
    }
}

fn kill_rejection(killer: &ArenaPlayer, dead: &ArenaPlayer) -> Option<KillRejection> {
    if killer.game_id != dead.game_id {
        Some(KillRejection::DifferentGames)
    } else if !killer.kind.is_combatant() || !dead.kind.is_combatant() {
        Some(KillRejection::Spectator)
    } else if !killer.is_alive {
        Some(KillRejection::KillerDead)
    } else if !dead.is_alive {
        Some(KillRejection::VictimDead)
    } else {
        None
    }
}

fn joined_slack_ids(players: &[ArenaPlayer]) -> Vec<String> {
    players
        .iter()
        .map(|player| player.slack_id().to_string())
        .collect()
}

/// Put every combatant of `players` in a random active zone.
///
/// Without active zones the players stay where they are.
pub fn add_players_to_zones<T, R>(
    tx: &mut T,
    players: &mut [ArenaPlayer],
    rng: &mut R,
) -> StoreResult<()>
where
    T: ZoneStore + ?Sized,
    R: Rng + ?Sized,
{
    let zones = tx.find_active_zones()?;
    if zones.is_empty() {
        debug!("no active zones; players keep their position");
        return Ok(());
    }
    for player in players.iter_mut().filter(|player| player.kind.is_combatant()) {
        let zone = zones[rng.gen_range(0..zones.len())].id;
        tx.move_player_to_zone(player, zone)?;
    }
    Ok(())
}
