//! Arena game mode: admin commands and the transaction boundary they run in.

mod command;
pub mod replies;
mod repository;
mod state;
mod transaction;

pub use command::{
    NewGameCommand, parse_boss_or_guest, parse_new_game, parse_slack_ids, random_game_name,
};
pub use repository::{ArenaRepository, add_players_to_zones};
pub use state::ArenaGameState;
pub use transaction::{with_arena_transaction, with_store_transaction};
