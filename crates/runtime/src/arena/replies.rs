//! Text of the replies and channel announcements of admin commands.

use arena_core::{ArenaGame, ArenaPlayer, emoji};

use crate::api::ConfirmationPrompt;

pub const CONFIRM_END_GAME_ACTION: &str = "arena_confirm_end_game";
pub const CANCEL_END_GAME_ACTION: &str = "arena_cancel_end_game";
pub const PERFORMANCE_DISPLAYED: &str = "Outstanding Performance displayed";

pub fn admins_only() -> String {
    format!("{} Only admins can do this.", emoji::NO_ENTRY_SIGN)
}

pub fn no_active_game() -> String {
    format!("{} There is no active Arena game.", emoji::NO_ENTRY_SIGN)
}

pub fn active_game() -> String {
    format!(
        "{} There is an active Arena game. End it first.",
        emoji::NO_ENTRY_SIGN
    )
}

pub fn no_last_game() -> String {
    format!("{} No finished Arena game was found.", emoji::NO_ENTRY_SIGN)
}

pub fn no_command_text_provided() -> String {
    format!(
        "{} Mention at least one player after the command.",
        emoji::NO_ENTRY_SIGN
    )
}

pub fn no_boss_provided() -> String {
    format!("{} Mention at least one boss.", emoji::NO_ENTRY_SIGN)
}

pub fn no_guest_provided() -> String {
    format!("{} Mention at least one guest.", emoji::NO_ENTRY_SIGN)
}

pub fn team_name_needed() -> String {
    format!(
        "{} This game is team based: write the team name before the mentions.",
        emoji::NO_ENTRY_SIGN
    )
}

pub fn admin_created_game(game: &ArenaGame) -> String {
    let mode = if game.team_based {
        "team based"
    } else {
        "free for all"
    };
    format!("Arena game *{}* created ({mode}).", game.name)
}

pub fn admin_ended_game(game: &ArenaGame) -> String {
    format!("Arena game *{}* ended.", game.name)
}

pub fn channel_end_game(game: &ArenaGame) -> String {
    format!(
        "The Arena game *{}* is over. Thanks for playing! Stay tuned for the outstanding performances.",
        game.name
    )
}

pub fn cancel_end_game() -> String {
    "Ending the game was cancelled.".to_string()
}

pub fn end_game_confirmation() -> ConfirmationPrompt {
    ConfirmationPrompt {
        question: "Are you *absolutely sure* you want to *end the game*?".to_string(),
        confirm_label: "End Game".to_string(),
        confirm_action: CONFIRM_END_GAME_ACTION.to_string(),
        cancel_label: "Cancel".to_string(),
        cancel_action: CANCEL_END_GAME_ACTION.to_string(),
    }
}

fn mentions(slack_ids: &[String]) -> String {
    slack_ids
        .iter()
        .map(|id| format!("<@{id}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn admin_added_players(slack_ids: &[String]) -> String {
    if slack_ids.is_empty() {
        return "No registered users were added.".to_string();
    }
    format!("Players added: {}", mentions(slack_ids))
}

pub fn admin_added_spectators(slack_ids: &[String]) -> String {
    if slack_ids.is_empty() {
        return "No registered users were added as spectators.".to_string();
    }
    format!("{} Spectators added: {}", emoji::SPECTATOR, mentions(slack_ids))
}

pub fn admin_added_bosses_or_guests(slack_ids: &[String], is_boss: bool) -> String {
    let label = if is_boss { "Bosses" } else { "Guests" };
    if slack_ids.is_empty() {
        return format!("No new {} were added.", label.to_lowercase());
    }
    format!("{} {label} added: {}", emoji::BOSS, mentions(slack_ids))
}

pub fn admin_players_info_posted() -> String {
    "Posted in the arena channel.".to_string()
}

fn health_hearts(health: u32) -> &'static str {
    match health {
        0 => emoji::EMPTY_HEALTH_HEART,
        1..=50 => emoji::HALF_HEALTH_HEART,
        _ => emoji::FULL_HEALTH_HEART,
    }
}

pub fn channel_display_players_info(players: &[ArenaPlayer]) -> String {
    if players.is_empty() {
        return "*Players alive*\nNobody is left standing.".to_string();
    }
    let lines = players
        .iter()
        .map(|player| {
            format!(
                "{} {} | {} {}",
                emoji::team_emoji(player.profile.team_emoji.as_deref()),
                player.mention(),
                health_hearts(player.health),
                player.health,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("*Players alive*\n{lines}")
}

pub fn channel_display_spectators(spectators: &[ArenaPlayer]) -> String {
    if spectators.is_empty() {
        return format!("{} *Spectators*\nNobody is watching.", emoji::SPECTATOR);
    }
    let lines = spectators
        .iter()
        .map(ArenaPlayer::mention)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} *Spectators*\n{lines}", emoji::SPECTATOR)
}

pub fn channel_list_outstanding_performance(rankings: &str) -> String {
    format!("*Outstanding Performance*\n{rankings}")
}
