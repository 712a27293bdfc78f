//! Console input parsing.
use std::str::FromStr;

use arena_core::{PlayerId, UserRole};

/// One line typed at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliCommand {
    NewGame(String),
    AskEndGame,
    EndGame,
    CancelEndGame,
    AddPlayer(String),
    AddSpectator(String),
    AddBoss(String),
    AddGuest(String),
    ListPlayers,
    ListSpectators,
    Performance,
    State,
    Kill { killer: PlayerId, dead: PlayerId },
    Register {
        slack_id: String,
        display_name: String,
        role: UserRole,
    },
    /// Act as another registered user.
    As(String),
    Help,
    Quit,
}

impl FromStr for CliCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim().to_string();
        let name = name.trim_start_matches('/').to_lowercase();

        let command = match name.as_str() {
            "newgame" => Self::NewGame(rest),
            "askendgame" => Self::AskEndGame,
            "endgame" => Self::EndGame,
            "cancelendgame" => Self::CancelEndGame,
            "addplayer" => Self::AddPlayer(rest),
            "addspectator" => Self::AddSpectator(rest),
            "addboss" => Self::AddBoss(rest),
            "addguest" => Self::AddGuest(rest),
            "listplayers" => Self::ListPlayers,
            "listspectators" => Self::ListSpectators,
            "performance" => Self::Performance,
            "state" => Self::State,
            "kill" => parse_kill(&rest)?,
            "register" => parse_register(&rest)?,
            "as" if !rest.is_empty() => Self::As(rest),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command `{other}`; type /help")),
        };
        Ok(command)
    }
}

fn parse_kill(rest: &str) -> Result<CliCommand, String> {
    let mut ids = rest.split_whitespace().map(str::parse::<u32>);
    match (ids.next(), ids.next()) {
        (Some(Ok(killer)), Some(Ok(dead))) => Ok(CliCommand::Kill {
            killer: PlayerId(killer),
            dead: PlayerId(dead),
        }),
        _ => Err("usage: /kill <killer player id> <dead player id>".to_string()),
    }
}

fn parse_register(rest: &str) -> Result<CliCommand, String> {
    let mut parts = rest.split_whitespace();
    let (Some(slack_id), Some(display_name)) = (parts.next(), parts.next()) else {
        return Err("usage: /register <slack id> <name> [user|admin|super_admin]".to_string());
    };
    let role = match parts.next() {
        Some(role) => role
            .parse::<UserRole>()
            .map_err(|_| format!("unknown role `{role}`"))?,
        None => UserRole::User,
    };
    Ok(CliCommand::Register {
        slack_id: slack_id.to_string(),
        display_name: display_name.to_string(),
        role,
    })
}

pub const HELP: &str = "\
/newgame [name] [team based]    start a game
/askendgame | /endgame | /cancelendgame
/addplayer <@U..> ...           add registered users
/addspectator <@U..> ...
/addboss [team] <@U..> ...      add bosses (created on demand)
/addguest [team] <@U..> ...
/listplayers | /listspectators  announce in the channel
/performance                    leaderboard of the last game
/state                          snapshot of the active game
/kill <killer id> <dead id>     resolve a kill
/register <slack id> <name> [role]
/as <slack id>                  act as another user
/quit";
