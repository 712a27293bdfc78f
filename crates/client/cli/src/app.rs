//! Glue code tying the arena commands to the console.
use anyhow::Result;

use arena_core::{HealthKitLoot, LootReport, User, WeaponLoot};
use arena_runtime::{
    ArenaRepository, EventBus, GameResponse, InMemoryArenaStore, ResponseBody, RuntimeError,
};

use crate::command::{CliCommand, HELP};

pub type Repo = ArenaRepository<InMemoryArenaStore, EventBus>;

/// What the input loop should do after a command.
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct CliApp {
    repo: Repo,
    acting: User,
}

impl CliApp {
    pub fn new(repo: Repo, acting: User) -> Self {
        Self { repo, acting }
    }

    pub fn acting(&self) -> &User {
        &self.acting
    }

    pub fn execute(&mut self, command: CliCommand) -> Result<Flow> {
        let user = &self.acting;
        let output = match command {
            CliCommand::NewGame(text) => render(self.repo.new_game(&text, user)?),
            CliCommand::AskEndGame => render(self.repo.ask_end_game(user)?),
            CliCommand::EndGame => render(self.repo.end_game(user)?),
            CliCommand::CancelEndGame => render(self.repo.cancel_end_game(user)?),
            CliCommand::AddPlayer(text) => render(self.repo.add_player(&text, user)?),
            CliCommand::AddSpectator(text) => render(self.repo.add_spectator(&text, user)?),
            CliCommand::AddBoss(text) => render(self.repo.add_boss_or_guest(&text, user, true)?),
            CliCommand::AddGuest(text) => {
                render(self.repo.add_boss_or_guest(&text, user, false)?)
            }
            CliCommand::ListPlayers => render(self.repo.list_players(user)?),
            CliCommand::ListSpectators => render(self.repo.list_spectators(user)?),
            CliCommand::Performance => render(self.repo.performance(user)?),
            CliCommand::State => match self.repo.current_state()? {
                Some(state) => state.to_json_pretty()?,
                None => "no active game".to_string(),
            },
            CliCommand::Kill { killer, dead } => {
                render_loot(&self.repo.resolve_kill(killer, dead)?)
            }
            CliCommand::Register {
                slack_id,
                display_name,
                role,
            } => {
                let user = self
                    .repo
                    .database()
                    .register_user(&slack_id, &display_name, role)
                    .map_err(RuntimeError::from)?;
                format!("registered <@{}> as {}", user.slack_id, user.role)
            }
            CliCommand::As(slack_id) => {
                self.acting = self.repo.requesting_user(&slack_id)?;
                format!("now acting as <@{}>", self.acting.slack_id)
            }
            CliCommand::Help => HELP.to_string(),
            CliCommand::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(output))
    }
}

fn render(response: GameResponse) -> String {
    match response {
        GameResponse::Response {
            body: ResponseBody::Text(text),
        } => text,
        GameResponse::Response {
            body: ResponseBody::Confirmation(prompt),
        } => format!(
            "{}\n  [{}] /endgame   [{}] /cancelendgame",
            prompt.question, prompt.confirm_label, prompt.cancel_label
        ),
        GameResponse::Error { text } => format!("error: {text}"),
    }
}

fn render_loot(report: &LootReport) -> String {
    let weapon = match report.weapon {
        WeaponLoot::NoWeapon => "no weapon".to_string(),
        WeaponLoot::MergedAmmo { item, ammo } => format!("item {item}: +{ammo} ammo"),
        WeaponLoot::Granted {
            item,
            excess_ammo: Some(excess),
        } => format!("item {item} granted with {excess} uses"),
        WeaponLoot::Granted {
            item,
            excess_ammo: None,
        } => format!("item {item} granted"),
    };
    let health_kit = match report.health_kit {
        HealthKitLoot::NoCatalogEntry => "no health kit in catalog".to_string(),
        HealthKitLoot::NothingToLoot => "no health kits".to_string(),
        HealthKitLoot::Healed { healed, consumed } => {
            format!("healed {healed} using {consumed} kit(s)")
        }
        HealthKitLoot::Stored { quantity } => format!("stored {quantity} kit(s)"),
        HealthKitLoot::Skipped => "kits left behind".to_string(),
    };
    format!("loot: {weapon}; {health_kit}")
}
