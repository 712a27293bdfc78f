//! Registered users, their teams and roles.

use super::{TeamId, UserId};

/// Permission level of a registered user.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UserRole {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Admin-only commands accept both admin levels.
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub emoji: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub slack_id: String,
    pub display_name: String,
    pub role: UserRole,
    pub team: Option<Team>,
}

impl User {
    pub fn new(id: UserId, slack_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            slack_id: slack_id.into(),
            display_name: display_name.into(),
            role: UserRole::User,
            team: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The identity shown next to this user in rankings and replies.
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            slack_id: self.slack_id.clone(),
            display_name: self.display_name.clone(),
            team_emoji: self.team.as_ref().map(|team| team.emoji.clone()),
        }
    }
}

/// Display identity of a player: who they are and which team they fight for.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    pub slack_id: String,
    pub display_name: String,
    pub team_emoji: Option<String>,
}

impl PlayerProfile {
    pub fn new(slack_id: impl Into<String>) -> Self {
        Self {
            slack_id: slack_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_team_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.team_emoji = Some(emoji.into());
        self
    }

    /// Slack mention markup for this player.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.slack_id)
    }
}
