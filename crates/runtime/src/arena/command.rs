//! Slash-command text parsing.

use rand::Rng;
use rand::seq::SliceRandom;

const TEAM_BASED: &str = "team based";
const TEAM_BASED_NO_SPACES: &str = "teambased";

const NAME_ADJECTIVES: &[&str] = &[
    "Crimson", "Silent", "Furious", "Golden", "Hidden", "Savage", "Frozen", "Wild",
];
const NAME_NOUNS: &[&str] = &[
    "Colosseum", "Pit", "Clash", "Showdown", "Brawl", "Gauntlet", "Rumble", "Siege",
];

/// Parsed `newgame` text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGameCommand {
    /// Lower-cased name with the team-based marker removed. Empty when the
    /// admin gave none.
    pub name: String,
    pub team_based: bool,
}

pub fn parse_new_game(text: &str) -> NewGameCommand {
    let lower = text.to_lowercase();
    let team_based = lower.contains(TEAM_BASED) || lower.contains(TEAM_BASED_NO_SPACES);
    let name = lower
        .replacen(TEAM_BASED, "", 1)
        .replacen(TEAM_BASED_NO_SPACES, "", 1)
        .trim()
        .to_string();
    NewGameCommand { name, team_based }
}

/// Slack ids mentioned in `text`, first occurrence order, without duplicates.
///
/// Accepts both `<@U123>` and the escaped `<@U123|name>` form.
pub fn parse_slack_ids(text: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("<@") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('>') else {
            break;
        };
        let inner = &after[..end];
        let id = inner.split('|').next().unwrap_or_default().trim();
        if !id.is_empty() && !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
        rest = &after[end + 1..];
    }
    ids
}

/// Split `"<team name> <mentions...>"` into the team name and the mention list.
pub fn parse_boss_or_guest(text: &str) -> (Option<String>, &str) {
    let split = text.find("<@").unwrap_or(text.len());
    let (team, mentions) = text.split_at(split);
    let team = team.trim();
    let team = (!team.is_empty()).then(|| team.to_string());
    (team, mentions)
}

/// Name for a game created without one, e.g. "Crimson Colosseum".
pub fn random_game_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = NAME_ADJECTIVES.choose(rng).copied().unwrap_or("Grand");
    let noun = NAME_NOUNS.choose(rng).copied().unwrap_or("Arena");
    format!("{adjective} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn team_based_marker_is_detected_and_removed() {
        let parsed = parse_new_game("Friday Brawl Team Based");
        assert!(parsed.team_based);
        assert_eq!(parsed.name, "friday brawl");

        let parsed = parse_new_game("teambased");
        assert!(parsed.team_based);
        assert!(parsed.name.is_empty());
    }

    #[test]
    fn plain_name_is_not_team_based() {
        let parsed = parse_new_game("  Lunch Arena ");
        assert!(!parsed.team_based);
        assert_eq!(parsed.name, "lunch arena");
    }

    #[test]
    fn mentions_resolve_escaped_values_and_collapse_duplicates() {
        let ids = parse_slack_ids("<@U1|alice> <@U2> hello <@U1> <@U3|carol>");
        assert_eq!(ids, vec!["U1", "U2", "U3"]);
    }

    #[test]
    fn unterminated_mention_is_ignored() {
        assert_eq!(parse_slack_ids("<@U1> <@U2"), vec!["U1"]);
        assert!(parse_slack_ids("no mentions here").is_empty());
    }

    #[test]
    fn boss_text_splits_team_from_mentions() {
        let (team, mentions) = parse_boss_or_guest("Dark Lords <@U1> <@U2>");
        assert_eq!(team.as_deref(), Some("Dark Lords"));
        assert_eq!(parse_slack_ids(mentions), vec!["U1", "U2"]);

        let (team, mentions) = parse_boss_or_guest("<@U9>");
        assert!(team.is_none());
        assert_eq!(mentions, "<@U9>");
    }

    #[test]
    fn random_names_have_two_words() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = random_game_name(&mut rng);
        assert_eq!(name.split(' ').count(), 2);
    }
}
