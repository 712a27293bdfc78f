//! Outstanding-performance leaderboard.
//!
//! Records are ranked by value, highest first. Equal values keep the order
//! the store returned them in; no secondary key is applied.

use crate::emoji;
use crate::state::{PerformanceAction, PerformanceRecord, PlayerProfile};

pub const FIRST_BLOOD_HEADER: &str = "*First Blood*";

/// Top `limit` records by value, stable for ties.
pub fn rank_performance(limit: usize, records: &[PerformanceRecord]) -> Vec<&PerformanceRecord> {
    let mut ranked: Vec<&PerformanceRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(limit);
    ranked
}

/// One leaderboard line: `\t{rank}. {team emoji} | <@{slack id}>`.
pub fn ranking_line(rank: usize, player: Option<&PlayerProfile>) -> String {
    match player {
        Some(profile) => format!(
            "\t{rank}. {} | {}",
            emoji::team_emoji(profile.team_emoji.as_deref()),
            profile.mention(),
        ),
        None => format!("\t{rank}. {} | _unknown player_", emoji::FREE_AGENT),
    }
}

/// Ranked lines for `action`, one per entry, newline separated.
///
/// Records of other actions are ignored.
pub fn top_player_performance(
    limit: usize,
    action: PerformanceAction,
    records: &[PerformanceRecord],
) -> String {
    let of_action: Vec<PerformanceRecord> = records
        .iter()
        .filter(|record| record.action == action)
        .cloned()
        .collect();
    rank_performance(limit, &of_action)
        .into_iter()
        .enumerate()
        .map(|(index, record)| ranking_line(index + 1, record.player.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn performance_action_header(action: PerformanceAction) -> String {
    format!("\n*{}*", action.title())
}

/// Full report: first blood first, then one section per action.
///
/// Actions nobody scored in get no header at all, so an empty section never
/// reaches the channel.
pub fn outstanding_performance_report(
    limit: usize,
    first_blood: Option<&PerformanceRecord>,
    per_action: &[(PerformanceAction, Vec<PerformanceRecord>)],
) -> String {
    let mut report = format!(
        "{FIRST_BLOOD_HEADER}\n{}",
        ranking_line(1, first_blood.and_then(|record| record.player.as_ref()))
    );
    for (action, records) in per_action {
        let top = top_player_performance(limit, *action, records);
        if top.is_empty() {
            continue;
        }
        report.push_str(&performance_action_header(*action));
        report.push('\n');
        report.push_str(&top);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameId, PlayerId};

    fn record(player: u32, value: u32) -> PerformanceRecord {
        PerformanceRecord::new(GameId(1), PlayerId(player), PerformanceAction::Kills, value)
            .with_player(PlayerProfile::new(format!("U{player}")))
    }

    #[test]
    fn top_two_excludes_the_lowest() {
        let records = vec![record(1, 5), record(2, 3), record(3, 9)];
        let ranked: Vec<(PlayerId, u32)> = rank_performance(2, &records)
            .into_iter()
            .map(|record| (record.player_id, record.value))
            .collect();
        assert_eq!(ranked, vec![(PlayerId(3), 9), (PlayerId(1), 5)]);

        let text = top_player_performance(2, PerformanceAction::Kills, &records);
        assert_eq!(
            text,
            "\t1. :dove_of_peace: | <@U3>\n\t2. :dove_of_peace: | <@U1>"
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![record(7, 4), record(2, 4), record(5, 4)];
        let ranked: Vec<PlayerId> = rank_performance(3, &records)
            .into_iter()
            .map(|record| record.player_id)
            .collect();
        assert_eq!(ranked, vec![PlayerId(7), PlayerId(2), PlayerId(5)]);
    }

    #[test]
    fn line_uses_team_emoji_when_present() {
        let profile = PlayerProfile::new("U9").with_team_emoji(":fire:");
        assert_eq!(ranking_line(2, Some(&profile)), "\t2. :fire: | <@U9>");
        assert_eq!(
            ranking_line(1, None),
            "\t1. :dove_of_peace: | _unknown player_"
        );
    }

    #[test]
    fn report_puts_first_blood_ahead_and_skips_empty_sections() {
        let first_blood = record(4, 1);
        let per_action = vec![
            (PerformanceAction::Kills, vec![record(1, 2), record(4, 1)]),
            (PerformanceAction::Healed, vec![]),
        ];
        let report = outstanding_performance_report(1, Some(&first_blood), &per_action);
        assert!(report.starts_with("*First Blood*\n\t1. :dove_of_peace: | <@U4>"));
        assert!(report.contains("*Most Kills*\n\t1. :dove_of_peace: | <@U1>"));
        assert!(!report.contains("Most Healing"));
    }
}
