//! Leaderboard rows and per-player detail files.

use super::models::{GameLogEntry, LeaderboardEntry, PlayerDetail};
use crate::{
    cli::types::{PlayerId, TeamId},
    compute::{round1, PlayerSeasonSummary},
    storage::{RosterEntry, TeamRecord},
};
use std::collections::HashMap;
use tracing::warn;

const UNKNOWN: &str = "Unknown";

/// Joins ranked summaries with roster and team metadata.
pub struct LeaderboardAssembler<'a> {
    teams: HashMap<TeamId, &'a TeamRecord>,
    rosters: HashMap<PlayerId, &'a RosterEntry>,
}

impl<'a> LeaderboardAssembler<'a> {
    pub fn new(teams: &'a [TeamRecord], rosters: &'a [RosterEntry]) -> Self {
        Self {
            teams: teams.iter().map(|t| (t.team_id, t)).collect(),
            rosters: rosters.iter().map(|r| (r.player_id, r)).collect(),
        }
    }

    pub fn entry(&self, summary: &PlayerSeasonSummary) -> LeaderboardEntry {
        let roster = self.rosters.get(&summary.player_id);
        if roster.is_none() {
            warn!(player_id = %summary.player_id, "qualifying player missing from rosters");
        }
        let team = self.teams.get(&summary.team_id);
        if team.is_none() {
            warn!(team_id = %summary.team_id, "qualifying player's team missing from teams");
        }

        LeaderboardEntry {
            id: summary.player_id,
            name: roster
                .map(|r| r.name.clone())
                .unwrap_or_else(|| format!("Player {}", summary.player_id)),
            team: team
                .map(|t| t.abbreviation.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            team_name: team
                .map(|t| t.name.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            conference: team
                .map(|t| t.conference.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            rank: summary.rank,
            gp: summary.games_played,
            ppg: round1(summary.ppg),
            adj_ppg: round1(summary.adjusted_ppg),
            points_plus: summary.points_plus,
            mpg: round1(summary.mpg),
            position: roster.and_then(|r| non_empty(r.position.as_deref())),
            jersey: roster.and_then(|r| non_empty(r.jersey.as_deref())),
            class_year: roster.and_then(|r| non_empty(r.class_year.as_deref())),
            points_plus_std_dev: summary.points_plus_stddev.map(round1),
            volatility_pctile: summary.volatility_percentile.map(|p| p.round() as u32),
        }
    }

    /// Leaderboard in rank order.
    pub fn build(&self, players: &[PlayerSeasonSummary]) -> Vec<LeaderboardEntry> {
        players.iter().map(|p| self.entry(p)).collect()
    }
}

/// Detail file contents: the leaderboard row plus the chronological game log.
pub fn build_player_detail(
    entry: &LeaderboardEntry,
    summary: &PlayerSeasonSummary,
) -> PlayerDetail {
    let game_log = summary
        .games
        .iter()
        .map(|g| GameLogEntry {
            date: g.record.date.clone(),
            matchup: g.record.matchup.clone(),
            result: g.record.result.clone(),
            min: g.record.minutes_played,
            pts: g.record.points_scored,
            adj_pts: round1(g.adjusted_points),
            points_plus: g.game_points_plus,
        })
        .collect();

    PlayerDetail {
        player: entry.clone(),
        game_log,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
