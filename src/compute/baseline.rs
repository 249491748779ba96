//! Opponent season stats and the league baseline they average into.

use super::models::TeamSeasonStats;
use crate::{
    cli::types::TeamId,
    error::{PointsPlusError, Result},
    storage::{ScheduleRow, TeamRecord},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// Season stats per covered team, keyed by team id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpponentStatsIndex {
    stats: BTreeMap<TeamId, TeamSeasonStats>,
}

impl OpponentStatsIndex {
    /// Build from completed schedule games.
    ///
    /// Only teams present in `teams` (the covered conferences) are indexed;
    /// schedule rows for any other team are ignored.
    pub fn from_schedules(schedules: &[ScheduleRow], teams: &[TeamRecord]) -> Self {
        let covered: HashSet<TeamId> = teams.iter().map(|t| t.team_id).collect();

        // (games, points scored, points allowed)
        let mut totals: BTreeMap<TeamId, (u32, f64, f64)> = BTreeMap::new();
        for game in schedules.iter().filter(|g| covered.contains(&g.team_id)) {
            let entry = totals.entry(game.team_id).or_insert((0, 0.0, 0.0));
            entry.0 += 1;
            entry.1 += game.team_score;
            entry.2 += game.opp_score;
        }

        let stats = totals
            .into_iter()
            .map(|(team_id, (games, scored, allowed))| {
                let games_f = games as f64;
                (
                    team_id,
                    TeamSeasonStats {
                        team_id,
                        games,
                        avg_points_allowed: allowed / games_f,
                        avg_total_points: (scored + allowed) / games_f,
                    },
                )
            })
            .collect();

        Self { stats }
    }

    pub fn from_stats(stats: impl IntoIterator<Item = TeamSeasonStats>) -> Self {
        Self {
            stats: stats.into_iter().map(|s| (s.team_id, s)).collect(),
        }
    }

    pub fn get(&self, team_id: TeamId) -> Option<&TeamSeasonStats> {
        self.stats.get(&team_id)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamSeasonStats> {
        self.stats.values()
    }
}

/// League-wide reference point for opponent adjustment.
///
/// Unweighted mean over covered teams; computed once per run, before any
/// game is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueBaseline {
    pub avg_points_allowed: f64,
    pub avg_pace: f64,
}

impl LeagueBaseline {
    pub fn compute(index: &OpponentStatsIndex) -> Result<Self> {
        if index.is_empty() {
            return Err(PointsPlusError::insufficient(
                "no team season stats for the covered conferences",
            ));
        }

        let n = index.len() as f64;
        let avg_points_allowed = index.iter().map(|s| s.avg_points_allowed).sum::<f64>() / n;
        let avg_pace = index.iter().map(|s| s.avg_total_points).sum::<f64>() / n;

        if !(avg_points_allowed > 0.0 && avg_pace > 0.0) {
            return Err(PointsPlusError::insufficient(format!(
                "league baseline is degenerate (points allowed {:.1}, pace {:.1})",
                avg_points_allowed, avg_pace
            )));
        }

        for stats in index.iter() {
            debug!(
                team_id = %stats.team_id,
                games = stats.games,
                avg_points_allowed = stats.avg_points_allowed,
                avg_total_points = stats.avg_total_points,
                "team season stats"
            );
        }
        info!(
            "League baseline over {} teams: avg pts allowed {:.1}, avg pace {:.1}",
            index.len(),
            avg_points_allowed,
            avg_pace
        );

        Ok(Self {
            avg_points_allowed,
            avg_pace,
        })
    }
}
