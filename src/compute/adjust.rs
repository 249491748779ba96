//! Opponent adjustment of per-game scoring.

use super::{
    baseline::{LeagueBaseline, OpponentStatsIndex},
    models::{AdjustedGameRecord, GameRecord},
};
use crate::cli::types::TeamId;
use rayon::prelude::*;

/// Scales raw points by opponent defense and pace relative to the league.
///
/// ```text
/// adjusted = raw * (league_pts_allowed / opp_pts_allowed) * (league_pace / opp_pace)
/// ```
///
/// An opponent outside the covered conferences, or one whose stat is zero or
/// non-finite, contributes a factor of 1.0 for that stat.
#[derive(Debug, Clone, Copy)]
pub struct GameAdjuster<'a> {
    baseline: &'a LeagueBaseline,
    opponents: &'a OpponentStatsIndex,
}

impl<'a> GameAdjuster<'a> {
    pub fn new(baseline: &'a LeagueBaseline, opponents: &'a OpponentStatsIndex) -> Self {
        Self {
            baseline,
            opponents,
        }
    }

    /// (defense factor, pace factor) for games against `opponent`.
    pub fn factors(&self, opponent: TeamId) -> (f64, f64) {
        let Some(stats) = self.opponents.get(opponent) else {
            return (1.0, 1.0);
        };

        let defense = ratio(self.baseline.avg_points_allowed, stats.avg_points_allowed);
        let pace = ratio(self.baseline.avg_pace, stats.avg_total_points);
        (defense, pace)
    }

    pub fn adjust_points(&self, raw_points: f64, opponent: TeamId) -> f64 {
        let (defense, pace) = self.factors(opponent);
        raw_points * defense * pace
    }

    pub fn adjust(&self, record: GameRecord) -> AdjustedGameRecord {
        let adjusted_points = self.adjust_points(record.points_scored as f64, record.opponent_id);
        AdjustedGameRecord {
            record,
            adjusted_points,
        }
    }

    /// Adjust every game. Order of the output matches the input.
    pub fn adjust_all(&self, records: Vec<GameRecord>) -> Vec<AdjustedGameRecord> {
        records.into_par_iter().map(|r| self.adjust(r)).collect()
    }
}

fn ratio(league: f64, opponent: f64) -> f64 {
    if opponent.is_finite() && opponent > 0.0 {
        league / opponent
    } else {
        1.0
    }
}
