//! Points+ scaling against the qualifying-player mean.

use super::{
    aggregate::QualifiedPlayers,
    models::{PlayerAggregate, ScoredGame, ScoredPlayer},
    round1,
};
use crate::error::{PointsPlusError, Result};
use tracing::info;

/// Maps adjusted points onto an index where the qualifying mean is 100.
///
/// The denominator is the mean adjusted PPG of qualifying players only, so
/// it can only be built from a [`QualifiedPlayers`] set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsPlusScaler {
    league_avg_adjusted_ppg: f64,
}

impl PointsPlusScaler {
    pub fn from_qualified(qualified: &QualifiedPlayers) -> Result<Self> {
        if qualified.is_empty() {
            return Err(PointsPlusError::insufficient("no qualifying players"));
        }

        let total: f64 = qualified.players().iter().map(|p| p.adjusted_ppg).sum();
        let avg = total / qualified.len() as f64;

        if !(avg.is_finite() && avg > 0.0) {
            return Err(PointsPlusError::insufficient(format!(
                "qualifying players average {:.2} adjusted PPG",
                avg
            )));
        }

        info!("League avg adjusted PPG: {:.1}", avg);
        Ok(Self {
            league_avg_adjusted_ppg: avg,
        })
    }

    pub fn league_avg_adjusted_ppg(&self) -> f64 {
        self.league_avg_adjusted_ppg
    }

    /// `round(adjusted / league_avg * 100, 1)`; used for both season and game values.
    pub fn scale(&self, adjusted: f64) -> f64 {
        round1(adjusted / self.league_avg_adjusted_ppg * 100.0)
    }

    pub fn score_player(&self, player: PlayerAggregate) -> ScoredPlayer {
        let games = player
            .games
            .into_iter()
            .map(|g| ScoredGame {
                game_points_plus: self.scale(g.adjusted_points),
                adjusted_points: g.adjusted_points,
                record: g.record,
            })
            .collect();

        ScoredPlayer {
            player_id: player.player_id,
            team_id: player.team_id,
            games_played: player.games_played,
            ppg: player.ppg,
            adjusted_ppg: player.adjusted_ppg,
            mpg: player.mpg,
            points_plus: self.scale(player.adjusted_ppg),
            games,
        }
    }

    pub fn score_all(&self, qualified: QualifiedPlayers) -> Vec<ScoredPlayer> {
        qualified
            .into_players()
            .into_iter()
            .map(|p| self.score_player(p))
            .collect()
    }
}
