//! Intermediate and final records flowing between computation stages

use crate::cli::types::{GameId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// A validated per-game line: both minutes and points are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub game_id: GameId,
    pub date: String,
    pub matchup: String,
    pub result: String,
    pub minutes_played: u32,
    pub points_scored: u32,
}

/// Season aggregates for one covered team, used as opponent context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    pub team_id: TeamId,
    pub games: u32,
    pub avg_points_allowed: f64,
    /// Combined points per game of both teams; stands in for possessions.
    pub avg_total_points: f64,
}

/// A game with its opponent-adjusted point total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedGameRecord {
    pub record: GameRecord,
    pub adjusted_points: f64,
}

/// A game scaled onto the Points+ index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGame {
    pub record: GameRecord,
    pub adjusted_points: f64,
    pub game_points_plus: f64,
}

/// One player's season folded from their adjusted games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub player_id: PlayerId,
    /// Team of the player's most recent game.
    pub team_id: TeamId,
    pub games_played: u32,
    pub ppg: f64,
    pub adjusted_ppg: f64,
    pub mpg: f64,
    /// Chronological.
    pub games: Vec<AdjustedGameRecord>,
}

/// A qualifying player with Points+ applied to the season and to each game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub games_played: u32,
    pub ppg: f64,
    pub adjusted_ppg: f64,
    pub mpg: f64,
    pub points_plus: f64,
    pub games: Vec<ScoredGame>,
}

/// Spread of a player's game-level Points+.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Volatility {
    /// Sample standard deviation; absent with fewer than two games.
    pub std_dev: Option<f64>,
    /// 0-100 rank of `std_dev` among qualifying players; absent with `std_dev`.
    pub percentile: Option<f64>,
}

/// Final per-player result, ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonSummary {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub rank: u32,
    pub games_played: u32,
    pub ppg: f64,
    pub adjusted_ppg: f64,
    pub mpg: f64,
    pub points_plus: f64,
    pub points_plus_stddev: Option<f64>,
    pub volatility_percentile: Option<f64>,
    pub games: Vec<ScoredGame>,
}
