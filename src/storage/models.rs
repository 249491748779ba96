//! Data models for the raw storage layer

use crate::cli::types::{Conference, GameId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// A team in one of the covered conferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub conference: Conference,
    pub avg_points_for: Option<f64>,
    pub avg_points_against: Option<f64>,
    pub wins: u32,
    pub losses: u32,
}

/// Roster metadata for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub position: Option<String>,
    pub jersey: Option<String>,
    pub class_year: Option<String>,
}

/// One player's line in one game, as ingested.
///
/// `minutes` and `points` are optional so that unparseable upstream values
/// survive ingestion and get excluded (with a warning) at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRow {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub date: String,
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub matchup: String,
    pub result: String,
    pub minutes: Option<u32>,
    pub points: Option<u32>,
}

/// One completed game from a covered team's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub team_id: TeamId,
    pub game_id: GameId,
    pub date: String,
    pub opponent_id: TeamId,
    pub team_score: f64,
    pub opp_score: f64,
}

/// Everything one ingestion run produces for a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeasonData {
    pub teams: Vec<TeamRecord>,
    pub rosters: Vec<RosterEntry>,
    pub game_logs: Vec<GameLogRow>,
    pub schedules: Vec<ScheduleRow>,
}

impl RawSeasonData {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
            && self.rosters.is_empty()
            && self.game_logs.is_empty()
            && self.schedules.is_empty()
    }
}
