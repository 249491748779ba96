//! Published artifact shapes, serialized in the presentation layer's camelCase.

use crate::{
    cli::types::{Conference, PlayerId},
    config::QualifyingCriteria,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of `leaderboard.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: PlayerId,
    pub name: String,
    /// Team abbreviation.
    pub team: String,
    pub team_name: String,
    pub conference: String,
    pub rank: u32,
    pub gp: u32,
    pub ppg: f64,
    pub adj_ppg: f64,
    pub points_plus: f64,
    pub mpg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_plus_std_dev: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility_pctile: Option<u32>,
}

/// One game in a player's detail file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub date: String,
    pub matchup: String,
    pub result: String,
    pub min: u32,
    pub pts: u32,
    pub adj_pts: f64,
    pub points_plus: f64,
}

/// Contents of `players/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: LeaderboardEntry,
    pub game_log: Vec<GameLogEntry>,
}

/// One histogram bin, covering `[min, max)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBin {
    pub min: i64,
    pub max: i64,
    pub label: String,
    pub count: u32,
}

/// Contents of `metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub generated_at: String,
    pub season: String,
    pub as_of_date: String,
    pub qualifying_criteria: QualifyingCriteria,
    pub total_qualifying_players: usize,
    pub league_avg_points_plus: f64,
    pub conference_breakdown: BTreeMap<String, usize>,
    pub conferences: Vec<Conference>,
}

/// Every artifact of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub players: Vec<PlayerDetail>,
    pub distribution: Vec<DistributionBin>,
    pub metadata: Metadata,
}
