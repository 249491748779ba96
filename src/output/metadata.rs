//! Run summary published alongside the leaderboard.

use super::models::{LeaderboardEntry, Metadata};
use crate::{compute::SeasonResult, config::PipelineConfig};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Qualifying players per conference name.
pub fn conference_breakdown(leaderboard: &[LeaderboardEntry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in leaderboard {
        *counts.entry(entry.conference.clone()).or_insert(0) += 1;
    }
    counts
}

/// As-of date: explicit override, else the latest game played, else the day
/// before generation.
pub fn resolve_as_of_date(
    config: &PipelineConfig,
    result: &SeasonResult,
    generated_at: DateTime<Utc>,
) -> String {
    if let Some(date) = config.as_of {
        return date.format("%Y-%m-%d").to_string();
    }
    result
        .latest_game_date
        .clone()
        .unwrap_or_else(|| (generated_at - Duration::days(1)).format("%Y-%m-%d").to_string())
}

pub fn build_metadata(
    config: &PipelineConfig,
    result: &SeasonResult,
    leaderboard: &[LeaderboardEntry],
    generated_at: DateTime<Utc>,
) -> Metadata {
    Metadata {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        season: result.season.label(),
        as_of_date: resolve_as_of_date(config, result, generated_at),
        qualifying_criteria: result.criteria,
        total_qualifying_players: leaderboard.len(),
        league_avg_points_plus: result.league_avg_points_plus(),
        conference_breakdown: conference_breakdown(leaderboard),
        conferences: config.conferences.clone(),
    }
}
