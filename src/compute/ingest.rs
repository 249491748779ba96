//! Raw game log rows into validated game records.

use super::models::GameRecord;
use crate::storage::GameLogRow;
use tracing::warn;

/// Convert raw rows into [`GameRecord`]s.
///
/// A row missing its minutes or points is dropped from the player's
/// aggregates with a warning; it never aborts the run.
pub fn load_game_records(rows: &[GameLogRow]) -> Vec<GameRecord> {
    rows.iter()
        .filter_map(|row| match (row.minutes, row.points) {
            (Some(minutes), Some(points)) => Some(GameRecord {
                player_id: row.player_id,
                team_id: row.team_id,
                opponent_id: row.opponent_id,
                game_id: row.game_id.clone(),
                date: row.date.clone(),
                matchup: row.matchup.clone(),
                result: row.result.clone(),
                minutes_played: minutes,
                points_scored: points,
            }),
            (minutes, points) => {
                warn!(
                    player_id = %row.player_id,
                    game_id = %row.game_id,
                    minutes_missing = minutes.is_none(),
                    points_missing = points.is_none(),
                    "excluding game log row with missing stats"
                );
                None
            }
        })
        .collect()
}
