//! Deterministic leaderboard ordering.

use super::models::{PlayerSeasonSummary, ScoredPlayer, Volatility};
use crate::cli::types::PlayerId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Leaderboard order: Points+ descending, then adjusted PPG descending,
/// then player id ascending.
pub fn leaderboard_order(a: &ScoredPlayer, b: &ScoredPlayer) -> Ordering {
    b.points_plus
        .total_cmp(&a.points_plus)
        .then_with(|| b.adjusted_ppg.total_cmp(&a.adjusted_ppg))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sort and assign ranks 1..=N with no gaps and no duplicates.
pub fn rank_players(
    mut players: Vec<ScoredPlayer>,
    volatility: &BTreeMap<PlayerId, Volatility>,
) -> Vec<PlayerSeasonSummary> {
    players.sort_by(leaderboard_order);

    players
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let vol = volatility.get(&p.player_id).copied().unwrap_or_default();
            PlayerSeasonSummary {
                player_id: p.player_id,
                team_id: p.team_id,
                rank: i as u32 + 1,
                games_played: p.games_played,
                ppg: p.ppg,
                adjusted_ppg: p.adjusted_ppg,
                mpg: p.mpg,
                points_plus: p.points_plus,
                points_plus_stddev: vol.std_dev,
                volatility_percentile: vol.percentile,
                games: p.games,
            }
        })
        .collect()
}
