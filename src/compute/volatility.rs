//! Game-to-game scoring volatility.

use super::{
    models::{ScoredPlayer, Volatility},
    round1,
};
use crate::cli::types::PlayerId;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Sample standard deviation (N-1 denominator). `None` with fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1.0)).sqrt())
}

/// Percentile rank of each value among all values, 0 (lowest) to 100 (highest).
///
/// Uses `rank / (count - 1) * 100` over 0-based ranks after a stable sort by
/// value then key; tied values share the average of their ranks. A single
/// value sits at 50.
pub fn percentile_ranks<K>(values: &[(K, f64)]) -> BTreeMap<K, f64>
where
    K: Copy + Ord,
{
    let mut ranks = BTreeMap::new();
    let n = values.len();
    match n {
        0 => return ranks,
        1 => {
            ranks.insert(values[0].0, 50.0);
            return ranks;
        }
        _ => {}
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let denom = (n - 1) as f64;
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && sorted[end + 1].1 == sorted[start].1 {
            end += 1;
        }
        let avg_rank = (start + end) as f64 / 2.0;
        for (key, _) in &sorted[start..=end] {
            ranks.insert(*key, avg_rank / denom * 100.0);
        }
        start = end + 1;
    }
    ranks
}

/// Computes per-player Points+ spread and ranks it among qualifying players.
pub struct VolatilityAnalyzer;

impl VolatilityAnalyzer {
    /// Volatility for every player in `players`.
    ///
    /// Players with fewer than two games get no std dev and are left out of
    /// the percentile ranking entirely.
    pub fn analyze(players: &[ScoredPlayer]) -> BTreeMap<PlayerId, Volatility> {
        let std_devs: Vec<(PlayerId, Option<f64>)> = players
            .par_iter()
            .map(|p| {
                let values: Vec<f64> = p.games.iter().map(|g| g.game_points_plus).collect();
                (p.player_id, sample_std_dev(&values).map(round1))
            })
            .collect();

        let rankable: Vec<(PlayerId, f64)> = std_devs
            .iter()
            .filter_map(|(id, sd)| sd.map(|sd| (*id, sd)))
            .collect();
        let percentiles = percentile_ranks(&rankable);

        std_devs
            .into_iter()
            .map(|(id, std_dev)| {
                (
                    id,
                    Volatility {
                        std_dev,
                        percentile: percentiles.get(&id).copied(),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{GameId, TeamId};
    use crate::compute::models::{GameRecord, ScoredGame};

    fn scored(player: u64, game_pp: &[f64]) -> ScoredPlayer {
        let games = game_pp
            .iter()
            .enumerate()
            .map(|(i, pp)| ScoredGame {
                record: GameRecord {
                    player_id: PlayerId::new(player),
                    team_id: TeamId::new(1),
                    opponent_id: TeamId::new(2),
                    game_id: GameId::new(format!("{}", i)),
                    date: "2026-01-01".to_string(),
                    matchup: "A vs B".to_string(),
                    result: "W".to_string(),
                    minutes_played: 30,
                    points_scored: 10,
                },
                adjusted_points: 10.0,
                game_points_plus: *pp,
            })
            .collect::<Vec<_>>();
        ScoredPlayer {
            player_id: PlayerId::new(player),
            team_id: TeamId::new(1),
            games_played: games.len() as u32,
            ppg: 10.0,
            adjusted_ppg: 10.0,
            mpg: 30.0,
            points_plus: 100.0,
            games,
        }
    }

    #[test]
    fn test_sample_std_dev_uses_n_minus_one() {
        // Population sd would be 2.0; sample sd is sqrt(32/7).
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[120.0]), None);
        assert_eq!(sample_std_dev(&[100.0, 100.0]), Some(0.0));
    }

    #[test]
    fn test_percentile_ranks_spread_zero_to_hundred() {
        let ranks = percentile_ranks(&[(1u64, 30.0), (2, 10.0), (3, 20.0)]);
        assert_eq!(ranks[&2], 0.0);
        assert_eq!(ranks[&3], 50.0);
        assert_eq!(ranks[&1], 100.0);
    }

    #[test]
    fn test_percentile_ranks_average_ties() {
        let ranks = percentile_ranks(&[(1u64, 5.0), (2, 5.0), (3, 1.0), (4, 9.0), (5, 9.0)]);
        // Sorted: 3 (rank 0), 1/2 (ranks 1,2 -> 1.5), 4/5 (ranks 3,4 -> 3.5); n-1 = 4.
        assert_eq!(ranks[&3], 0.0);
        assert_eq!(ranks[&1], 37.5);
        assert_eq!(ranks[&2], 37.5);
        assert_eq!(ranks[&4], 87.5);
        assert_eq!(ranks[&5], 87.5);
    }

    #[test]
    fn test_percentile_ranks_single_value() {
        let ranks = percentile_ranks(&[(7u64, 12.0)]);
        assert_eq!(ranks[&7], 50.0);
    }

    #[test]
    fn test_analyze_leaves_single_game_players_unranked() {
        let players = vec![
            scored(1, &[100.0, 120.0, 80.0]),
            scored(2, &[150.0]),
            scored(3, &[100.0, 101.0]),
        ];
        let vol = VolatilityAnalyzer::analyze(&players);

        assert_eq!(vol[&PlayerId::new(2)], Volatility::default());
        assert_eq!(vol[&PlayerId::new(1)].std_dev, Some(20.0));
        assert_eq!(vol[&PlayerId::new(1)].percentile, Some(100.0));
        assert_eq!(vol[&PlayerId::new(3)].std_dev, Some(0.7));
        assert_eq!(vol[&PlayerId::new(3)].percentile, Some(0.0));
    }
}
