//! Per-player season fold and the qualification filter.

use super::models::{AdjustedGameRecord, PlayerAggregate};
use crate::{cli::types::PlayerId, config::QualifyingCriteria};
use std::collections::BTreeMap;
use tracing::info;

/// Fold adjusted games into one aggregate per player, ordered by player id.
///
/// Every game counts exactly once, including zero-minute appearances.
pub fn aggregate_players(games: Vec<AdjustedGameRecord>) -> Vec<PlayerAggregate> {
    let mut by_player: BTreeMap<PlayerId, Vec<AdjustedGameRecord>> = BTreeMap::new();
    for game in games {
        by_player.entry(game.record.player_id).or_default().push(game);
    }

    by_player
        .into_iter()
        .filter_map(|(player_id, mut games)| {
            games.sort_by(|a, b| {
                a.record
                    .date
                    .cmp(&b.record.date)
                    .then_with(|| a.record.game_id.cmp(&b.record.game_id))
            });

            let team_id = games.last()?.record.team_id;
            let n = games.len() as f64;
            let total_points: f64 = games.iter().map(|g| g.record.points_scored as f64).sum();
            let total_adjusted: f64 = games.iter().map(|g| g.adjusted_points).sum();
            let total_minutes: f64 = games.iter().map(|g| g.record.minutes_played as f64).sum();

            Some(PlayerAggregate {
                player_id,
                team_id,
                games_played: games.len() as u32,
                ppg: total_points / n,
                adjusted_ppg: total_adjusted / n,
                mpg: total_minutes / n,
                games,
            })
        })
        .collect()
}

/// Players that passed the qualification filter.
///
/// Built once per run and threaded through scaling and ranking; nothing
/// downstream re-filters.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedPlayers {
    players: Vec<PlayerAggregate>,
    excluded: usize,
}

impl QualifiedPlayers {
    pub fn players(&self) -> &[PlayerAggregate] {
        &self.players
    }

    pub fn into_players(self) -> Vec<PlayerAggregate> {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players that were aggregated but did not qualify.
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

/// Minimum games and minutes-per-game gate.
#[derive(Debug, Clone, Copy)]
pub struct QualificationFilter {
    criteria: QualifyingCriteria,
}

impl QualificationFilter {
    pub fn new(criteria: QualifyingCriteria) -> Self {
        Self { criteria }
    }

    pub fn apply(&self, players: Vec<PlayerAggregate>) -> QualifiedPlayers {
        let total = players.len();
        let players: Vec<PlayerAggregate> = players
            .into_iter()
            .filter(|p| self.criteria.admits(p.games_played, p.mpg))
            .collect();
        let excluded = total - players.len();

        info!(
            "{} qualifying players (>={} GP, >={:.1} MPG), {} excluded",
            players.len(),
            self.criteria.min_games,
            self.criteria.min_mpg,
            excluded
        );

        QualifiedPlayers { players, excluded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{GameId, TeamId};
    use crate::compute::models::GameRecord;

    fn adjusted(
        player: u64,
        game: &str,
        date: &str,
        minutes: u32,
        points: u32,
        adj: f64,
    ) -> AdjustedGameRecord {
        AdjustedGameRecord {
            record: GameRecord {
                player_id: PlayerId::new(player),
                team_id: TeamId::new(5),
                opponent_id: TeamId::new(6),
                game_id: GameId::new(game),
                date: date.to_string(),
                matchup: "X vs Y".to_string(),
                result: "W".to_string(),
                minutes_played: minutes,
                points_scored: points,
            },
            adjusted_points: adj,
        }
    }

    fn player_with_games(player: u64, games: u32, minutes: u32) -> PlayerAggregate {
        let records = (0..games)
            .map(|i| adjusted(player, &format!("g{:02}", i), "2025-12-01", minutes, 10, 10.0))
            .collect();
        aggregate_players(records).remove(0)
    }

    #[test]
    fn test_aggregate_means() {
        let games = vec![
            adjusted(1, "a", "2025-11-05", 30, 20, 22.0),
            adjusted(1, "b", "2025-11-08", 20, 10, 8.0),
        ];
        let players = aggregate_players(games);

        assert_eq!(players.len(), 1);
        let p = &players[0];
        assert_eq!(p.games_played, 2);
        assert_eq!(p.ppg, 15.0);
        assert_eq!(p.adjusted_ppg, 15.0);
        assert_eq!(p.mpg, 25.0);
    }

    #[test]
    fn test_aggregate_groups_and_orders_chronologically() {
        let games = vec![
            adjusted(2, "z", "2025-12-20", 30, 5, 5.0),
            adjusted(1, "b", "2025-11-08", 20, 10, 8.0),
            adjusted(2, "y", "2025-11-01", 30, 7, 7.0),
        ];
        let players = aggregate_players(games);

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_id, PlayerId::new(1));
        assert_eq!(players[1].player_id, PlayerId::new(2));
        assert_eq!(players[1].games[0].record.date, "2025-11-01");
        assert_eq!(players[1].games[1].record.date, "2025-12-20");
    }

    #[test]
    fn test_aggregate_counts_zero_minute_games() {
        let games = vec![
            adjusted(1, "a", "2025-11-05", 0, 0, 0.0),
            adjusted(1, "b", "2025-11-08", 24, 12, 12.0),
        ];
        let players = aggregate_players(games);
        assert_eq!(players[0].games_played, 2);
        assert_eq!(players[0].mpg, 12.0);
    }

    #[test]
    fn test_doubling_games_keeps_averages() {
        let once: Vec<_> = (0..5)
            .map(|i| adjusted(1, &format!("a{}", i), "2025-11-05", 25, 14, 15.5))
            .collect();
        let twice: Vec<_> = (0..10)
            .map(|i| adjusted(1, &format!("a{}", i), "2025-11-05", 25, 14, 15.5))
            .collect();

        let a = aggregate_players(once).remove(0);
        let b = aggregate_players(twice).remove(0);
        assert_eq!(a.ppg, b.ppg);
        assert_eq!(a.adjusted_ppg, b.adjusted_ppg);
        assert_eq!(a.mpg, b.mpg);
    }

    #[test]
    fn test_filter_excludes_nine_games_regardless_of_scoring() {
        let filter = QualificationFilter::new(QualifyingCriteria::new(10, 12.0));
        let qualified = filter.apply(vec![
            player_with_games(1, 9, 38),
            player_with_games(2, 10, 20),
        ]);

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified.players()[0].player_id, PlayerId::new(2));
        assert_eq!(qualified.excluded(), 1);
    }

    #[test]
    fn test_filter_excludes_low_minutes() {
        let filter = QualificationFilter::new(QualifyingCriteria::default());
        let qualified = filter.apply(vec![
            player_with_games(1, 25, 11),
            player_with_games(2, 25, 12),
        ]);

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified.players()[0].player_id, PlayerId::new(2));
    }
}
