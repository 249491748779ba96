//! The Points+ computation.
//!
//! A run is a fixed sequence of pure stages, each consuming the previous
//! stage's immutable output:
//!
//! 1. `ingest`: raw game log rows into validated [`GameRecord`]s
//! 2. `baseline`: per-team season stats and the league baseline
//! 3. `adjust`: opponent defense and pace adjustment per game
//! 4. `aggregate`: per-player fold and qualification filter
//! 5. `scale`: Points+ against the qualifying-player mean
//! 6. `volatility`: game-level Points+ spread and its percentile
//! 7. `rank`: deterministic leaderboard order
//!
//! [`pipeline::run_pipeline`] wires them together.

pub mod adjust;
pub mod aggregate;
pub mod baseline;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod rank;
pub mod scale;
pub mod volatility;

pub use adjust::GameAdjuster;
pub use aggregate::{aggregate_players, QualificationFilter, QualifiedPlayers};
pub use baseline::{LeagueBaseline, OpponentStatsIndex};
pub use ingest::load_game_records;
pub use models::*;
pub use pipeline::{run_pipeline, SeasonResult};
pub use scale::PointsPlusScaler;
pub use volatility::VolatilityAnalyzer;

/// Round to one decimal place, the precision every published stat uses.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
