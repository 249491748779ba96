//! Presentation artifacts: leaderboard, player details, distribution, metadata.
//!
//! [`build_snapshot`] turns a [`SeasonResult`] into the full artifact set in
//! memory; [`publish_snapshot`] writes it out as a unit.

pub mod distribution;
pub mod leaderboard;
pub mod metadata;
pub mod models;
pub mod publish;


pub use distribution::build_distribution;
pub use leaderboard::{build_player_detail, LeaderboardAssembler};
pub use metadata::build_metadata;
pub use models::*;
pub use publish::{
    previous_dir, publish_snapshot, read_distribution, read_leaderboard, read_metadata,
    read_player, PublishReport,
};

use crate::{compute::SeasonResult, config::PipelineConfig, storage::RawSeasonData};
use chrono::{DateTime, Utc};

/// Build every artifact for `result`, joining in names from `data`.
pub fn build_snapshot(
    result: &SeasonResult,
    data: &RawSeasonData,
    config: &PipelineConfig,
    generated_at: DateTime<Utc>,
) -> Snapshot {
    let assembler = LeaderboardAssembler::new(&data.teams, &data.rosters);
    let leaderboard = assembler.build(&result.players);

    let players = leaderboard
        .iter()
        .zip(&result.players)
        .map(|(entry, summary)| build_player_detail(entry, summary))
        .collect();

    let values: Vec<f64> = leaderboard.iter().map(|e| e.points_plus).collect();
    let distribution = build_distribution(&values);
    let metadata = build_metadata(config, result, &leaderboard, generated_at);

    Snapshot {
        leaderboard,
        players,
        distribution,
        metadata,
    }
}
