//! `generate`: compute Points+ from the raw store and publish the snapshot.

use super::DataPaths;
use crate::{
    compute::{run_pipeline, SeasonResult},
    config::PipelineConfig,
    error::{PointsPlusError, Result},
    output::{build_snapshot, publish_snapshot, PublishReport, Snapshot},
    storage::{RawDatabase, RawSeasonData},
};
use chrono::{DateTime, Utc};
use std::path::Path;

/// What one generate run produced.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub result: SeasonResult,
    pub snapshot: Snapshot,
    pub report: PublishReport,
}

/// Compute and publish from already-loaded raw data.
///
/// Nothing is written unless the whole computation succeeds.
pub fn generate_snapshot(
    data: &RawSeasonData,
    config: &PipelineConfig,
    output_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<GenerateOutcome> {
    let result = run_pipeline(data, config)?;
    let snapshot = build_snapshot(&result, data, config, generated_at);
    let report = publish_snapshot(&snapshot, output_dir)?;

    Ok(GenerateOutcome {
        result,
        snapshot,
        report,
    })
}

pub fn handle_generate(paths: &DataPaths, config: &PipelineConfig) -> Result<()> {
    let db = RawDatabase::open(&paths.data_dir, config.season)?;
    let data = db.load_season_data()?;
    if data.is_empty() {
        return Err(PointsPlusError::insufficient(format!(
            "raw store for {} is empty; run `fetch` first",
            config.season.label()
        )));
    }

    let outcome = generate_snapshot(&data, config, &paths.output_dir, Utc::now())?;
    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &GenerateOutcome) {
    let meta = &outcome.snapshot.metadata;
    println!(
        "✓ Published {} qualifying players to {}",
        meta.total_qualifying_players,
        outcome.report.output_dir.display()
    );
    println!(
        "  Season {} as of {} (league avg Points+ {:.1}, adj PPG {:.1})",
        meta.season,
        meta.as_of_date,
        meta.league_avg_points_plus,
        outcome.result.league_avg_adjusted_ppg
    );

    println!("\nTop 5:");
    for entry in outcome.snapshot.leaderboard.iter().take(5) {
        println!(
            "  {:>3}. {:<26} {:<6} {:>6.1} Points+  ({:.1} PPG)",
            entry.rank, entry.name, entry.team, entry.points_plus, entry.ppg
        );
    }
}
