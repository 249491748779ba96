//! `fetch`: pull a season from upstream into the raw store.

use super::DataPaths;
use crate::{
    cli::types::{Conference, Season},
    error::Result,
    espn::{fetch_season, EspnClient, FetchPolicy},
    storage::{RawDatabase, RawSeasonData},
};
use tracing::info;

/// Write `data` into the season's raw store, replacing what was there.
pub fn store_season(paths: &DataPaths, season: Season, data: &RawSeasonData) -> Result<()> {
    let mut db = RawDatabase::open(&paths.data_dir, season)?;
    db.replace_season_data(data)?;

    let (teams, rosters, logs, schedules) = db.table_counts()?;
    info!(
        "Raw store {}: {} teams, {} players, {} game logs, {} schedule rows",
        season, teams, rosters, logs, schedules
    );
    Ok(())
}

pub async fn handle_fetch(
    paths: &DataPaths,
    season: Season,
    conferences: &[Conference],
) -> Result<()> {
    let client = EspnClient::new(FetchPolicy::default())?;
    let data = fetch_season(&client, season, conferences).await?;
    store_season(paths, season, &data)?;

    println!(
        "✓ Fetched {} teams, {} players, {} game log rows, {} schedule rows for {}",
        data.teams.len(),
        data.rosters.len(),
        data.game_logs.len(),
        data.schedules.len(),
        season.label()
    );
    Ok(())
}
