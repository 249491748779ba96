//! `show`: print the published leaderboard.

use crate::{
    cli::types::Conference,
    error::Result,
    output::{read_leaderboard, read_metadata, LeaderboardEntry},
};
use std::path::Path;

/// Top `limit` rows, optionally restricted to one conference. Ranks are kept
/// from the full leaderboard.
pub fn filter_leaderboard(
    entries: Vec<LeaderboardEntry>,
    conference: Option<Conference>,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    entries
        .into_iter()
        .filter(|e| conference.map_or(true, |c| e.conference == c.name()))
        .take(limit)
        .collect()
}

pub fn format_row(entry: &LeaderboardEntry) -> String {
    let volatility = entry
        .points_plus_std_dev
        .map(|sd| format!("{:.1}", sd))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>4}  {:<26} {:<6} {:<9} {:>3} {:>5.1} {:>5.1} {:>5.1} {:>6.1} {:>6}",
        entry.rank,
        entry.name,
        entry.team,
        entry.conference,
        entry.gp,
        entry.mpg,
        entry.ppg,
        entry.adj_ppg,
        entry.points_plus,
        volatility
    )
}

pub fn handle_show(
    output_dir: &Path,
    limit: usize,
    conference: Option<Conference>,
    as_json: bool,
) -> Result<()> {
    let rows = filter_leaderboard(read_leaderboard(output_dir)?, conference, limit);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let meta = read_metadata(output_dir)?;
    println!(
        "Points+ {} (as of {}, {} qualifying, min {} GP / {:.1} MPG)",
        meta.season,
        meta.as_of_date,
        meta.total_qualifying_players,
        meta.qualifying_criteria.min_games,
        meta.qualifying_criteria.min_mpg
    );
    println!(
        "{:>4}  {:<26} {:<6} {:<9} {:>3} {:>5} {:>5} {:>5} {:>6} {:>6}",
        "RK", "PLAYER", "TEAM", "CONF", "GP", "MPG", "PPG", "ADJ", "PTS+", "SD"
    );
    for entry in &rows {
        println!("{}", format_row(entry));
    }
    Ok(())
}
