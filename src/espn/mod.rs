//! Upstream fetcher for teams, rosters, player game logs and team schedules.
//!
//! Requests run one at a time with a fixed pause between them. Failures for a
//! single team or player are logged and skipped; only a failure to fetch any
//! standings at all aborts the run.

pub mod http;
pub mod parse;

pub use http::{EspnClient, FetchPolicy};

use crate::{
    cli::types::{Conference, Season, TeamId},
    error::{PointsPlusError, Result},
    storage::{RawSeasonData, RosterEntry, TeamRecord},
};
use std::collections::HashMap;
use tracing::{info, warn};

/// Fetch everything needed for one season's computation.
pub async fn fetch_season(
    client: &EspnClient,
    season: Season,
    conferences: &[Conference],
) -> Result<RawSeasonData> {
    info!("Fetching NCAA data for season {}", season.label());

    let teams = fetch_teams(client, season, conferences).await?;
    let rosters = fetch_rosters(client, &teams).await;
    let game_logs = fetch_game_logs(client, season, &teams, &rosters).await;
    let schedules = fetch_schedules(client, season, &teams).await;

    info!(
        "Fetched {} teams, {} players, {} game log rows, {} schedule rows",
        teams.len(),
        rosters.len(),
        game_logs.len(),
        schedules.len()
    );

    Ok(RawSeasonData {
        teams,
        rosters,
        game_logs,
        schedules,
    })
}

async fn fetch_teams(
    client: &EspnClient,
    season: Season,
    conferences: &[Conference],
) -> Result<Vec<TeamRecord>> {
    let mut teams = Vec::new();
    for &conference in conferences {
        match client.get_standings(conference, season).await {
            Ok(payload) => {
                let parsed = parse::parse_standings(&payload, conference);
                info!("{}: {} teams", conference, parsed.len());
                teams.extend(parsed);
            }
            Err(e) => warn!("Standings for {} failed: {}", conference, e),
        }
    }

    if teams.is_empty() {
        return Err(PointsPlusError::Upstream {
            message: "no teams returned for any conference".to_string(),
        });
    }
    Ok(teams)
}

async fn fetch_rosters(client: &EspnClient, teams: &[TeamRecord]) -> Vec<RosterEntry> {
    let mut rosters = Vec::new();
    for (i, team) in teams.iter().enumerate() {
        info!("[{}/{}] Roster for {}", i + 1, teams.len(), team.name);
        match client.get_roster(team.team_id).await {
            Ok(payload) => rosters.extend(parse::parse_roster(&payload, team.team_id)),
            Err(e) => warn!("Roster for {} failed: {}", team.name, e),
        }
    }
    rosters
}

async fn fetch_game_logs(
    client: &EspnClient,
    season: Season,
    teams: &[TeamRecord],
    rosters: &[RosterEntry],
) -> Vec<crate::storage::GameLogRow> {
    let abbreviations: HashMap<TeamId, &str> = teams
        .iter()
        .map(|t| (t.team_id, t.abbreviation.as_str()))
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut errors = 0usize;

    for (i, player) in rosters.iter().enumerate() {
        if i == 0 || (i + 1) % 50 == 0 {
            info!("[{}/{}] Game logs...", i + 1, rosters.len());
        }
        let team_abbr = abbreviations.get(&player.team_id).copied().unwrap_or("UNK");

        match client.get_game_log(player.player_id, season).await {
            Ok(payload) => match parse::parse_game_log(&payload, player, team_abbr) {
                Some(games) => rows.extend(games),
                None => skipped += 1,
            },
            Err(e) => {
                errors += 1;
                warn!("Game log for player {} failed: {}", player.player_id, e);
            }
        }
    }

    info!(
        "{} game log rows; skipped {} players without stats, {} errors",
        rows.len(),
        skipped,
        errors
    );
    rows
}

async fn fetch_schedules(
    client: &EspnClient,
    season: Season,
    teams: &[TeamRecord],
) -> Vec<crate::storage::ScheduleRow> {
    let mut rows = Vec::new();
    for team in teams {
        match client.get_schedule(team.team_id, season).await {
            Ok(payload) => rows.extend(parse::parse_schedule(&payload, team.team_id)),
            Err(e) => warn!("Schedule for {} failed: {}", team.name, e),
        }
    }
    rows
}
