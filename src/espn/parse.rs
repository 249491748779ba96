//! Extraction of raw records from upstream JSON payloads.
//!
//! Upstream payloads are loosely typed (ids arrive as strings, stats as
//! label-indexed string arrays), so these work on [`serde_json::Value`]
//! rather than derived structs.

use crate::{
    cli::types::{Conference, GameId, PlayerId, TeamId},
    storage::{GameLogRow, RosterEntry, ScheduleRow, TeamRecord},
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;


const STATUS_FINAL: &str = "STATUS_FINAL";

/// Id that may be encoded as a JSON string or number.
fn parse_id<T: std::str::FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric value that may be encoded as a string.
fn loose_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whole minutes from `"34"`, `"34:22"` or `"34.0"`.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    let whole = raw.trim().split(':').next().unwrap_or("").trim();
    if whole.is_empty() {
        return None;
    }
    whole
        .parse::<u32>()
        .ok()
        .or_else(|| parse_points(whole))
}

/// Points from `"21"` or `"21.0"`.
pub fn parse_points(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| value as u32)
}

/// Jersey numbers sometimes arrive as floats (`"23.0"`).
pub fn clean_jersey(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

pub fn format_matchup(team_abbr: &str, at_vs: &str, opp_abbr: &str) -> String {
    format!("{} {} {}", team_abbr, at_vs, opp_abbr)
}

/// Teams from a conference standings payload.
pub fn parse_standings(payload: &Value, conference: Conference) -> Vec<TeamRecord> {
    let entries = payload
        .pointer("/standings/entries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    entries
        .iter()
        .filter_map(|entry| {
            let team = entry.get("team")?;
            let team_id: u32 = parse_id(team.get("id")?)?;

            let stats: HashMap<&str, f64> = entry
                .get("stats")
                .and_then(Value::as_array)
                .map(|stats| {
                    stats
                        .iter()
                        .filter_map(|s| {
                            let name = s.get("name")?.as_str()?;
                            let value = loose_f64(s.get("value")?)?;
                            Some((name, value))
                        })
                        .collect()
                })
                .unwrap_or_default();

            Some(TeamRecord {
                team_id: TeamId::new(team_id),
                name: str_field(team, "displayName").unwrap_or_default(),
                abbreviation: str_field(team, "abbreviation").unwrap_or_default(),
                conference,
                avg_points_for: stats.get("avgPointsFor").copied(),
                avg_points_against: stats.get("avgPointsAgainst").copied(),
                wins: stats.get("wins").map(|w| *w as u32).unwrap_or(0),
                losses: stats.get("losses").map(|l| *l as u32).unwrap_or(0),
            })
        })
        .collect()
}

/// Roster entries from a team roster payload.
pub fn parse_roster(payload: &Value, team_id: TeamId) -> Vec<RosterEntry> {
    let athletes = payload
        .get("athletes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    athletes
        .iter()
        .filter_map(|a| {
            let player_id: u64 = parse_id(a.get("id")?)?;
            let name = str_field(a, "displayName")
                .or_else(|| str_field(a, "fullName"))
                .unwrap_or_default();

            Some(RosterEntry {
                player_id: PlayerId::new(player_id),
                name,
                team_id,
                position: a
                    .get("position")
                    .and_then(|p| str_field(p, "abbreviation")),
                jersey: a.get("jersey").and_then(|j| match j {
                    Value::String(s) => clean_jersey(s),
                    Value::Number(n) => clean_jersey(&n.to_string()),
                    _ => None,
                }),
                class_year: a
                    .get("experience")
                    .and_then(|e| str_field(e, "displayValue")),
            })
        })
        .collect()
}

/// Game log rows from a player game-log payload.
///
/// Returns `None` when the payload has no season data or lacks the `PTS`/`MIN`
/// columns; the player is skipped in that case.
pub fn parse_game_log(
    payload: &Value,
    player: &RosterEntry,
    team_abbr: &str,
) -> Option<Vec<GameLogRow>> {
    let season_types = payload.get("seasonTypes")?.as_array()?;
    if season_types.is_empty() {
        return None;
    }

    let labels: Vec<&str> = payload
        .get("labels")?
        .as_array()?
        .iter()
        .map(|l| l.as_str().unwrap_or(""))
        .collect();
    let pts_idx = labels.iter().position(|l| *l == "PTS")?;
    let min_idx = labels.iter().position(|l| *l == "MIN")?;

    let events = payload.get("events");
    let mut rows = Vec::new();

    for category in season_types
        .iter()
        .filter_map(|st| st.get("categories")?.as_array())
        .flatten()
    {
        let Some(category_events) = category.get("events").and_then(Value::as_array) else {
            continue;
        };

        for event in category_events {
            let Some(event_id) = event.get("eventId").and_then(|id| parse_id::<String>(id)) else {
                continue;
            };
            let stats = event.get("stats").and_then(Value::as_array);
            let stat = |idx: usize| -> Option<String> {
                stats?.get(idx).map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            };

            let info = events.and_then(|e| e.get(&event_id));
            let opponent = info.and_then(|i| i.get("opponent"));
            let opponent_id = opponent
                .and_then(|o| o.get("id"))
                .and_then(parse_id::<u32>)
                .unwrap_or(0);
            let opp_abbr = opponent
                .and_then(|o| str_field(o, "abbreviation"))
                .unwrap_or_else(|| "UNK".to_string());
            let at_vs = info
                .and_then(|i| str_field(i, "atVs"))
                .unwrap_or_else(|| "vs".to_string());
            let date = info
                .and_then(|i| str_field(i, "gameDate"))
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default();

            rows.push(GameLogRow {
                player_id: player.player_id,
                game_id: GameId::new(event_id),
                date,
                team_id: player.team_id,
                opponent_id: TeamId::new(opponent_id),
                matchup: format_matchup(team_abbr, &at_vs, &opp_abbr),
                result: info
                    .and_then(|i| str_field(i, "gameResult"))
                    .unwrap_or_default(),
                minutes: stat(min_idx).as_deref().and_then(parse_minutes),
                points: stat(pts_idx).as_deref().and_then(parse_points),
            });
        }
    }

    debug!(player_id = %player.player_id, games = rows.len(), "parsed game log");
    Some(rows)
}

/// Completed games from a team schedule payload.
pub fn parse_schedule(payload: &Value, team_id: TeamId) -> Vec<ScheduleRow> {
    let events = payload
        .get("events")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    events
        .iter()
        .filter_map(|event| {
            let game_id: String = parse_id(event.get("id")?)?;
            let competition = event.get("competitions")?.as_array()?.first()?;

            let status = competition
                .pointer("/status/type/name")
                .and_then(Value::as_str)
                .unwrap_or("");
            if status != STATUS_FINAL {
                return None;
            }

            let mut team_score = None;
            let mut opponent = None;
            for competitor in competition.get("competitors")?.as_array()? {
                let id: u32 = competitor
                    .pointer("/team/id")
                    .and_then(parse_id)
                    .unwrap_or(0);
                let score = competitor
                    .get("score")
                    .and_then(|s| match s {
                        Value::Object(_) => s.get("value").and_then(loose_f64),
                        other => loose_f64(other),
                    })
                    .unwrap_or(0.0);

                if id == team_id.as_u32() {
                    team_score = Some(score);
                } else {
                    opponent = Some((TeamId::new(id), score));
                }
            }

            let team_score = team_score?;
            let (opponent_id, opp_score) = opponent?;
            let date = event
                .get("date")
                .and_then(Value::as_str)
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default();

            Some(ScheduleRow {
                team_id,
                game_id: GameId::new(game_id),
                date,
                opponent_id,
                team_score,
                opp_score,
            })
        })
        .collect()
}
