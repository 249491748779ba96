//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{Conference, GameId, PlayerId, TeamId};

fn create_test_db() -> RawDatabase {
    RawDatabase::new_in_memory().unwrap()
}

fn sample_team(id: u32, abbr: &str, conference: Conference) -> TeamRecord {
    TeamRecord {
        team_id: TeamId::new(id),
        name: format!("{} Team", abbr),
        abbreviation: abbr.to_string(),
        conference,
        avg_points_for: Some(75.0),
        avg_points_against: Some(68.5),
        wins: 12,
        losses: 3,
    }
}

fn sample_game(
    player: u64,
    game: &str,
    date: &str,
    minutes: Option<u32>,
    points: Option<u32>,
) -> GameLogRow {
    GameLogRow {
        player_id: PlayerId::new(player),
        game_id: GameId::new(game),
        date: date.to_string(),
        team_id: TeamId::new(2),
        opponent_id: TeamId::new(57),
        matchup: "AUB vs FLA".to_string(),
        result: "W".to_string(),
        minutes,
        points,
    }
}

fn sample_season() -> RawSeasonData {
    RawSeasonData {
        teams: vec![
            sample_team(57, "FLA", Conference::Sec),
            sample_team(2, "AUB", Conference::Sec),
        ],
        rosters: vec![RosterEntry {
            player_id: PlayerId::new(100),
            name: "Johni Broome".to_string(),
            team_id: TeamId::new(2),
            position: Some("F".to_string()),
            jersey: Some("4".to_string()),
            class_year: None,
        }],
        game_logs: vec![
            sample_game(100, "g2", "2025-11-10", Some(30), Some(22)),
            sample_game(100, "g1", "2025-11-04", Some(28), None),
        ],
        schedules: vec![ScheduleRow {
            team_id: TeamId::new(2),
            game_id: GameId::new("g1"),
            date: "2025-11-04".to_string(),
            opponent_id: TeamId::new(57),
            team_score: 81.0,
            opp_score: 70.0,
        }],
    }
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert_eq!(db.table_counts().unwrap(), (0, 0, 0, 0));
}

#[test]
fn test_replace_and_load_round_trip_counts() {
    let mut db = create_test_db();
    db.replace_season_data(&sample_season()).unwrap();

    assert_eq!(db.table_counts().unwrap(), (2, 1, 2, 1));
}

#[test]
fn test_load_teams_ordered_by_id_with_conference() {
    let mut db = create_test_db();
    db.replace_season_data(&sample_season()).unwrap();

    let teams = db.load_teams().unwrap();
    assert_eq!(teams[0].team_id, TeamId::new(2));
    assert_eq!(teams[1].team_id, TeamId::new(57));
    assert_eq!(teams[0].conference, Conference::Sec);
    assert_eq!(teams[0].avg_points_against, Some(68.5));
}

#[test]
fn test_load_game_logs_ordered_by_date_and_keeps_missing_points() {
    let mut db = create_test_db();
    db.replace_season_data(&sample_season()).unwrap();

    let logs = db.load_game_logs().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date, "2025-11-04");
    assert_eq!(logs[0].points, None);
    assert_eq!(logs[1].points, Some(22));
    assert_eq!(logs[1].minutes, Some(30));
}

#[test]
fn test_replace_season_data_discards_previous_rows() {
    let mut db = create_test_db();
    db.replace_season_data(&sample_season()).unwrap();

    let mut smaller = sample_season();
    smaller.game_logs.truncate(1);
    smaller.teams.truncate(1);
    db.replace_season_data(&smaller).unwrap();

    assert_eq!(db.table_counts().unwrap(), (1, 1, 1, 1));
}

#[test]
fn test_load_season_data_matches_input() {
    let mut db = create_test_db();
    let input = sample_season();
    db.replace_season_data(&input).unwrap();

    let loaded = db.load_season_data().unwrap();
    assert_eq!(loaded.rosters, input.rosters);
    assert_eq!(loaded.schedules, input.schedules);
    assert!(!loaded.is_empty());
}

#[test]
fn test_invalid_conference_in_store_is_an_error() {
    let db = create_test_db();
    db.conn
        .execute(
            "INSERT INTO teams (team_id, name, abbreviation, conference) VALUES (1, 'X', 'X', 'Ivy')",
            [],
        )
        .unwrap();

    assert!(db.load_teams().is_err());
}
