//! End-to-end tests: raw store -> computation -> published snapshot

use chrono::{TimeZone, Utc};
use ncaa_points_plus::{
    compute::run_pipeline,
    output::{build_snapshot, publish_snapshot, read_leaderboard, read_metadata, read_player},
    storage::*,
    Conference, GameId, PipelineConfig, PlayerId, PointsPlusError, QualifyingCriteria, Season,
    TeamId,
};
use tempfile::TempDir;

const TEAMS: [(u32, &str, Conference); 4] = [
    (1, "AAA", Conference::Acc),
    (2, "BBB", Conference::BigEast),
    (3, "CCC", Conference::BigTen),
    (4, "DDD", Conference::Sec),
];

fn team_record(id: u32, abbr: &str, conference: Conference) -> TeamRecord {
    TeamRecord {
        team_id: TeamId::new(id),
        name: format!("{} State", abbr),
        abbreviation: abbr.to_string(),
        conference,
        avg_points_for: None,
        avg_points_against: None,
        wins: 0,
        losses: 0,
    }
}

fn date_for(game: u32) -> String {
    format!("2026-01-{:02}", game + 1)
}

/// Four covered teams that each play everyone else; three rotation players
/// per team with twelve games each, plus two non-qualifying players.
fn season_fixture() -> RawSeasonData {
    let mut data = RawSeasonData {
        teams: TEAMS
            .iter()
            .map(|(id, abbr, conf)| team_record(*id, abbr, *conf))
            .collect(),
        ..RawSeasonData::default()
    };

    for &(a, _, _) in &TEAMS {
        for &(b, _, _) in &TEAMS {
            if a == b {
                continue;
            }
            let (lo, hi) = (a.min(b), a.max(b));
            data.schedules.push(ScheduleRow {
                team_id: TeamId::new(a),
                game_id: GameId::new(format!("{}-{}", lo, hi)),
                date: "2026-01-01".to_string(),
                opponent_id: TeamId::new(b),
                team_score: 60.0 + 4.0 * a as f64,
                opp_score: 60.0 + 4.0 * b as f64,
            });
        }
    }

    for &(team, abbr, _) in &TEAMS {
        let opponents: Vec<u32> = TEAMS.iter().map(|t| t.0).filter(|t| *t != team).collect();
        for k in 0..5u64 {
            let player = team as u64 * 100 + k;
            data.rosters.push(RosterEntry {
                player_id: PlayerId::new(player),
                name: format!("{} Player {}", abbr, k),
                team_id: TeamId::new(team),
                position: Some("G".to_string()),
                jersey: Some(k.to_string()),
                class_year: Some("Senior".to_string()),
            });

            // k 0..=2 rotation, k 3 low minutes, k 4 too few games.
            let (games, minutes) = match k {
                0..=2 => (12, 20 + 5 * k as u32),
                3 => (12, 8),
                _ => (5, 30),
            };
            for g in 0..games {
                let opp = opponents[g as usize % opponents.len()];
                data.game_logs.push(GameLogRow {
                    player_id: PlayerId::new(player),
                    game_id: GameId::new(format!("{}-{}-{}", team, g, opp)),
                    date: date_for(g),
                    team_id: TeamId::new(team),
                    opponent_id: TeamId::new(opp),
                    matchup: format!("{} vs OPP", abbr),
                    result: "W".to_string(),
                    minutes: Some(minutes),
                    points: Some(4 + 3 * k as u32 + team + (g % 3)),
                });
            }
        }
    }

    // A zero-minute appearance still counts as a game played.
    data.game_logs.push(GameLogRow {
        player_id: PlayerId::new(100),
        game_id: GameId::new("dnp"),
        date: "2026-01-20".to_string(),
        team_id: TeamId::new(1),
        opponent_id: TeamId::new(2),
        matchup: "AAA vs BBB".to_string(),
        result: "L".to_string(),
        minutes: Some(0),
        points: Some(0),
    });
    // Unparseable minutes are excluded from every aggregate.
    data.game_logs.push(GameLogRow {
        player_id: PlayerId::new(101),
        game_id: GameId::new("bad"),
        date: "2026-01-21".to_string(),
        team_id: TeamId::new(1),
        opponent_id: TeamId::new(3),
        matchup: "AAA vs CCC".to_string(),
        result: "W".to_string(),
        minutes: None,
        points: Some(30),
    });

    data
}

fn config() -> PipelineConfig {
    PipelineConfig::new(Season::new(2026), QualifyingCriteria::default())
}

fn stored(data: &RawSeasonData) -> RawSeasonData {
    let mut db = RawDatabase::new_in_memory().unwrap();
    db.replace_season_data(data).unwrap();
    db.load_season_data().unwrap()
}

#[test]
fn test_mean_points_plus_is_100() {
    let result = run_pipeline(&stored(&season_fixture()), &config()).unwrap();

    assert_eq!(result.players.len(), 12);
    let mean = result.players.iter().map(|p| p.points_plus).sum::<f64>() / 12.0;
    assert!((mean - 100.0).abs() <= 0.05, "mean {}", mean);
    assert!((result.league_avg_points_plus() - 100.0).abs() <= 0.1);
}

#[test]
fn test_qualification_excludes_low_minutes_and_few_games() {
    let result = run_pipeline(&season_fixture(), &config()).unwrap();

    assert_eq!(result.players_considered, 20);
    for p in &result.players {
        let k = p.player_id.as_u64() % 100;
        assert!(k <= 2, "player {} should not qualify", p.player_id);
        assert!(p.games_played >= 10);
        assert!(p.mpg >= 12.0);
    }
}

#[test]
fn test_zero_minute_games_count_and_missing_rows_do_not() {
    let result = run_pipeline(&season_fixture(), &config()).unwrap();
    let find = |id: u64| {
        result
            .players
            .iter()
            .find(|p| p.player_id == PlayerId::new(id))
            .unwrap()
    };

    assert_eq!(find(100).games_played, 13);
    assert_eq!(find(101).games_played, 12);
    assert_eq!(result.excluded_game_rows, 1);
    assert!(find(101).games.iter().all(|g| g.record.game_id != GameId::new("bad")));
}

#[test]
fn test_ranks_are_dense_and_ordered() {
    let result = run_pipeline(&season_fixture(), &config()).unwrap();

    for (i, p) in result.players.iter().enumerate() {
        assert_eq!(p.rank as usize, i + 1);
    }
    for pair in result.players.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.points_plus > b.points_plus
                || (a.points_plus == b.points_plus && a.adjusted_ppg >= b.adjusted_ppg),
            "{} before {}",
            a.player_id,
            b.player_id
        );
    }
}

#[test]
fn test_runs_are_deterministic() {
    let data = season_fixture();
    let first = run_pipeline(&data, &config()).unwrap();
    let second = run_pipeline(&data, &config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_volatility_percentiles_in_range() {
    let result = run_pipeline(&season_fixture(), &config()).unwrap();

    for p in &result.players {
        let pctile = p.volatility_percentile.unwrap();
        assert!((0.0..=100.0).contains(&pctile));
        assert!(p.points_plus_stddev.unwrap() >= 0.0);
    }

    // The most volatile player sits at the top of the percentile range.
    let most_volatile = result
        .players
        .iter()
        .max_by(|a, b| {
            a.points_plus_stddev
                .unwrap()
                .total_cmp(&b.points_plus_stddev.unwrap())
        })
        .unwrap();
    let max_pctile = result
        .players
        .iter()
        .map(|p| p.volatility_percentile.unwrap())
        .fold(f64::MIN, f64::max);
    assert_eq!(most_volatile.volatility_percentile.unwrap(), max_pctile);
}

#[test]
fn test_uncovered_opponent_uses_league_average() {
    let mut data = season_fixture();
    for row in data.game_logs.iter_mut().filter(|r| r.player_id == PlayerId::new(200)) {
        row.opponent_id = TeamId::new(9999);
    }
    let result = run_pipeline(&data, &config()).unwrap();
    let p = result
        .players
        .iter()
        .find(|p| p.player_id == PlayerId::new(200))
        .unwrap();

    assert!((p.adjusted_ppg - p.ppg).abs() < 1e-9);
    assert!(p.games.iter().all(|g| g.adjusted_points == g.record.points_scored as f64));
}

#[test]
fn test_conference_restriction_changes_baseline() {
    let data = season_fixture();
    let all = run_pipeline(&data, &config()).unwrap();

    let mut only_sec = config();
    only_sec.conferences = vec![Conference::Sec];
    let sec = run_pipeline(&data, &only_sec).unwrap();

    assert_eq!(all.baseline.avg_points_allowed, 70.0);
    assert_eq!(sec.baseline.avg_points_allowed, 68.0);
    assert_eq!(sec.players.len(), 3);
    assert!(sec.players.iter().all(|p| p.team_id == TeamId::new(4)));
}

#[test]
fn test_no_team_stats_is_insufficient_data() {
    let mut data = season_fixture();
    data.schedules.clear();

    let err = run_pipeline(&data, &config()).unwrap_err();
    assert!(matches!(err, PointsPlusError::InsufficientData { .. }));
}

#[test]
fn test_no_qualifying_players_is_insufficient_data() {
    let mut strict = config();
    strict.criteria = QualifyingCriteria::new(40, 12.0);

    let err = run_pipeline(&season_fixture(), &strict).unwrap_err();
    assert!(matches!(err, PointsPlusError::InsufficientData { .. }));
}

#[test]
fn test_publish_and_read_back_snapshot() {
    let data = stored(&season_fixture());
    let config = config();
    let result = run_pipeline(&data, &config).unwrap();
    let generated_at = Utc.with_ymd_and_hms(2026, 1, 25, 6, 30, 0).unwrap();
    let snapshot = build_snapshot(&result, &data, &config, generated_at);

    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("public").join("data");
    publish_snapshot(&snapshot, &out).unwrap();

    let board = read_leaderboard(&out).unwrap();
    assert_eq!(board.len(), 12);
    assert_eq!(board[0].rank, 1);

    let meta = read_metadata(&out).unwrap();
    assert_eq!(meta.season, "2025-26");
    assert_eq!(meta.as_of_date, "2026-01-20");
    assert_eq!(meta.total_qualifying_players, 12);
    assert_eq!(meta.conference_breakdown.values().sum::<usize>(), 12);
    assert_eq!(meta.conference_breakdown.get("Big East"), Some(&3));

    let top = read_player(&out, board[0].id).unwrap();
    assert_eq!(top.player, board[0]);
    let dates: Vec<&str> = top.game_log.iter().map(|g| g.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    assert!(matches!(
        read_player(&out, PlayerId::new(104)),
        Err(PointsPlusError::PlayerNotFound { .. })
    ));
}
