//! Season replacement and loaders for the raw store

use super::{models::*, schema::RawDatabase};
use crate::{
    cli::types::{Conference, GameId, PlayerId, TeamId},
    error::Result,
};
use rusqlite::{params, Row};

impl RawDatabase {
    /// Replace all raw data with `data` in a single transaction.
    ///
    /// Ingestion runs rebuild the season from scratch, so there is no merge.
    pub fn replace_season_data(&mut self, data: &RawSeasonData) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM game_logs", [])?;
        tx.execute("DELETE FROM team_schedules", [])?;
        tx.execute("DELETE FROM rosters", [])?;
        tx.execute("DELETE FROM teams", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO teams
                 (team_id, name, abbreviation, conference, avg_points_for, avg_points_against, wins, losses)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for team in &data.teams {
                stmt.execute(params![
                    team.team_id.as_u32(),
                    team.name,
                    team.abbreviation,
                    team.conference.name(),
                    team.avg_points_for,
                    team.avg_points_against,
                    team.wins,
                    team.losses
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO rosters
                 (player_id, name, team_id, position, jersey, class_year)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for entry in &data.rosters {
                stmt.execute(params![
                    entry.player_id.as_i64(),
                    entry.name,
                    entry.team_id.as_u32(),
                    entry.position,
                    entry.jersey,
                    entry.class_year
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO game_logs
                 (player_id, game_id, date, team_id, opponent_id, matchup, result, minutes, points)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for row in &data.game_logs {
                stmt.execute(params![
                    row.player_id.as_i64(),
                    row.game_id.as_str(),
                    row.date,
                    row.team_id.as_u32(),
                    row.opponent_id.as_u32(),
                    row.matchup,
                    row.result,
                    row.minutes,
                    row.points
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO team_schedules
                 (team_id, game_id, date, opponent_id, team_score, opp_score)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for row in &data.schedules {
                stmt.execute(params![
                    row.team_id.as_u32(),
                    row.game_id.as_str(),
                    row.date,
                    row.opponent_id.as_u32(),
                    row.team_score,
                    row.opp_score
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Load all covered teams, ordered by id.
    pub fn load_teams(&self) -> Result<Vec<TeamRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, name, abbreviation, conference, avg_points_for, avg_points_against, wins, losses
             FROM teams
             ORDER BY team_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                TeamId::new(row.get(0)?),
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<f64>>(4)?,
                row.get::<_, Option<f64>>(5)?,
                row.get::<_, u32>(6)?,
                row.get::<_, u32>(7)?,
            ))
        })?;

        let mut teams = Vec::new();
        for row in rows {
            let (team_id, name, abbreviation, conference, avg_for, avg_against, wins, losses) =
                row?;
            teams.push(TeamRecord {
                team_id,
                name,
                abbreviation,
                conference: conference.parse::<Conference>()?,
                avg_points_for: avg_for,
                avg_points_against: avg_against,
                wins,
                losses,
            });
        }
        Ok(teams)
    }

    /// Load roster metadata for every player.
    pub fn load_rosters(&self) -> Result<Vec<RosterEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, team_id, position, jersey, class_year
             FROM rosters
             ORDER BY player_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RosterEntry {
                player_id: PlayerId::new(row.get::<_, i64>(0)? as u64),
                name: row.get(1)?,
                team_id: TeamId::new(row.get(2)?),
                position: row.get(3)?,
                jersey: row.get(4)?,
                class_year: row.get(5)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Load every game log row, ordered by player then date.
    pub fn load_game_logs(&self) -> Result<Vec<GameLogRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, game_id, date, team_id, opponent_id, matchup, result, minutes, points
             FROM game_logs
             ORDER BY player_id, date, game_id",
        )?;

        let rows = stmt.query_map([], Self::row_to_game_log)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row?);
        }
        Ok(logs)
    }

    /// Load every completed team schedule game.
    pub fn load_schedules(&self) -> Result<Vec<ScheduleRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, game_id, date, opponent_id, team_score, opp_score
             FROM team_schedules
             ORDER BY team_id, date, game_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ScheduleRow {
                team_id: TeamId::new(row.get(0)?),
                game_id: GameId::new(row.get::<_, String>(1)?),
                date: row.get(2)?,
                opponent_id: TeamId::new(row.get(3)?),
                team_score: row.get(4)?,
                opp_score: row.get(5)?,
            })
        })?;

        let mut schedules = Vec::new();
        for row in rows {
            schedules.push(row?);
        }
        Ok(schedules)
    }

    /// Load the full raw season in one call.
    pub fn load_season_data(&self) -> Result<RawSeasonData> {
        Ok(RawSeasonData {
            teams: self.load_teams()?,
            rosters: self.load_rosters()?,
            game_logs: self.load_game_logs()?,
            schedules: self.load_schedules()?,
        })
    }

    /// Row counts per table: (teams, rosters, game_logs, team_schedules).
    pub fn table_counts(&self) -> Result<(u64, u64, u64, u64)> {
        let count = |table: &str| -> Result<u64> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
            Ok(n as u64)
        };
        Ok((
            count("teams")?,
            count("rosters")?,
            count("game_logs")?,
            count("team_schedules")?,
        ))
    }

    /// Helper to convert a database row to GameLogRow
    pub(crate) fn row_to_game_log(row: &Row) -> rusqlite::Result<GameLogRow> {
        Ok(GameLogRow {
            player_id: PlayerId::new(row.get::<_, i64>(0)? as u64),
            game_id: GameId::new(row.get::<_, String>(1)?),
            date: row.get(2)?,
            team_id: TeamId::new(row.get(3)?),
            opponent_id: TeamId::new(row.get(4)?),
            matchup: row.get(5)?,
            result: row.get(6)?,
            minutes: row.get(7)?,
            points: row.get(8)?,
        })
    }
}
