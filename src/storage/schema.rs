//! Database schema and connection management

use crate::{config::raw_database_path, error::Result, Season};
use rusqlite::Connection;
use std::path::Path;

/// Connection to one season's raw data store.
pub struct RawDatabase {
    pub(crate) conn: Connection,
}

impl RawDatabase {
    /// Open (or create) the raw store for `season` under `data_dir`.
    pub fn open(data_dir: &Path, season: Season) -> Result<Self> {
        let db_path = raw_database_path(data_dir, season);

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory store, used by tests and dry runs.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                abbreviation TEXT NOT NULL,
                conference TEXT NOT NULL,
                avg_points_for REAL,
                avg_points_against REAL,
                wins INTEGER NOT NULL DEFAULT 0,
                losses INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS rosters (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                position TEXT,
                jersey TEXT,
                class_year TEXT
            );

            CREATE TABLE IF NOT EXISTS game_logs (
                player_id INTEGER NOT NULL,
                game_id TEXT NOT NULL,
                date TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                opponent_id INTEGER NOT NULL,
                matchup TEXT NOT NULL,
                result TEXT NOT NULL DEFAULT '',
                minutes INTEGER,
                points INTEGER,
                PRIMARY KEY (player_id, game_id)
            );

            CREATE TABLE IF NOT EXISTS team_schedules (
                team_id INTEGER NOT NULL,
                game_id TEXT NOT NULL,
                date TEXT NOT NULL,
                opponent_id INTEGER NOT NULL,
                team_score REAL NOT NULL,
                opp_score REAL NOT NULL,
                PRIMARY KEY (team_id, game_id)
            );

            CREATE INDEX IF NOT EXISTS idx_game_logs_player
                ON game_logs(player_id, date);",
        )?;
        Ok(())
    }
}
