//! Run configuration: qualifying thresholds, season, and on-disk locations.

use crate::{
    cli::types::{Conference, Season},
    error::{PointsPlusError, Result},
    DATA_DIR_ENV_VAR,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MIN_GAMES: u32 = 10;
pub const DEFAULT_MIN_MPG: f64 = 12.0;

/// Minimum games played and minutes per game for a player to qualify.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingCriteria {
    pub min_games: u32,
    pub min_mpg: f64,
}

impl QualifyingCriteria {
    pub fn new(min_games: u32, min_mpg: f64) -> Self {
        Self { min_games, min_mpg }
    }

    pub fn admits(&self, games_played: u32, mpg: f64) -> bool {
        games_played >= self.min_games && mpg >= self.min_mpg
    }
}

impl Default for QualifyingCriteria {
    fn default() -> Self {
        Self {
            min_games: DEFAULT_MIN_GAMES,
            min_mpg: DEFAULT_MIN_MPG,
        }
    }
}

/// Everything a computation run needs besides the raw data itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub season: Season,
    pub criteria: QualifyingCriteria,
    pub conferences: Vec<Conference>,
    /// Pins the published as-of date; otherwise the latest game date is used.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            season: Season::default(),
            criteria: QualifyingCriteria::default(),
            conferences: Conference::ALL.to_vec(),
            as_of: None,
        }
    }
}

impl PipelineConfig {
    pub fn new(season: Season, criteria: QualifyingCriteria) -> Self {
        Self {
            season,
            criteria,
            ..Self::default()
        }
    }
}

/// Resolve the data directory from an explicit flag, then `POINTS_PLUS_DATA_DIR`,
/// then the platform cache directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::cache_dir().map(|dir| dir.join("ncaa-points-plus")))
        .ok_or_else(|| PointsPlusError::MissingDataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        })
}

/// SQLite file holding one season's raw upstream data.
pub fn raw_database_path(data_dir: &Path, season: Season) -> PathBuf {
    data_dir.join(format!("raw_{}.db", season.as_u16()))
}

/// Directory that holds the published snapshot unless overridden.
pub fn default_output_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("output")
}
