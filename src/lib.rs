//! NCAA Points+ Library
//!
//! Computes an opponent-adjusted scoring index for men's college basketball
//! players in the five major conferences, and publishes it as a static JSON
//! snapshot for a presentation layer.
//!
//! ## Features
//!
//! - **Upstream Fetch**: Teams, rosters, player game logs and team schedules
//! - **Raw Storage**: One SQLite store per season, replaced on each fetch
//! - **Opponent Adjustment**: Points scaled by opponent defense and pace
//! - **Points+**: Adjusted scoring indexed so the qualifying mean is 100
//! - **Volatility**: Game-to-game Points+ spread and its percentile
//! - **Atomic Publish**: Leaderboard, player details, distribution, metadata
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ncaa_points_plus::{compute::run_pipeline, storage::RawDatabase, PipelineConfig, Season};
//!
//! # fn example() -> ncaa_points_plus::Result<()> {
//! let db = RawDatabase::open(std::path::Path::new("/tmp/points-plus"), Season::new(2026))?;
//! let data = db.load_season_data()?;
//! let result = run_pipeline(&data, &PipelineConfig::default())?;
//!
//! for player in result.players.iter().take(5) {
//!     println!("{} {:.1}", player.player_id, player.points_plus);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the data directory to avoid passing it in every command:
//! ```bash
//! export POINTS_PLUS_DATA_DIR=/var/lib/points-plus
//! ```

pub mod cli;
pub mod commands;
pub mod compute;
pub mod config;
pub mod error;
pub mod espn;
pub mod output;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Conference, GameId, PlayerId, Season, TeamId};
pub use config::{PipelineConfig, QualifyingCriteria};
pub use error::{PointsPlusError, Result};

pub const DATA_DIR_ENV_VAR: &str = "POINTS_PLUS_DATA_DIR";
