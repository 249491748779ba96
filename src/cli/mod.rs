//! CLI argument definitions and parsing.

pub mod types;

use crate::config::{DEFAULT_MIN_GAMES, DEFAULT_MIN_MPG};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Conference, PlayerId, Season};

/// Location arguments shared between commands
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Season end year (e.g. 2026 for 2025-26).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Directory for the raw store (or set `POINTS_PLUS_DATA_DIR` env var).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Where the published snapshot lives (defaults to `<data-dir>/output`).
    #[clap(long, short)]
    pub output_dir: Option<PathBuf>,
}

/// Qualification and run options for computing a snapshot
#[derive(Debug, Clone, Args)]
pub struct ComputeArgs {
    /// Minimum games played to qualify.
    #[clap(long, default_value_t = DEFAULT_MIN_GAMES)]
    pub min_games: u32,

    /// Minimum minutes per game to qualify.
    #[clap(long, default_value_t = DEFAULT_MIN_MPG)]
    pub min_mpg: f64,

    /// Pin the published as-of date (YYYY-MM-DD).
    #[clap(long)]
    pub as_of: Option<NaiveDate>,

    /// Restrict to conferences (repeatable): `-c ACC -c SEC`.
    #[clap(short = 'c', long = "conference")]
    pub conferences: Option<Vec<Conference>>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "points-plus",
    about = "Opponent-adjusted NCAA scoring leaderboard (Points+)"
)]
pub struct PointsPlus {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch teams, rosters, game logs and schedules into the raw store.
    Fetch {
        #[clap(flatten)]
        common: CommonArgs,

        /// Restrict to conferences (repeatable): `-c ACC -c SEC`.
        #[clap(short = 'c', long = "conference")]
        conferences: Option<Vec<Conference>>,
    },

    /// Compute Points+ from the raw store and publish the snapshot.
    Generate {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        compute: ComputeArgs,
    },

    /// Fetch, then generate.
    Run {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(flatten)]
        compute: ComputeArgs,
    },

    /// Print the published leaderboard.
    Show {
        #[clap(flatten)]
        common: CommonArgs,

        /// Number of rows to print.
        #[clap(long, short, default_value_t = 25)]
        limit: usize,

        /// Only players from this conference.
        #[clap(long)]
        conference: Option<Conference>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Print one player's published detail and game log.
    Player {
        /// Player id.
        id: PlayerId,

        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
