//! Command implementations for the Points+ CLI

pub mod fetch;
pub mod generate;
pub mod player;
pub mod run;
pub mod show;


use crate::{
    cli::{types::Conference, CommonArgs, ComputeArgs},
    config::{default_output_dir, resolve_data_dir, PipelineConfig, QualifyingCriteria},
    error::Result,
};
use std::path::PathBuf;

/// Resolved on-disk locations for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: PathBuf, output_dir: Option<PathBuf>) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| default_output_dir(&data_dir));
        Self {
            data_dir,
            output_dir,
        }
    }

    /// Resolve from CLI flags, falling back to `POINTS_PLUS_DATA_DIR` and the
    /// platform cache directory.
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let data_dir = resolve_data_dir(common.data_dir.clone())?;
        Ok(Self::new(data_dir, common.output_dir.clone()))
    }
}

/// Conferences to cover; all five when none are named.
pub fn selected_conferences(conferences: Option<&[Conference]>) -> Vec<Conference> {
    match conferences {
        Some(list) if !list.is_empty() => {
            let mut list = list.to_vec();
            list.sort();
            list.dedup();
            list
        }
        _ => Conference::ALL.to_vec(),
    }
}

pub fn pipeline_config(common: &CommonArgs, compute: &ComputeArgs) -> PipelineConfig {
    PipelineConfig {
        season: common.season,
        criteria: QualifyingCriteria::new(compute.min_games, compute.min_mpg),
        conferences: selected_conferences(compute.conferences.as_deref()),
        as_of: compute.as_of,
    }
}
