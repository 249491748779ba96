//! `run`: fetch, then generate.

use super::{fetch::handle_fetch, generate::handle_generate, DataPaths};
use crate::{config::PipelineConfig, error::Result};

pub async fn handle_run(paths: &DataPaths, config: &PipelineConfig) -> Result<()> {
    handle_fetch(paths, config.season, &config.conferences).await?;
    handle_generate(paths, config)
}
