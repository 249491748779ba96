//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ncaa_points_plus::{
    cli::{Commands, PointsPlus},
    commands::{
        fetch::handle_fetch, generate::handle_generate, pipeline_config, player::handle_player,
        run::handle_run, selected_conferences, show::handle_show, DataPaths,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = PointsPlus::parse();

    match app.command {
        Commands::Fetch {
            common,
            conferences,
        } => {
            let paths = DataPaths::resolve(&common)?;
            let conferences = selected_conferences(conferences.as_deref());
            handle_fetch(&paths, common.season, &conferences).await?
        }

        Commands::Generate { common, compute } => {
            let paths = DataPaths::resolve(&common)?;
            handle_generate(&paths, &pipeline_config(&common, &compute))?
        }

        Commands::Run { common, compute } => {
            let paths = DataPaths::resolve(&common)?;
            handle_run(&paths, &pipeline_config(&common, &compute)).await?
        }

        Commands::Show {
            common,
            limit,
            conference,
            json,
        } => {
            let paths = DataPaths::resolve(&common)?;
            handle_show(&paths.output_dir, limit, conference, json)?
        }

        Commands::Player { id, common, json } => {
            let paths = DataPaths::resolve(&common)?;
            handle_player(&paths.output_dir, id, json)?
        }
    }

    Ok(())
}
