//! Release Radar CLI
//!
//! A command-line tool for browsing upcoming movies from TMDB.

use clap::Parser;
use release_radar::cli::{
    args::{Cli, Commands},
    commands::{browse, check, detail, upcoming},
};
use release_radar::models::config::{self, Config};
use release_radar::preflight;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config()?;

    // Run the appropriate command
    match cli.command {
        Commands::Upcoming { pages, search, sort, format } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            upcoming::upcoming(&config, pages, search.as_deref(), sort, format).await?;
        }

        Commands::Detail { movie_id, format } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            detail::detail(&config, movie_id, format).await?;
        }

        Commands::Browse { pages } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            browse::browse(&config, pages).await?;
        }

        Commands::Check => {
            check::check(&config).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("release_radar=debug")
    } else {
        EnvFilter::new("release_radar=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run preflight checks and fail fast if any fail.
///
/// Only failures are printed so listing output stays clean.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    let results = preflight::run_preflight_checks(config).await;

    if !preflight::all_passed(&results) {
        preflight::print_results(&results);
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
