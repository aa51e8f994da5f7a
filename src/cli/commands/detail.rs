//! Detail command implementation.

use super::spinner;
use crate::cli::args::DetailFormat;
use crate::core::detail::fetch_detail;
use crate::generators::detail::render_text;
use crate::models::config::Config;
use crate::services::tmdb::TmdbClient;
use crate::Result;

/// Execute the detail command.
pub async fn detail(config: &Config, movie_id: u64, format: DetailFormat) -> Result<()> {
    let client = TmdbClient::new(config.tmdb.clone());

    let pb = spinner("Loading...");
    let result = fetch_detail(&client, movie_id).await;
    pb.finish_and_clear();
    let movie = result?;

    match format {
        DetailFormat::Json => println!("{}", serde_json::to_string_pretty(&movie)?),
        DetailFormat::Text => print!("{}", render_text(&movie, &config.images)),
    }

    Ok(())
}
