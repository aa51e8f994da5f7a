//! Upcoming movies listing output.

use crate::models::config::ImageConfig;
use crate::models::{MovieSummary, QueryParameters, SortOption};
use crate::utils::format::{card_poster_url, or_placeholder, truncate};
use crate::Result;
use colored::Colorize;
use serde::Serialize;

/// Listing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListingFormat {
    #[default]
    Table,
    Simple,
    Json,
}

/// One card of the listing.
#[derive(Debug, Serialize)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    pub poster_url: String,
    /// Route of the detail view for this movie.
    pub detail_route: String,
}

impl MovieCard {
    pub fn from_summary(movie: &MovieSummary, images: &ImageConfig) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            poster_url: card_poster_url(images, movie.poster_path.as_deref()),
            detail_route: format!("/detail/{}", movie.id),
        }
    }
}

/// Build cards for the displayed collection.
pub fn build_cards(displayed: &[MovieSummary], images: &ImageConfig) -> Vec<MovieCard> {
    displayed
        .iter()
        .map(|m| MovieCard::from_summary(m, images))
        .collect()
}

/// Render the listing as JSON.
pub fn render_json(displayed: &[MovieSummary], images: &ImageConfig) -> Result<String> {
    #[derive(Serialize)]
    struct JsonOutput {
        results: usize,
        movies: Vec<MovieCard>,
    }

    let output = JsonOutput {
        results: displayed.len(),
        movies: build_cards(displayed, images),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Render the listing as one line per movie.
pub fn render_simple(displayed: &[MovieSummary]) -> String {
    if displayed.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::new();
    for movie in displayed {
        out.push_str(&format!(
            "[{}] {} ({})\n",
            movie.id,
            movie.title,
            or_placeholder(Some(movie.release_date.as_str()))
        ));
    }
    out
}

/// Render the listing as a table with a header describing the query.
pub fn render_table(displayed: &[MovieSummary], params: &QueryParameters) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Upcoming Movies".bold().cyan()));
    let mut header = format!("Results: {}", displayed.len());
    if !params.search_term.is_empty() {
        header.push_str(&format!(" | Search: \"{}\"", params.search_term));
    }
    if params.sort_option != SortOption::None {
        header.push_str(&format!(" | Sort: {}", params.sort_option.label()));
    }
    out.push_str(&format!("{}\n\n", header.dimmed()));

    if displayed.is_empty() {
        out.push_str(&format!("{}\n", "No results found.".yellow()));
        return out;
    }

    out.push_str(&format!(
        " {:>4} | {:>8} | {:<10} | {}\n",
        "#", "ID", "Released", "Title"
    ));
    out.push_str(&format!("{}\n", "-".repeat(80)));

    for (i, movie) in displayed.iter().enumerate() {
        out.push_str(&format!(
            " {:>4} | {:>8} | {:<10} | {}\n",
            i + 1,
            movie.id,
            or_placeholder(Some(movie.release_date.as_str())),
            truncate(&movie.title, 50)
        ));
    }
    out
}

/// Render in the requested format.
pub fn render(
    format: ListingFormat,
    displayed: &[MovieSummary],
    params: &QueryParameters,
    images: &ImageConfig,
) -> Result<String> {
    match format {
        ListingFormat::Json => render_json(displayed, images),
        ListingFormat::Simple => Ok(render_simple(displayed)),
        ListingFormat::Table => Ok(render_table(displayed, params)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<MovieSummary> {
        let mut alpha = MovieSummary::new(2, "Alpha", "2024-01-01");
        alpha.poster_path = Some("/alpha.jpg".to_string());
        vec![alpha, MovieSummary::new(1, "Beta", "")]
    }

    #[test]
    fn test_cards_link_to_detail_route() {
        let cards = build_cards(&movies(), &ImageConfig::default());
        assert_eq!(cards[0].detail_route, "/detail/2");
        assert_eq!(cards[0].poster_url, "https://image.tmdb.org/t/p/w500/alpha.jpg");
        assert_eq!(cards[1].poster_url, "/no-image.png");
    }

    #[test]
    fn test_render_simple() {
        let out = render_simple(&movies());
        assert_eq!(out, "[2] Alpha (2024-01-01)\n[1] Beta (-)\n");
        assert_eq!(render_simple(&[]), "No results found.\n");
    }

    #[test]
    fn test_render_json_counts_results() {
        let json = render_json(&movies(), &ImageConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"], 2);
        assert_eq!(value["movies"][1]["title"], "Beta");
    }

    #[test]
    fn test_render_table_mentions_query() {
        let params = QueryParameters::new("alp", SortOption::TitleAsc);
        let out = render_table(&movies(), &params);
        assert!(out.contains("Results: 2"));
        assert!(out.contains("Search: \"alp\""));
        assert!(out.contains("Title (A-Z)"));
        assert!(out.contains("Alpha"));
    }
}
