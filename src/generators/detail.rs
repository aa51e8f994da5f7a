//! Movie detail view output.

use crate::models::config::ImageConfig;
use crate::models::MovieDetail;
use crate::utils::format::{
    backdrop_url, collection_poster_url, format_currency, format_languages, format_list,
    format_runtime, number_or_placeholder, or_placeholder, poster_url, yes_no, PLACEHOLDER,
};
use colored::Colorize;

/// Render a movie detail as multi-panel text.
pub fn render_text(movie: &MovieDetail, images: &ImageConfig) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("{}\n", "Movie Detail".dimmed()));
    out.push_str(&format!(
        "{}\n",
        or_placeholder(movie.title.as_deref()).bold().cyan()
    ));
    out.push_str(&format!(
        "{}\n",
        movie
            .tagline
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("No tagline available.")
            .italic()
    ));
    out.push_str(&format!(
        "[{}] [{}] [{}]\n",
        or_placeholder(movie.status.as_deref()),
        or_placeholder(movie.original_language.as_deref()),
        format_runtime(movie.runtime)
    ));
    out.push_str(&format!(
        "Backdrop: {}\n",
        backdrop_url(images, movie.backdrop_path.as_deref())
    ));
    out.push_str(&format!(
        "Poster:   {}\n",
        poster_url(images, movie.poster_path.as_deref())
    ));
    if let Some(homepage) = movie.homepage.as_deref().filter(|h| !h.is_empty()) {
        out.push_str(&format!("Homepage: {}\n", homepage));
    }
    if let Some(imdb_id) = movie.imdb_id.as_deref().filter(|i| !i.is_empty()) {
        out.push_str(&format!("IMDb:     https://www.imdb.com/title/{}\n", imdb_id));
    }

    section(&mut out, "Overview");
    out.push_str(&format!(
        "{}\n",
        movie
            .overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or("No overview available.")
    ));

    section(&mut out, "Core Info");
    field(&mut out, "Title", &or_placeholder(movie.title.as_deref()));
    field(&mut out, "Original Title", &or_placeholder(movie.original_title.as_deref()));
    field(&mut out, "Release Date", &or_placeholder(movie.release_date.as_deref()));
    field(&mut out, "Adult", yes_no(movie.adult));
    field(&mut out, "Video", yes_no(movie.video));
    field(&mut out, "Status", &or_placeholder(movie.status.as_deref()));

    section(&mut out, "Numbers");
    field(&mut out, "Rating", &number_or_placeholder(movie.vote_average));
    field(&mut out, "Votes", &number_or_placeholder(movie.vote_count));
    field(&mut out, "Popularity", &number_or_placeholder(movie.popularity));
    field(&mut out, "Budget", &format_currency(movie.budget));
    field(&mut out, "Revenue", &format_currency(movie.revenue));
    field(&mut out, "Runtime", &format_runtime(movie.runtime));

    section(&mut out, "Classification");
    field(
        &mut out,
        "Genres",
        &format_list(movie.genres.iter().map(|g| g.name.as_deref())),
    );
    field(&mut out, "Spoken Languages", &format_languages(&movie.spoken_languages));
    field(
        &mut out,
        "Origin Countries",
        &format_list(movie.origin_country.iter().map(|c| Some(c.as_str()))),
    );

    section(&mut out, "Production");
    if movie.production_companies.is_empty() {
        out.push_str("No production company data.\n");
    } else {
        for company in &movie.production_companies {
            out.push_str(&format!(
                "  {} ({})\n",
                or_placeholder(company.name.as_deref()),
                or_placeholder(company.origin_country.as_deref())
            ));
            out.push_str(&format!(
                "    Logo Path: {}\n",
                or_placeholder(company.logo_path.as_deref())
            ));
        }
    }
    out.push_str("Production Countries:\n");
    if movie.production_countries.is_empty() {
        out.push_str(&format!("  {}\n", PLACEHOLDER));
    } else {
        for country in &movie.production_countries {
            out.push_str(&format!(
                "  {} ({})\n",
                or_placeholder(country.name.as_deref()),
                or_placeholder(country.iso_3166_1.as_deref())
            ));
        }
    }

    section(&mut out, "Collection");
    match &movie.belongs_to_collection {
        Some(collection) => {
            out.push_str(&format!("{}\n", or_placeholder(collection.name.as_deref())));
            field(&mut out, "Collection ID", &collection.id.to_string());
            field(
                &mut out,
                "Poster",
                &collection_poster_url(images, collection.poster_path.as_deref()),
            );
            field(&mut out, "Poster Path", &or_placeholder(collection.poster_path.as_deref()));
            field(
                &mut out,
                "Backdrop Path",
                &or_placeholder(collection.backdrop_path.as_deref()),
            );
        }
        None => out.push_str("No collection data.\n"),
    }

    section(&mut out, "Identifiers");
    field(&mut out, "Movie ID", &number_or_placeholder(movie.id));
    field(&mut out, "IMDb ID", &or_placeholder(movie.imdb_id.as_deref()));
    field(&mut out, "Homepage", &or_placeholder(movie.homepage.as_deref()));
    field(&mut out, "Poster Path", &or_placeholder(movie.poster_path.as_deref()));
    field(&mut out, "Backdrop Path", &or_placeholder(movie.backdrop_path.as_deref()));

    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("{}\n", title.bold()));
}

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<18} {}\n", format!("{}:", label), value));
}
