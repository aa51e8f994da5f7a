//! Command line argument definitions.

use crate::generators::listing::ListingFormat;
use crate::models::SortOption;
use clap::{Parser, Subcommand, ValueEnum};

/// Release Radar - Browse upcoming movies from TMDB
#[derive(Parser, Debug)]
#[command(name = "release-radar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List upcoming movies
    Upcoming {
        /// Number of pages to fetch (default: from config)
        #[arg(short, long, value_name = "PAGES", value_parser = clap::value_parser!(u32).range(1..))]
        pages: Option<u32>,

        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOption::None)]
        sort: SortOption,

        /// Output format
        #[arg(long, value_enum, default_value_t = ListingFormat::Table)]
        format: ListingFormat,
    },

    /// Show the full record of one movie
    Detail {
        /// TMDB movie ID
        #[arg(value_name = "MOVIE_ID")]
        movie_id: u64,

        /// Output format
        #[arg(long, value_enum, default_value_t = DetailFormat::Text)]
        format: DetailFormat,
    },

    /// Interactively search, sort and open upcoming movies
    Browse {
        /// Number of pages to fetch (default: from config)
        #[arg(short, long, value_name = "PAGES", value_parser = clap::value_parser!(u32).range(1..))]
        pages: Option<u32>,
    },

    /// Check TMDB credential and connectivity
    Check,
}

/// Detail output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DetailFormat {
    #[default]
    Text,
    Json,
}
