//! Browse command implementation.
//!
//! A small prompt over one [`BrowseSession`]: search and sort re-derive the
//! listing locally, `open` loads a detail, `refresh` re-runs the acquisition.

use super::spinner;
use crate::core::session::{BrowseCommand, BrowseSession};
use crate::generators::{detail, listing};
use crate::models::config::Config;
use crate::models::FetchStatus;
use crate::services::tmdb::TmdbClient;
use crate::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  search <text>   filter titles (case-insensitive)
  clear           clear the search
  sort <option>   none | title-asc | title-desc | date-asc | date-desc
  open <id>       show the full record of a movie
  refresh         fetch the listing again
  list            show the current listing
  help            show this help
  quit            leave";

/// Execute the browse command.
pub async fn browse(config: &Config, pages: Option<u32>) -> Result<()> {
    let client = TmdbClient::new(config.tmdb.clone());
    let page_count = pages.unwrap_or(config.upcoming.pages);

    let pb = spinner("Loading movies...");
    let mut session = BrowseSession::with_source(&client, page_count).await;
    pb.finish_and_clear();

    print_listing(&session);
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".bold().green());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            BrowseCommand::Search(term) => {
                session.set_search_term(&term);
                print_listing(&session);
            }
            BrowseCommand::ClearSearch => {
                session.set_search_term("");
                print_listing(&session);
            }
            BrowseCommand::Sort(option) => {
                session.set_sort_option(option);
                print_listing(&session);
            }
            BrowseCommand::Open(movie_id) => {
                let pb = spinner("Loading...");
                session.open(&client, movie_id).await;
                pb.finish_and_clear();
                print_detail(&session, config);
            }
            BrowseCommand::Refresh => {
                let pb = spinner("Loading movies...");
                // Failure keeps the previous listing; the status line reports it.
                let _ = session.refresh(&client, page_count).await;
                pb.finish_and_clear();
                print_listing(&session);
            }
            BrowseCommand::List => print_listing(&session),
            BrowseCommand::Help => println!("{}", HELP),
            BrowseCommand::Quit => break,
        }
    }

    Ok(())
}

fn print_listing(session: &BrowseSession) {
    if let Some(message) = session.listing_status().error() {
        println!("{}", message.red());
    }
    print!(
        "{}",
        listing::render_table(session.displayed(), session.params())
    );
}

fn print_detail(session: &BrowseSession, config: &Config) {
    let fetcher = session.detail();
    match fetcher.status() {
        FetchStatus::Failed(message) => println!("{}", message.red()),
        FetchStatus::Ready => {
            if let Some(movie) = fetcher.detail() {
                print!("{}", detail::render_text(movie, &config.images));
            }
        }
        FetchStatus::Idle | FetchStatus::Loading => println!("Loading..."),
    }
}
