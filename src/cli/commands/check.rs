//! Check command implementation.

use crate::models::config::Config;
use crate::preflight;
use crate::Result;
use colored::Colorize;

/// Run the preflight checks and report them.
pub async fn check(config: &Config) -> Result<()> {
    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await;
    preflight::print_results(&results);

    if !preflight::all_passed(&results) {
        return Err(crate::Error::other("Preflight checks failed"));
    }
    Ok(())
}
