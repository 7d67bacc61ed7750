//! Listing and search commands.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wz_sdk::{Wz, WzCode};

/// Execute the top command.
pub fn execute_top(wz: &Wz, formatter: &Formatter) -> Result<String> {
    formatter.format_codes(&wz.get_top_level_codes())
}

/// Execute the list command.
pub fn execute_list(wz: &Wz, formatter: &Formatter) -> Result<String> {
    let codes: Vec<WzCode<'_>> = wz.iter().collect();
    formatter.format_codes(&codes)
}

/// Execute the search command.
pub fn execute_search(args: &SearchArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    if args.query.trim().is_empty() {
        return Err(CliError::InvalidInput("Search query must not be empty".to_string()));
    }

    let mut results = wz.search_in_titles(&args.query, args.case_sensitive);
    if let Some(limit) = args.limit {
        if results.len() > limit {
            eprintln!(
                "{}",
                formatter.info(&format!("Showing {} of {} matches", limit, results.len()))
            );
            results.truncate(limit);
        }
    }

    formatter.format_codes(&results)
}
