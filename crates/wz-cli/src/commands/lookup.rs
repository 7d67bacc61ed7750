//! Single-code lookup and hierarchy commands.

use crate::cli::CodeArgs;
use crate::error::Result;
use crate::output::Formatter;
use wz_sdk::{Wz, WzCode};

/// Execute the get command.
pub fn execute_get(args: &CodeArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    let code = wz.get(&args.code)?;
    formatter.format_code(&code)
}

/// Execute the children command.
pub fn execute_children(args: &CodeArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    let children = wz.get(&args.code)?.children();
    formatter.format_codes(&children)
}

/// Execute the ancestors command.
pub fn execute_ancestors(args: &CodeArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    let ancestors = wz.get(&args.code)?.ancestors();
    formatter.format_codes(&ancestors)
}

/// Execute the descendants command.
///
/// Descendants form a set; they are listed in code order.
pub fn execute_descendants(args: &CodeArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    let mut descendants: Vec<WzCode<'_>> = wz.get(&args.code)?.descendants().into_iter().collect();
    descendants.sort_by(|a, b| a.code().cmp(b.code()));
    formatter.format_codes(&descendants)
}
