//! Cross-edition commands.

use crate::cli::{CodeArgs, EquivalentArgs};
use crate::error::Result;
use crate::output::Formatter;
use wz_domain::Edition;
use wz_sdk::Wz;

/// Execute the correspondences command.
///
/// Unknown codes are reported as errors here, unlike the registry call which
/// returns an empty list for them.
pub fn execute_correspondences(args: &CodeArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    let code = wz.get(&args.code)?;
    formatter.format_correspondences(code.code(), code.correspondences())
}

/// Execute the equivalent command.
pub fn execute_equivalent(args: &EquivalentArgs, wz: &Wz, formatter: &Formatter) -> Result<String> {
    wz.get(&args.code)?;
    let equivalents = wz.find_equivalent(&args.code, Edition::from(args.to))?;
    formatter.format_codes(&equivalents)
}
