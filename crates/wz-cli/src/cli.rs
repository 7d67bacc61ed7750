//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wz_domain::Edition;

/// wz - Look up and navigate the WZ classification of economic activities.
#[derive(Debug, Parser)]
#[command(name = "wz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Edition to query (defaults to the configured edition)
    #[arg(short, long, value_enum, global = true)]
    pub edition: Option<EditionArg>,

    /// Directory holding the classification JSON files
    #[arg(short, long, global = true, env = "WZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes only)
    Quiet,
}

/// Edition argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EditionArg {
    /// WZ 2008
    #[value(name = "2008")]
    Wz2008,
    /// WZ 2025
    #[value(name = "2025")]
    Wz2025,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a single code
    Get(CodeArgs),

    /// List the direct children of a code
    Children(CodeArgs),

    /// List the ancestors of a code, nearest first
    Ancestors(CodeArgs),

    /// List every code below a code
    Descendants(CodeArgs),

    /// List the top-level sections
    Top,

    /// List every code of the edition
    List,

    /// Search code titles
    Search(SearchArgs),

    /// Show the counterparts of a code in the other edition
    Correspondences(CodeArgs),

    /// Resolve the equivalent codes in a target edition
    Equivalent(EquivalentArgs),
}

/// Arguments for commands taking a single code.
#[derive(Debug, Parser)]
pub struct CodeArgs {
    /// WZ code (e.g. 01.11)
    pub code: String,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Text to look for in titles
    pub query: String,

    /// Match case exactly
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the equivalent command.
#[derive(Debug, Parser)]
pub struct EquivalentArgs {
    /// WZ code in the queried edition
    pub code: String,

    /// Target edition
    #[arg(short, long, value_enum)]
    pub to: EditionArg,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<EditionArg> for Edition {
    fn from(edition: EditionArg) -> Self {
        match edition {
            EditionArg::Wz2008 => Edition::Wz2008,
            EditionArg::Wz2025 => Edition::Wz2025,
        }
    }
}
