//! wz - Command-line interface for the WZ classification registry.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wz_cli::commands;
use wz_cli::{Cli, Command, Config, Formatter};
use wz_domain::Edition;
use wz_sdk::Wz;
use wz_store::JsonSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> wz_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.config.as_deref())?;

    let edition = match cli.edition {
        Some(edition) => Edition::from(edition),
        None => config.edition()?,
    };

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolve_data_dir()?,
    };
    debug!(edition = %edition, data_dir = %data_dir.display(), "Opening WZ registry");

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let wz = Wz::new(edition, &JsonSource::new(data_dir))?;

    let output = match &cli.command {
        Command::Get(args) => commands::execute_get(args, &wz, &formatter)?,
        Command::Children(args) => commands::execute_children(args, &wz, &formatter)?,
        Command::Ancestors(args) => commands::execute_ancestors(args, &wz, &formatter)?,
        Command::Descendants(args) => commands::execute_descendants(args, &wz, &formatter)?,
        Command::Top => commands::execute_top(&wz, &formatter)?,
        Command::List => commands::execute_list(&wz, &formatter)?,
        Command::Search(args) => commands::execute_search(args, &wz, &formatter)?,
        Command::Correspondences(args) => {
            commands::execute_correspondences(args, &wz, &formatter)?
        }
        Command::Equivalent(args) => commands::execute_equivalent(args, &wz, &formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
