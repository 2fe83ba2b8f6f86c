use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tourplan::LogLevel;
use tourplan::catalog::resolve_catalog;
use tourplan::core::config::{self, CliOverrides};
use tourplan::core::{pricing, replay, report};
use tourplan::tui;

#[derive(Parser)]
#[command(name = "tourplan", about = "Multi-step trip booking configurator")]
struct Args {
    /// Catalog TOML file (defaults to the built-in data)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Apply a JSON-lines action log and print the summary instead of starting the TUI
    #[arg(long)]
    replay: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet, so hold on to the error and report it once it is
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::TourplanConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        catalog_file: args.catalog,
        log_file: args.log_file,
        log_level: args.log_level.map(Into::into),
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Tourplan starting up with config: {:?}", resolved);
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    let catalog = resolve_catalog(resolved.catalog_file.as_deref());

    if let Some(path) = args.replay {
        let state = replay::replay_file(&path).map_err(std::io::Error::other)?;
        let pricing = pricing::compute_pricing(&state, catalog.as_ref());
        print!("{}", report::render_text(&state, &pricing, catalog.as_ref()));
        return Ok(());
    }

    tui::run(catalog)
}
