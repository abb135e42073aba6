//! Card Grid - a terminal card grid with an inline detail panel
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use cardgrid_app::config;
use cardgrid_core::prelude::*;
use clap::Parser;

/// Card Grid - a terminal card grid with an inline detail panel
#[derive(Parser, Debug)]
#[command(name = "cardgrid")]
#[command(about = "A card grid whose cards open an inline detail panel", long_about = None)]
struct Args {
    /// Settings file (default: ./.cardgrid/config.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of cards to create (overrides grid.card_count)
    #[arg(long, value_name = "N")]
    cards: Option<usize>,

    /// Run in headless mode (commands on stdin, NDJSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a default .cardgrid/config.toml in the current directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        let path = config::init_config_dir(&base_path)?;
        eprintln!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    // Logging first, so settings fallbacks are recorded
    card_grid::init()?;

    let settings = match card_grid::resolve_settings(args.config.as_deref(), args.cards, &base_path) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if args.headless {
        card_grid::run_headless(settings).await
    } else {
        card_grid::run_tui(settings).await
    }
}
