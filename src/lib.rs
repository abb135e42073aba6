//! Card Grid Library
//!
//! A terminal card grid where activating a card opens an inline detail panel
//! directly below the card's row.

pub mod headless;

use std::path::Path;

use cardgrid_app::config::{self, Settings};
use cardgrid_core::prelude::*;

pub use headless::runner::run_headless;

/// Install error reporting and file logging.
///
/// Call once, before anything that logs (settings loading included).
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to a file, since the TUI owns stdout
    cardgrid_core::logging::init()
}

/// Resolve and validate the settings for this run.
///
/// An explicit file must exist and parse. Otherwise the local then the user
/// config file is used when present, falling back to defaults on read or
/// parse failure. `cards` overrides `grid.card_count`.
pub fn resolve_settings(
    explicit: Option<&Path>,
    cards: Option<usize>,
    base: &Path,
) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => config::try_load_settings(path)?,
        None => match config::resolve_config_path(None, base) {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        },
    };

    if let Some(cards) = cards {
        settings.grid.card_count = cards;
    }
    settings.validate()?;
    Ok(settings)
}

/// Run the TUI with the given settings
pub async fn run_tui(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Card Grid starting");
    info!("═══════════════════════════════════════════════════════");

    let result = cardgrid_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Card Grid exiting");
    result
}
