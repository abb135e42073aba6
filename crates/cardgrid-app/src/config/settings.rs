//! Settings loader for .cardgrid/config.toml

use super::types::Settings;
use cardgrid_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CARDGRID_DIR: &str = ".cardgrid";

const DEFAULT_CONFIG: &str = r#"# Card Grid Configuration

[grid]
card_count = 12         # Cards created at startup
card_width = 22         # Card width in cells (without margins)
card_height = 5         # Card height in rows (including border)
card_margin = 1         # Margin on each side of a card
container_padding = 1   # Padding on each side of the grid

[panel]
height = 8              # Expanded inline panel height in rows
open_ms = 300           # Expand transition
close_ms = 300          # Collapse transition
settle_ms = 400         # Pause after collapsing before the next panel opens

[ui]
show_orders = true      # Show each card's order index
show_hints = true       # Show keybinding hints in the header
"#;

/// Path of the project-local config file under `base`
pub fn local_config_path(base: &Path) -> PathBuf {
    base.join(CARDGRID_DIR).join(CONFIG_FILENAME)
}

/// Path of the per-user config file, if a config directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardgrid").join(CONFIG_FILENAME))
}

/// Find the config file to use.
///
/// Order: an explicit path, `<base>/.cardgrid/config.toml`, then the per-user
/// config directory. Returns `None` when nothing exists.
pub fn resolve_config_path(explicit: Option<&Path>, base: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = local_config_path(base);
    if local.exists() {
        return Some(local);
    }

    user_config_path().filter(|p| p.exists())
}

/// Load settings from a config file
///
/// Missing or malformed files fall back to defaults with a warning.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Strict variant of [`load_settings`] that reports failures
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(config_path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Create a commented default config file in `<base>/.cardgrid/`
///
/// Returns the path of the config file. An existing file is left untouched.
pub fn init_config_dir(base: &Path) -> Result<PathBuf> {
    let dir = base.join(CARDGRID_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .cardgrid dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
