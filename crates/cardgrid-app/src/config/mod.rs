//! Configuration file parsing for Card Grid
//!
//! Supports:
//! - `--config <file>` - Explicit settings file
//! - `.cardgrid/config.toml` - Settings next to the working directory
//! - `<config dir>/cardgrid/config.toml` - Per-user settings

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, local_config_path, resolve_config_path, try_load_settings,
    user_config_path,
};
pub use types::*;
