//! Configuration types for Card Grid
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section settings structs with serde defaults

use cardgrid_core::prelude::*;
use cardgrid_core::DEFAULT_CARD_COUNT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (`.cardgrid/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub grid: GridSettings,

    #[serde(default)]
    pub panel: PanelSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Upper bound on `grid.card_count`; keeps a single-column grid within `u16` rows
pub const MAX_CARD_COUNT: usize = 1_000;

/// Upper bound on `grid.card_margin` and `grid.container_padding`
pub const MAX_SPACING: u16 = 100;

impl Settings {
    /// Reject settings that would make the grid impossible to lay out
    pub fn validate(&self) -> Result<()> {
        if self.grid.card_count == 0 {
            return Err(Error::config_invalid("grid.card_count must be at least 1"));
        }
        if self.grid.card_count > MAX_CARD_COUNT {
            return Err(Error::config_invalid(format!(
                "grid.card_count must be at most {MAX_CARD_COUNT}"
            )));
        }
        if self.grid.card_margin > MAX_SPACING || self.grid.container_padding > MAX_SPACING {
            return Err(Error::config_invalid(format!(
                "grid.card_margin and grid.container_padding must be at most {MAX_SPACING}"
            )));
        }
        if self.grid.card_width == 0 {
            return Err(Error::config_invalid("grid.card_width must be at least 1"));
        }
        if self.grid.card_height < 3 {
            return Err(Error::config_invalid(
                "grid.card_height must be at least 3 (border plus one line)",
            ));
        }
        Ok(())
    }
}

/// Card and container geometry, in terminal cells
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GridSettings {
    /// Number of cards created at startup
    #[serde(default = "default_card_count")]
    pub card_count: usize,

    /// Card width without margins
    #[serde(default = "default_card_width")]
    pub card_width: u16,

    /// Card height including its border
    #[serde(default = "default_card_height")]
    pub card_height: u16,

    /// Margin on each side of a card
    #[serde(default = "default_card_margin")]
    pub card_margin: u16,

    /// Padding on each side of the container
    #[serde(default = "default_container_padding")]
    pub container_padding: u16,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            card_count: default_card_count(),
            card_width: default_card_width(),
            card_height: default_card_height(),
            card_margin: default_card_margin(),
            container_padding: default_container_padding(),
        }
    }
}

fn default_card_count() -> usize {
    DEFAULT_CARD_COUNT
}

fn default_card_width() -> u16 {
    22
}

fn default_card_height() -> u16 {
    5
}

fn default_card_margin() -> u16 {
    1
}

fn default_container_padding() -> u16 {
    1
}

/// Inline panel size and transition timing
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PanelSettings {
    /// Fully expanded panel height in rows
    #[serde(default = "default_panel_height")]
    pub height: u16,

    /// Expand transition duration in milliseconds
    #[serde(default = "default_transition_ms")]
    pub open_ms: u64,

    /// Collapse transition duration in milliseconds
    #[serde(default = "default_transition_ms")]
    pub close_ms: u64,

    /// Extra wait after the collapse before the next panel may open
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl PanelSettings {
    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_ms)
    }

    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_ms)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            height: default_panel_height(),
            open_ms: default_transition_ms(),
            close_ms: default_transition_ms(),
            settle_ms: default_settle_ms(),
        }
    }
}

fn default_panel_height() -> u16 {
    8
}

fn default_transition_ms() -> u64 {
    300
}

fn default_settle_ms() -> u64 {
    400
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiSettings {
    /// Print each card's order index inside the card
    #[serde(default = "default_true")]
    pub show_orders: bool,

    /// Show keybinding hints in the header
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_orders: true,
            show_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
