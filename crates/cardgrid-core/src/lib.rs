//! # cardgrid-core - Core Grid Model
//!
//! Foundation crate for Card Grid. Provides the card grid model, layout
//! measurement, row position resolution, order reflow, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Grid (`grid`)
//! - [`Grid`] - Cards in creation order plus the optional inline panel slot
//! - [`Card`], [`PanelSlot`], [`GridRow`], [`GridItem`]
//!
//! ### Layout (`layout`)
//! - [`LayoutMetrics`] - Container and card measurements
//! - [`cards_per_row()`] - How many cards fit on one row (1, 2 or 3)
//!
//! ### Position (`position`)
//! - [`resolve()`] - Row position and order delta for a clicked card
//!
//! ### Reflow (`reflow`)
//! - [`LayoutState`] - Per-interaction layout bookkeeping
//! - [`insertion_point()`], [`apply_offsets()`], [`collapse_order()`], [`place_panel()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cardgrid_core::prelude::*;
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod position;
pub mod reflow;
pub mod types;

/// Prelude for common imports used throughout all Card Grid crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use grid::{Card, Grid, GridItem, GridRow, PanelSlot, DEFAULT_CARD_COUNT};
pub use layout::{cards_per_row, LayoutMetrics};
pub use position::{resolve, Resolution};
pub use reflow::{apply_offsets, collapse_order, insertion_point, place_panel, LayoutState};
pub use types::{AppPhase, CardId, CardVisual, CardsPerRow, RowPosition};
