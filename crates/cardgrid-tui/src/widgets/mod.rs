//! Custom widget components

pub mod card_grid;
mod header;
mod status_bar;

pub use card_grid::{compute_geometry, CardGrid, GridDimensions, GridGeometry, Placement, Slot};
pub use header::MainHeader;
pub use status_bar::StatusBar;
