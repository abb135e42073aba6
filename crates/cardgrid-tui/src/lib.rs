//! cardgrid-tui - Terminal UI for Card Grid
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from cardgrid-app and adds terminal rendering, mouse and key event
//! polling, and the card grid widget.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
