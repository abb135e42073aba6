//! cardgrid-app - Application state and orchestration for Card Grid
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the inline panel state machine, the Engine shared by the TUI
//! and headless runners, and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod grid_view_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use grid_view_state::{GridViewState, HitRegion};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{PanelController, PanelPhase, PanelTiming};
pub use state::{AppState, Viewport};
