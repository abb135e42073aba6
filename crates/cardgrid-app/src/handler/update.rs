//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `panel`: card clicks, outside clicks, transition timers
//! - `focus`: keyboard focus movement
//! - `scroll`: grid scrolling

use crate::message::Message;
use crate::state::AppState;
use cardgrid_core::AppPhase;
use tracing::debug;

use super::{focus, keys::handle_key, panel, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Render reads the panel progress from the clock; nothing to mutate
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Pointer Messages
        // ─────────────────────────────────────────────────────────
        Message::Click { column, row } => {
            match state.grid_view_state.card_at(column, row) {
                Some(card) => UpdateResult::message(Message::CardClicked(card)),
                None => {
                    debug!("Click at ({}, {}) outside all cards", column, row);
                    UpdateResult::message(Message::OutsideClick)
                }
            }
        }
        Message::CardClicked(card) => panel::handle_card_clicked(state, card),
        Message::OutsideClick => panel::handle_outside_click(state),

        // ─────────────────────────────────────────────────────────
        // Panel Transition Messages
        // ─────────────────────────────────────────────────────────
        Message::PanelTimerElapsed { generation } => panel::handle_panel_timer(state, generation),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => focus::handle_focus_step(state, 1),
        Message::FocusPrevious => focus::handle_focus_step(state, -1),
        Message::FocusDown => focus::handle_focus_row(state, 1),
        Message::FocusUp => focus::handle_focus_row(state, -1),
        Message::FocusFirst => focus::handle_focus_first(state),
        Message::FocusLast => focus::handle_focus_last(state),
        Message::ActivateFocused => match state.focused {
            Some(card) => UpdateResult::message(Message::CardClicked(card)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Viewport Messages
        // ─────────────────────────────────────────────────────────
        Message::Resize { width, height } => {
            debug!("Viewport resized to {}x{}", width, height);
            state.viewport.width = width;
            state.viewport.height = height;
            // Stale until the next render measures the grid area again
            state.grid_view_state.viewport_width = 0;
            UpdateResult::none()
        }
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}
