//! Keyboard focus movement
//!
//! Focus moves through cards in creation order. Row steps use the current
//! cards-per-row so Up/Down land on the card visually above or below.

use cardgrid_core::{CardId, CardsPerRow};

use crate::state::AppState;

use super::UpdateResult;

fn set_focus(state: &mut AppState, index: usize) {
    state.focused = Some(CardId(index));
    state.grid_view_state.reveal_focus = true;
}

fn current_index(state: &AppState) -> usize {
    state.focused.map(CardId::index).unwrap_or(0)
}

/// Move focus by `delta` cards, clamped to the grid
pub fn handle_focus_step(state: &mut AppState, delta: isize) -> UpdateResult {
    if state.grid.is_empty() {
        return UpdateResult::none();
    }
    let last = state.grid.len() - 1;
    let target = current_index(state).saturating_add_signed(delta).min(last);
    set_focus(state, target);
    UpdateResult::none()
}

/// Move focus by `rows` visual rows
pub fn handle_focus_row(state: &mut AppState, rows: isize) -> UpdateResult {
    let per_row = state.cards_per_row().unwrap_or(CardsPerRow::One).count() as isize;
    let current = current_index(state) as isize;
    let target = current + rows * per_row;

    // Stay put rather than clamping sideways onto another column
    if target < 0 || target >= state.grid.len() as isize {
        return UpdateResult::none();
    }
    set_focus(state, target as usize);
    UpdateResult::none()
}

pub fn handle_focus_first(state: &mut AppState) -> UpdateResult {
    if !state.grid.is_empty() {
        set_focus(state, 0);
    }
    UpdateResult::none()
}

pub fn handle_focus_last(state: &mut AppState) -> UpdateResult {
    if !state.grid.is_empty() {
        set_focus(state, state.grid.len() - 1);
    }
    UpdateResult::none()
}
