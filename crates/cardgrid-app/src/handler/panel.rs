//! Card activation and inline panel transition handlers
//!
//! A click on a card never mutates orders while a panel is still collapsing:
//! the click is parked as the pending activation and replayed as a fresh
//! `CardClicked` once the close timer for the current generation fires.

use std::time::Instant;

use cardgrid_core::prelude::*;
use cardgrid_core::{collapse_order, place_panel, CardId, LayoutState};

use crate::message::Message;
use crate::panel::PanelPhase;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Handle a click on a card
pub fn handle_card_clicked(state: &mut AppState, card: CardId) -> UpdateResult {
    if let Err(e) = state.grid.require(card) {
        state.report_error(&e);
        return UpdateResult::none();
    }
    state.focused = Some(card);

    let now = Instant::now();
    match state.panel.phase() {
        PanelPhase::Closed => activate_card(state, card, now),

        PanelPhase::Opening | PanelPhase::Open => {
            // Clicking the card that owns the panel only closes it
            let toggling_off = state.panel.anchor() == Some(card);
            let pending = (!toggling_off).then_some(card);
            debug!(
                "Click on {} while panel open (toggle off: {})",
                card, toggling_off
            );
            state.panel.set_pending_activation(pending);
            start_close(state, now)
        }

        PanelPhase::Closing => {
            debug!("Click on {} queued behind closing panel", card);
            state.panel.set_pending_activation(Some(card));
            UpdateResult::none()
        }
    }
}

/// Handle a click that hit no card
pub fn handle_outside_click(state: &mut AppState) -> UpdateResult {
    match state.panel.phase() {
        PanelPhase::Opening | PanelPhase::Open => {
            state.panel.set_pending_activation(None);
            start_close(state, Instant::now())
        }
        // Nothing to close, or the close is already under way
        PanelPhase::Closing | PanelPhase::Closed => UpdateResult::none(),
    }
}

/// Handle the end of an open or close transition
pub fn handle_panel_timer(state: &mut AppState, generation: u64) -> UpdateResult {
    let phase = state.panel.phase();

    if phase == PanelPhase::Opening && state.panel.finish_open(generation) {
        debug!("Panel open (generation {})", generation);
        return UpdateResult::none();
    }

    if phase == PanelPhase::Closing && state.panel.finish_close(generation) {
        state.grid.remove_panel();
        state.layout_state = collapse_order(&mut state.grid);
        debug!("Panel closed (generation {}), orders collapsed", generation);

        // Replay the queued click against the collapsed grid
        return match state.panel.take_pending_activation() {
            Some(card) => UpdateResult::message(Message::CardClicked(card)),
            None => UpdateResult::none(),
        };
    }

    trace!(
        "Ignoring stale panel timer {} (current {}, {:?})",
        generation,
        state.panel.generation(),
        phase
    );
    UpdateResult::none()
}

fn start_close(state: &mut AppState, now: Instant) -> UpdateResult {
    state.grid.clear_visuals();
    match state.panel.begin_close(now) {
        Some(generation) => UpdateResult::action(UpdateAction::StartPanelTimer {
            generation,
            delay: state.panel.timing().close_delay(),
        }),
        None => UpdateResult::none(),
    }
}

/// Open the panel for `card` on a grid with no panel showing.
///
/// Collapses any leftover order offsets, highlights the card, measures the
/// row width and reflows orders around the new panel.
fn activate_card(state: &mut AppState, card: CardId, now: Instant) -> UpdateResult {
    state.grid.remove_panel();
    state.layout_state = collapse_order(&mut state.grid);

    match place(state, card) {
        Ok(layout_state) => {
            state.layout_state = layout_state;
            state.last_error = None;
            let generation = state.panel.begin_open(card, now);
            info!("Opening panel for {} (generation {})", card, generation);
            UpdateResult::action(UpdateAction::StartPanelTimer {
                generation,
                delay: state.panel.timing().open,
            })
        }
        Err(e) => {
            state.grid.remove_panel();
            state.layout_state = collapse_order(&mut state.grid);
            state.grid.clear_visuals();
            state.report_error(&e);
            UpdateResult::none()
        }
    }
}

fn place(state: &mut AppState, card: CardId) -> Result<LayoutState> {
    state.grid.activate(card)?;
    let per_row = state.cards_per_row()?;
    place_panel(&mut state.grid, card, per_row)
}
