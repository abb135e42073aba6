//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use std::time::Instant;

use cardgrid_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the grid view state is written: the widget records the measured grid
/// width, scroll bounds and click targets for the next update.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    view_at(frame, state, Instant::now());
}

/// Render with an explicit clock reading for the panel transition
pub fn view_at(frame: &mut Frame, state: &mut AppState, now: Instant) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    // Grid first: it measures the width the header reports per-row for
    let grid = widgets::CardGrid::new(&state.grid, &state.settings, &state.layout_state)
        .focused(state.focused)
        .panel_progress(state.panel.progress(now));
    frame.render_stateful_widget(grid, areas.grid, &mut state.grid_view_state);

    let header = widgets::MainHeader::new(state.grid.len())
        .per_row(state.cards_per_row().ok())
        .show_hints(state.settings.ui.show_hints);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
