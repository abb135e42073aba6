//! Status bar widget
//!
//! Displays the panel phase, the layout state of the current interaction,
//! a queued activation and the last error.

use cardgrid_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Status bar widget showing panel and layout state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_indicator(&self) -> Span<'static> {
        let phase = self.state.panel.phase();
        let (icon, label, style) = styles::phase_indicator(phase);
        match self.state.panel.anchor() {
            Some(card) => Span::styled(format!("{} {} ({})", icon, label, card), style),
            None => Span::styled(format!("{} {}", icon, label), style),
        }
    }

    fn layout_info(&self) -> Option<Span<'static>> {
        let layout = &self.state.layout_state;
        let (order, position, change) = (
            layout.clicked_order?,
            layout.clicked_position?,
            layout.change_amount?,
        );
        Some(Span::styled(
            format!("order {} · {} · +{}", order, position, change),
            styles::text_secondary(),
        ))
    }

    fn pending(&self) -> Option<Span<'static>> {
        self.state
            .panel
            .pending_activation()
            .map(|card| Span::styled(format!("next: {}", card), styles::accent()))
    }

    fn error(&self) -> Option<Span<'static>> {
        self.state
            .last_error
            .as_ref()
            .map(|e| Span::styled(format!("✗ {}", e), styles::status_red()))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM));

        let mut spans = vec![Span::raw(" "), self.phase_indicator()];
        for span in [self.layout_info(), self.pending(), self.error()]
            .into_iter()
            .flatten()
        {
            spans.push(separator());
            spans.push(span);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cardgrid_core::{CardId, Error, RowPosition};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_closed_panel() {
        let state = AppState::new();
        let term = render(&state);
        assert!(term.buffer_contains("○ Closed"));
        assert!(!term.buffer_contains("order"));
    }

    #[test]
    fn test_shows_layout_state_and_pending() {
        let mut state = AppState::new();
        state.layout_state.clicked_order = Some(4);
        state.layout_state.clicked_position = Some(RowPosition::Middle);
        state.layout_state.change_amount = Some(2);
        state.panel.set_pending_activation(Some(CardId(7)));

        let term = render(&state);
        assert!(term.buffer_contains("order 4 · middle · +2"));
        assert!(term.buffer_contains("next: card 7"));
    }

    #[test]
    fn test_shows_last_error() {
        let mut state = AppState::new();
        state.report_error(&Error::element_missing("card 30"));
        let term = render(&state);
        assert!(term.buffer_contains("✗"));
        assert!(term.buffer_contains("card 30"));
    }
}
