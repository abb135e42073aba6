//! Header bar widget
//!
//! Title, card count, current cards-per-row and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use cardgrid_core::CardsPerRow;

use crate::theme::{palette, styles};

/// Main header showing the app title, grid summary and keybindings
pub struct MainHeader {
    card_count: usize,
    per_row: Option<CardsPerRow>,
    show_hints: bool,
}

impl MainHeader {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            per_row: None,
            show_hints: true,
        }
    }

    pub fn per_row(mut self, per_row: Option<CardsPerRow>) -> Self {
        self.per_row = per_row;
        self
    }

    pub fn show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    fn hints() -> Line<'static> {
        let key = |k: &'static str| Span::styled(k, styles::keybinding());
        let label = |l: &'static str| Span::styled(l, styles::text_muted());
        Line::from(vec![
            label("["),
            key("click/Enter"),
            label("] Open  ["),
            key("Esc"),
            label("] Close  ["),
            key("←↑↓→"),
            label("] Move  ["),
            key("q"),
            label("] Quit "),
        ])
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let per_row = self
            .per_row
            .map(|p| format!(" · {} per row", p))
            .unwrap_or_default();
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Card Grid",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                format!("{} cards{}", self.card_count, per_row),
                styles::text_secondary(),
            ),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        if !self.show_hints {
            return;
        }

        // Right-align the hints when they fit beside the title
        let hints = Self::hints();
        let hints_width = hints.width() as u16;
        if left_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
