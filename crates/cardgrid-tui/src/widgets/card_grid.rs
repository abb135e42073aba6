//! Card grid widget
//!
//! Lays the cards out in visual order (the order index, not creation order),
//! wrapping every `cards_per_row` cards. The inline panel takes a full row of
//! its own and grows with the transition progress. Card rectangles are
//! recorded in [`GridViewState::hit_regions`] so mouse clicks can be mapped
//! back to cards.

use cardgrid_app::config::Settings;
use cardgrid_app::{GridViewState, HitRegion};
use cardgrid_core::{
    cards_per_row, CardId, CardVisual, CardsPerRow, Grid, GridRow, LayoutMetrics, LayoutState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Cell dimensions used to lay out the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub card_width: u16,
    pub card_height: u16,
    pub card_margin: u16,
    pub container_padding: u16,
    /// Height of the fully expanded panel
    pub panel_height: u16,
}

impl GridDimensions {
    fn footprint(&self) -> u16 {
        self.card_width
            .saturating_add(self.card_margin.saturating_mul(2))
    }
}

impl From<&Settings> for GridDimensions {
    fn from(settings: &Settings) -> Self {
        Self {
            card_width: settings.grid.card_width,
            card_height: settings.grid.card_height,
            card_margin: settings.grid.card_margin,
            container_padding: settings.grid.container_padding,
            panel_height: settings.panel.height,
        }
    }
}

/// What occupies a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Card(CardId),
    Panel,
}

/// A laid out item. `x` is relative to the grid area, `y` to the top of the
/// scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    pub placements: Vec<Placement>,
    pub content_height: u16,
}

impl GridGeometry {
    pub fn card(&self, id: CardId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot == Slot::Card(id))
    }

    pub fn panel(&self) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot == Slot::Panel)
    }
}

/// Drawn height of the panel for a transition progress in `0.0..=1.0`
pub fn panel_height(full: u16, progress: f32) -> u16 {
    (f32::from(full) * progress.clamp(0.0, 1.0)).round() as u16
}

/// Place every card and the panel.
///
/// Rows are `card_height` tall with `card_margin` blank lines between them.
/// A panel with zero drawn height is left out so a closed-down panel does
/// not leave a gap.
pub fn compute_geometry(
    grid: &Grid,
    per_row: CardsPerRow,
    dims: GridDimensions,
    panel_progress: f32,
) -> GridGeometry {
    let pad = dims.container_padding;
    let margin = dims.card_margin;
    let footprint = dims.footprint();
    let row_span = footprint
        .saturating_mul(per_row.count() as u16)
        .saturating_sub(margin.saturating_mul(2));

    let mut placements = Vec::with_capacity(grid.len() + 1);
    let mut y = pad;
    let mut bottom = 0;

    for row in grid.rows(per_row) {
        let height = match row {
            GridRow::Cards(cards) => {
                for (column, card) in cards.into_iter().enumerate() {
                    placements.push(Placement {
                        slot: Slot::Card(card),
                        x: pad
                            .saturating_add(footprint.saturating_mul(column as u16))
                            .saturating_add(margin),
                        y,
                        width: dims.card_width,
                        height: dims.card_height,
                    });
                }
                dims.card_height
            }
            GridRow::Panel => {
                let height = panel_height(dims.panel_height, panel_progress);
                if height == 0 {
                    continue;
                }
                placements.push(Placement {
                    slot: Slot::Panel,
                    x: pad.saturating_add(margin),
                    y,
                    width: row_span,
                    height,
                });
                height
            }
        };

        bottom = y.saturating_add(height);
        y = bottom.saturating_add(margin);
    }

    GridGeometry {
        placements,
        content_height: bottom.saturating_add(pad),
    }
}

/// Clip a placement to the visible part of `area` given a scroll offset
fn visible_rect(area: Rect, placement: &Placement, offset: u16) -> Option<Rect> {
    let top = i32::from(placement.y) - i32::from(offset);
    let bottom = top + i32::from(placement.height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i32::from(area.height));
    if visible_top >= visible_bottom || placement.x >= area.width {
        return None;
    }

    let width = placement.width.min(area.width - placement.x);
    Some(Rect {
        x: area.x + placement.x,
        y: area.y + visible_top as u16,
        width,
        height: (visible_bottom - visible_top) as u16,
    })
}

/// Truncate to at most `max` display columns
fn truncate_to_width(text: &str, max: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Scrollable grid of cards with the inline panel
pub struct CardGrid<'a> {
    grid: &'a Grid,
    settings: &'a Settings,
    layout_state: &'a LayoutState,
    focused: Option<CardId>,
    panel_progress: f32,
}

impl<'a> CardGrid<'a> {
    pub fn new(grid: &'a Grid, settings: &'a Settings, layout_state: &'a LayoutState) -> Self {
        Self {
            grid,
            settings,
            layout_state,
            focused: None,
            panel_progress: 1.0,
        }
    }

    pub fn focused(mut self, focused: Option<CardId>) -> Self {
        self.focused = focused;
        self
    }

    /// Expansion of the panel, `0.0` collapsed to `1.0` fully open
    pub fn panel_progress(mut self, progress: f32) -> Self {
        self.panel_progress = progress;
        self
    }

    fn metrics(&self, width: u16) -> LayoutMetrics {
        let grid = &self.settings.grid;
        LayoutMetrics {
            container_width: u32::from(width),
            container_padding: u32::from(grid.container_padding),
            card_width: u32::from(grid.card_width),
            card_margin: u32::from(grid.card_margin),
        }
    }

    fn render_card(&self, id: CardId, area: Rect, buf: &mut Buffer) {
        let Some(card) = self.grid.card(id) else {
            return;
        };
        let focused = self.focused == Some(id);
        let (_, text_style) = styles::card_styles(card.visual);

        let block = styles::card_block(card.visual, focused);
        let inner = block.inner(area);
        let title_width = usize::from(area.width.saturating_sub(4));
        let title = truncate_to_width(&format!(" Card {} ", id.index() + 1), title_width);
        block.title(Span::styled(title, text_style)).render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        if self.settings.ui.show_orders {
            lines.push(Line::styled(format!("order {}", card.order), text_style));
        }
        if card.visual == CardVisual::Active {
            lines.push(Line::styled("details ▾", styles::accent()));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer) {
        let fade = styles::panel_fade(self.panel_progress);
        let anchor = self
            .grid
            .panel()
            .map(|p| format!(" Details · Card {} ", p.anchor.index() + 1))
            .unwrap_or_default();

        let block = styles::glass_block(true).style(fade).title(anchor);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let field = |label: &'static str, value: String| {
            vec![
                Span::styled(label, styles::text_muted()),
                Span::styled(value, fade),
                Span::raw("   "),
            ]
        };
        let state = self.layout_state;
        let show = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

        let mut spans = field("clicked order ", show(state.clicked_order.map(|o| o.to_string())));
        spans.extend(field(
            "position ",
            show(state.clicked_position.map(|p| p.to_string())),
        ));
        spans.extend(field(
            "change ",
            show(state.change_amount.map(|c| format!("+{c}"))),
        ));
        spans.extend(field(
            "panel order ",
            show(state.panel_order().map(|o| o.to_string())),
        ));

        Paragraph::new(Line::from(spans))
            .style(fade)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl StatefulWidget for CardGrid<'_> {
    type State = GridViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.viewport_width = area.width;
        state.visible_height = area.height;
        state.hit_regions.clear();

        if area.width == 0 || area.height == 0 {
            return;
        }

        let per_row = match cards_per_row(&self.metrics(area.width)) {
            Ok(per_row) => per_row,
            Err(e) => {
                state.content_height = 0;
                Paragraph::new(e.to_string())
                    .style(styles::status_red())
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
                return;
            }
        };

        let geometry = compute_geometry(
            self.grid,
            per_row,
            GridDimensions::from(self.settings),
            self.panel_progress,
        );
        state.content_height = geometry.content_height;

        if state.reveal_focus {
            state.reveal_focus = false;
            if let Some(p) = self.focused.and_then(|id| geometry.card(id)) {
                let bottom = p.y.saturating_add(p.height);
                if p.y < state.offset {
                    state.offset = p.y;
                } else if bottom > state.offset.saturating_add(state.visible_height) {
                    state.offset = bottom.saturating_sub(state.visible_height);
                }
            }
        }
        state.clamp_offset();

        for placement in &geometry.placements {
            let Some(rect) = visible_rect(area, placement, state.offset) else {
                continue;
            };
            match placement.slot {
                Slot::Card(id) => {
                    self.render_card(id, rect, buf);
                    state.hit_regions.push(HitRegion {
                        card: id,
                        x: rect.x,
                        y: rect.y,
                        width: rect.width,
                        height: rect.height,
                    });
                }
                Slot::Panel => self.render_panel(rect, buf),
            }
        }

        if geometry.content_height > area.height {
            let hint = format!(
                " {}/{} ",
                state
                    .offset
                    .saturating_add(state.visible_height.min(geometry.content_height)),
                geometry.content_height
            );
            let x = area.x + area.width.saturating_sub(hint.len() as u16);
            buf.set_string(
                x,
                area.y + area.height - 1,
                hint,
                Style::default().patch(styles::text_muted()),
            );
        }
    }
}
