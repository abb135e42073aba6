//! Grid view state - scroll position, viewport bounds and click targets.
//!
//! This module defines the state shared by the app handler layer (scroll
//! commands, click hit-testing) and the TUI layer (which records what it drew).

use cardgrid_core::CardId;

// ─────────────────────────────────────────────────────────────────────────────
// HitRegion
// ─────────────────────────────────────────────────────────────────────────────

/// Screen rectangle a card was drawn into during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub card: CardId,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRegion {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GridViewState
// ─────────────────────────────────────────────────────────────────────────────

/// State for grid scrolling and mouse hit-testing
#[derive(Debug, Default)]
pub struct GridViewState {
    /// Current vertical scroll offset from top, in rows
    pub offset: u16,
    /// Total height of the laid out grid (set during render)
    pub content_height: u16,
    /// Visible rows (set during render)
    pub visible_height: u16,
    /// Width of the grid area (set during render)
    pub viewport_width: u16,
    /// Card rectangles from the last render
    pub hit_regions: Vec<HitRegion>,
    /// Scroll the focused card into view on the next render
    pub reveal_focus: bool,
}

impl GridViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.visible_height)
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_height.max(1));
    }

    /// Re-clamp the offset after content or viewport changed size
    pub fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Card drawn at a screen position, if any
    pub fn card_at(&self, column: u16, row: u16) -> Option<CardId> {
        self.hit_regions
            .iter()
            .find(|r| r.contains(column, row))
            .map(|r| r.card)
    }
}
