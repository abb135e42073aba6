//! Application state (Model in TEA pattern)

use cardgrid_core::prelude::*;
use cardgrid_core::{cards_per_row, AppPhase, CardId, CardsPerRow, Grid, LayoutMetrics, LayoutState};

use crate::config::Settings;
use crate::grid_view_state::GridViewState;
use crate::panel::{PanelController, PanelTiming};

/// Width assumed before the first render or resize reports the real one
const DEFAULT_VIEWPORT_WIDTH: u16 = 80;
const DEFAULT_VIEWPORT_HEIGHT: u16 = 24;

/// Terminal size as last reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Cards and the inline panel slot
    pub grid: Grid,
    /// Inline panel lifecycle
    pub panel: PanelController,
    /// Bookkeeping for the current interaction; unset whenever the grid is collapsed
    pub layout_state: LayoutState,

    /// Card focused for keyboard activation
    pub focused: Option<CardId>,
    pub viewport: Viewport,
    pub grid_view_state: GridViewState,

    /// Last error surfaced to the user (shown in the status bar)
    pub last_error: Option<String>,
    /// Whether `last_error` is one the grid cannot recover from
    pub last_error_fatal: bool,
    /// Errors reported so far, so repeats of the same message are observable
    pub error_count: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let grid = Grid::build(settings.grid.card_count);
        let panel = PanelController::new(PanelTiming::from(&settings.panel));
        let focused = (!grid.is_empty()).then_some(CardId(0));

        Self {
            phase: AppPhase::Running,
            settings,
            grid,
            panel,
            layout_state: LayoutState::default(),
            focused,
            viewport: Viewport::default(),
            grid_view_state: GridViewState::new(),
            last_error: None,
            last_error_fatal: false,
            error_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Measurements for the layout inspector, taken from the current viewport
    pub fn layout_metrics(&self) -> LayoutMetrics {
        let grid = &self.settings.grid;
        let container_width = if self.grid_view_state.viewport_width > 0 {
            self.grid_view_state.viewport_width
        } else {
            self.viewport.width
        };

        LayoutMetrics {
            container_width: u32::from(container_width),
            container_padding: u32::from(grid.container_padding),
            card_width: u32::from(grid.card_width),
            card_margin: u32::from(grid.card_margin),
        }
    }

    /// Cards per row for the current viewport, measured fresh every call
    pub fn cards_per_row(&self) -> Result<CardsPerRow> {
        cards_per_row(&self.layout_metrics())
    }

    /// Record an error for the status bar
    pub fn report_error(&mut self, err: &Error) {
        if err.is_recoverable() {
            warn!("{}", err);
        } else {
            error!("{}", err);
        }
        self.last_error = Some(err.to_string());
        self.last_error_fatal = err.is_fatal();
        self.error_count += 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
