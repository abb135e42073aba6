//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use cardgrid_core::{CardId, CardsPerRow, RowPosition};

use crate::panel::PanelPhase;

/// Domain events emitted by the Engine.
///
/// Derived from state snapshots taken around every update step, follow-up
/// messages included, so a card switch reports the intermediate close.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Panel Lifecycle
    // ─────────────────────────────────────────────────────────
    /// The inline panel moved to a new phase
    PanelPhaseChanged {
        from: PanelPhase,
        to: PanelPhase,
        /// Card owning the panel after the change (`None` once closed)
        anchor: Option<CardId>,
    },

    /// A card was activated and the grid reflowed around its panel
    CardActivated {
        card: CardId,
        clicked_order: u32,
        position: RowPosition,
        change_amount: u32,
        panel_order: u32,
        cards_per_row: Option<CardsPerRow>,
    },

    /// Card orders returned to their creation indices
    OrdersCollapsed,

    // ─────────────────────────────────────────────────────────
    // Errors
    // ─────────────────────────────────────────────────────────
    /// An operation failed; the grid was left collapsed
    Error { message: String, fatal: bool },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short event name, as used in the headless NDJSON stream
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::PanelPhaseChanged { to, .. } => match to {
                PanelPhase::Opening => "panel_opening",
                PanelPhase::Open => "panel_open",
                PanelPhase::Closing => "panel_closing",
                PanelPhase::Closed => "panel_closed",
            },
            EngineEvent::CardActivated { .. } => "card_activated",
            EngineEvent::OrdersCollapsed => "orders_collapsed",
            EngineEvent::Error { .. } => "error",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
