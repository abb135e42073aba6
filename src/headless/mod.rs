//! Headless mode - JSON event output for scripted runs
//!
//! The grid runs without a terminal UI. Commands are read line by line from
//! stdin and every engine event is written to stdout as NDJSON
//! (newline-delimited JSON), one event per line with an `event` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"panel_opening","card":0,"timestamp":1704700001000}
//! {"event":"card_activated","card":0,"clicked_order":0,"position":"first","change_amount":3,"panel_order":3,"cards_per_row":3,"timestamp":1704700001000}
//! {"event":"panel_open","card":0,"timestamp":1704700001300}
//! ```

pub mod runner;

use cardgrid_app::{EngineEvent, PanelPhase};
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The panel started expanding below the card's row
    PanelOpening { card: Option<usize>, timestamp: i64 },

    /// The panel finished expanding
    PanelOpen { card: Option<usize>, timestamp: i64 },

    /// The panel started collapsing
    PanelClosing { card: Option<usize>, timestamp: i64 },

    /// The panel was removed from the grid
    PanelClosed { timestamp: i64 },

    /// A card was activated and the orders reflowed around its panel
    CardActivated {
        card: usize,
        clicked_order: u32,
        position: String,
        change_amount: u32,
        panel_order: u32,
        cards_per_row: Option<usize>,
        timestamp: i64,
    },

    /// Card orders were reset to creation order
    OrdersCollapsed { timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// The runner is exiting
    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event into its NDJSON form
    pub fn from_engine(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::PanelPhaseChanged { to, anchor, .. } => {
                let card = anchor.map(|c| c.index());
                match to {
                    PanelPhase::Opening => Self::PanelOpening { card, timestamp },
                    PanelPhase::Open => Self::PanelOpen { card, timestamp },
                    PanelPhase::Closing => Self::PanelClosing { card, timestamp },
                    PanelPhase::Closed => Self::PanelClosed { timestamp },
                }
            }
            EngineEvent::CardActivated {
                card,
                clicked_order,
                position,
                change_amount,
                panel_order,
                cards_per_row,
            } => Self::CardActivated {
                card: card.index(),
                clicked_order: *clicked_order,
                position: position.to_string(),
                change_amount: *change_amount,
                panel_order: *panel_order,
                cards_per_row: cards_per_row.map(|p| p.count()),
                timestamp,
            },
            EngineEvent::OrdersCollapsed => Self::OrdersCollapsed { timestamp },
            EngineEvent::Error { message, fatal } => Self::Error {
                message: message.clone(),
                fatal: *fatal,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgrid_core::{CardId, CardsPerRow, RowPosition};

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_panel_phase_events_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::PanelPhaseChanged {
            from: PanelPhase::Closed,
            to: PanelPhase::Opening,
            anchor: Some(CardId(4)),
        });
        let value = to_json(&event);

        assert_eq!(value["event"], "panel_opening");
        assert_eq!(value["card"], 4);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_panel_closed_has_no_card() {
        let event = HeadlessEvent::from_engine(&EngineEvent::PanelPhaseChanged {
            from: PanelPhase::Closing,
            to: PanelPhase::Closed,
            anchor: None,
        });
        let value = to_json(&event);

        assert_eq!(value["event"], "panel_closed");
        assert!(value.get("card").is_none());
    }

    #[test]
    fn test_card_activated_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::CardActivated {
            card: CardId(2),
            clicked_order: 2,
            position: RowPosition::Last,
            change_amount: 1,
            panel_order: 3,
            cards_per_row: Some(CardsPerRow::Three),
        });
        let value = to_json(&event);

        assert_eq!(value["event"], "card_activated");
        assert_eq!(value["card"], 2);
        assert_eq!(value["position"], "last");
        assert_eq!(value["change_amount"], 1);
        assert_eq!(value["panel_order"], 3);
        assert_eq!(value["cards_per_row"], 3);
    }

    #[test]
    fn test_error_serialization() {
        let value = to_json(&HeadlessEvent::error("no such card".to_string(), false));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "no such card");
        assert_eq!(value["fatal"], false);
    }

    #[test]
    fn test_engine_error_keeps_fatal_flag() {
        let value = to_json(&HeadlessEvent::from_engine(&EngineEvent::Error {
            message: "Invariant violated: two panels".to_string(),
            fatal: true,
        }));

        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_orders_collapsed_and_shutdown_names() {
        assert_eq!(
            to_json(&HeadlessEvent::from_engine(&EngineEvent::OrdersCollapsed))["event"],
            "orders_collapsed"
        );
        assert_eq!(
            to_json(&HeadlessEvent::from_engine(&EngineEvent::Shutdown))["event"],
            "shutdown"
        );
    }
}
