//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel that input
//! sources and timers feed, and the broadcast channel that reports domain
//! events to whoever is watching.

use tokio::sync::{broadcast, mpsc};
use tracing::info;

use cardgrid_core::{CardId, LayoutState};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::panel::PanelPhase;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before each update step and compared after it to decide which
/// EngineEvents to emit.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    panel_phase: PanelPhase,
    anchor: Option<CardId>,
    layout_state: LayoutState,
    has_panel: bool,
    error_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            panel_phase: state.panel.phase(),
            anchor: state.panel.anchor(),
            layout_state: state.layout_state,
            has_panel: state.grid.has_panel(),
            error_count: state.error_count,
        }
    }
}

/// Orchestration engine for Card Grid.
///
/// Encapsulates all state shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel (input sources, signal handler, panel timers)
/// - Settings
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Settings the state was built from
    pub settings: Settings,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        info!("Engine started with {} cards", state.grid.len());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle, emitting
    /// EngineEvents for every state change along the way.
    pub fn process_message(&mut self, msg: Message) {
        let event_tx = &self.event_tx;
        let mut pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, |state| {
            let post = StateSnapshot::capture(state);
            if post != pre {
                emit_events(event_tx, state, &pre, &post);
                pre = post;
            }
        });
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// Panel timers still in flight are left to fire into a closed channel.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        emit(&self.event_tx, EngineEvent::Shutdown);
    }
}

/// Emit EngineEvents for the difference between two snapshots
fn emit_events(
    event_tx: &broadcast::Sender<EngineEvent>,
    state: &AppState,
    pre: &StateSnapshot,
    post: &StateSnapshot,
) {
    if pre.has_panel && !post.has_panel {
        emit(event_tx, EngineEvent::OrdersCollapsed);
    }

    if pre.panel_phase != post.panel_phase {
        emit(
            event_tx,
            EngineEvent::PanelPhaseChanged {
                from: pre.panel_phase,
                to: post.panel_phase,
                anchor: post.anchor,
            },
        );
    }

    // A freshly placed panel: report how the grid reflowed around it
    if post.panel_phase == PanelPhase::Opening && pre.panel_phase != PanelPhase::Opening {
        if let (Some(card), Some(slot)) = (post.anchor, state.grid.panel()) {
            let layout = &post.layout_state;
            if let (Some(clicked_order), Some(position), Some(change_amount)) = (
                layout.clicked_order,
                layout.clicked_position,
                layout.change_amount,
            ) {
                emit(
                    event_tx,
                    EngineEvent::CardActivated {
                        card,
                        clicked_order,
                        position,
                        change_amount,
                        panel_order: slot.order,
                        cards_per_row: state.cards_per_row().ok(),
                    },
                );
            }
        }
    }

    if post.error_count > pre.error_count {
        if let Some(message) = &state.last_error {
            emit(
                event_tx,
                EngineEvent::Error {
                    message: message.clone(),
                    fatal: state.last_error_fatal,
                },
            );
        }
    }
}

/// send() returns Err only if there are no receivers, which is fine
fn emit(event_tx: &broadcast::Sender<EngineEvent>, event: EngineEvent) {
    let _ = event_tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgrid_core::RowPosition;
    use std::time::Duration;

    fn engine() -> Engine {
        let mut engine = Engine::new(Settings::default());
        engine.state.viewport.width = 74;
        engine
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_engine_new_creates_valid_state() {
        let engine = Engine::new(Settings::default());
        assert!(!engine.should_quit());
        assert_eq!(engine.state.grid.len(), 12);
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = engine();
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = engine();
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_click_emits_opening_and_activation() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(Message::CardClicked(CardId(0)));

        let events = drain_events(&mut rx);
        assert_eq!(
            events,
            vec![
                EngineEvent::PanelPhaseChanged {
                    from: PanelPhase::Closed,
                    to: PanelPhase::Opening,
                    anchor: Some(CardId(0)),
                },
                EngineEvent::CardActivated {
                    card: CardId(0),
                    clicked_order: 0,
                    position: RowPosition::First,
                    change_amount: 3,
                    panel_order: 3,
                    cards_per_row: Some(cardgrid_core::CardsPerRow::Three),
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_reports_intermediate_close() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(Message::CardClicked(CardId(0)));
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(engine.drain_pending_messages(), 1);
        assert_eq!(engine.state.panel.phase(), PanelPhase::Open);

        engine.process_message(Message::CardClicked(CardId(4)));
        tokio::time::sleep(Duration::from_millis(750)).await;
        assert_eq!(engine.drain_pending_messages(), 1);

        let names: Vec<_> = drain_events(&mut rx).iter().map(EngineEvent::name).collect();
        assert_eq!(
            names,
            vec![
                "panel_opening",
                "card_activated",
                "panel_open",
                "panel_closing",
                "orders_collapsed",
                "panel_closed",
                "panel_opening",
                "card_activated",
            ]
        );
        assert_eq!(engine.state.panel.anchor(), Some(CardId(4)));
    }

    #[tokio::test]
    async fn test_repeated_errors_are_each_reported() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(Message::CardClicked(CardId(99)));
        engine.process_message(Message::CardClicked(CardId(99)));

        let errors: Vec<_> = drain_events(&mut rx)
            .into_iter()
            .filter(|e| matches!(e, EngineEvent::Error { .. }))
            .collect();
        assert_eq!(errors.len(), 2);
        // A missing card is recoverable
        assert!(matches!(
            errors[0],
            EngineEvent::Error { fatal: false, .. }
        ));
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let mut engine = engine();
        let mut rx = engine.subscribe();
        engine.shutdown();
        assert_eq!(rx.try_recv().unwrap(), EngineEvent::Shutdown);
    }
}
