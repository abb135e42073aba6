//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::StartPanelTimer { generation, delay } => {
            spawn_panel_timer(msg_tx, generation, delay);
        }
    }
}

/// Sleep for `delay`, then report the transition as finished.
///
/// The timer is never cancelled: the handler drops completions whose
/// generation no longer matches the panel.
pub fn spawn_panel_timer(
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    delay: Duration,
) -> JoinHandle<()> {
    trace!("Panel timer {} armed for {:?}", generation, delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if msg_tx
            .send(Message::PanelTimerElapsed { generation })
            .await
            .is_err()
        {
            debug!("Panel timer {} fired after the event loop closed", generation);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_panel_timer_delivers_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let handle = spawn_panel_timer(tx, 7, Duration::from_millis(300));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        handle.await.unwrap();
        assert_eq!(
            rx.recv().await,
            Some(Message::PanelTimerElapsed { generation: 7 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_timer_tolerates_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let handle = spawn_panel_timer(tx, 1, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(handle.await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_action_starts_timer() {
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::StartPanelTimer {
                generation: 3,
                delay: Duration::from_millis(700),
            },
            tx,
        );

        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert_eq!(msg, Some(Message::PanelTimerElapsed { generation: 3 }));
    }
}
