//! Headless mode runner - main event loop without TUI
//!
//! Stdin commands (one per line):
//! - `click N` - click card N (creation index, starting at 0)
//! - `outside` - click outside every card
//! - `resize W [H]` - change the viewport size
//! - `wait MS` - pause the command stream for MS milliseconds
//! - `quit` / `q` - exit

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use cardgrid_app::config::Settings;
use cardgrid_app::{message::Message, Engine, EngineEvent};
use cardgrid_core::prelude::*;
use cardgrid_core::CardId;

use super::HeadlessEvent;

/// Viewport height used until a `resize` command says otherwise
const DEFAULT_HEIGHT: u16 = 24;

/// A parsed stdin command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Message),
    Wait(Duration),
    Quit,
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };

    let number = |arg: Option<&str>, what: &str| -> Result<u64> {
        arg.ok_or_else(|| Error::invalid_command(format!("{verb}: missing {what}")))?
            .parse::<u64>()
            .map_err(|e| Error::invalid_command(format!("{verb}: bad {what}: {e}")))
    };

    let command = match verb {
        "click" => {
            let index = number(parts.next(), "card index")?;
            Command::Send(Message::CardClicked(CardId(index as usize)))
        }
        "outside" => Command::Send(Message::OutsideClick),
        "resize" => {
            let width = number(parts.next(), "width")?;
            let height = match parts.next() {
                Some(h) => number(Some(h), "height")?,
                None => u64::from(DEFAULT_HEIGHT),
            };
            Command::Send(Message::Resize {
                width: u16::try_from(width).unwrap_or(u16::MAX),
                height: u16::try_from(height).unwrap_or(u16::MAX),
            })
        }
        "wait" => Command::Wait(Duration::from_millis(number(parts.next(), "milliseconds")?)),
        "q" | "quit" => Command::Quit,
        other => {
            return Err(Error::invalid_command(format!(
                "unknown command: {other}"
            )))
        }
    };
    Ok(Some(command))
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Card Grid starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();
    forward_events(&mut events);

    info!("Card Grid headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        forward_events(events);
    }

    Ok(())
}

/// Write every queued engine event to stdout
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from_engine(&event).emit(),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read stdin commands and send them to the message channel (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(line.trim()) {
            Ok(Some(Command::Send(msg))) => {
                if msg_tx.blocking_send(msg).is_err() {
                    break;
                }
            }
            Ok(Some(Command::Wait(delay))) => std::thread::sleep(delay),
            Ok(Some(Command::Quit)) => {
                info!("Stdin: quit requested");
                let _ = msg_tx.blocking_send(Message::Quit);
                break;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Bad stdin command {:?}: {}", line, e);
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
        }
    }

    info!("Stdin reader exiting");
}
