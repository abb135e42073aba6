//! Main TUI runner - entry point and event loop

use cardgrid_app::config::Settings;
use cardgrid_app::message::Message;
use cardgrid_app::Engine;
use cardgrid_core::prelude::*;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable, keyboard only: {}", e);
    }

    let mut engine = Engine::new(settings);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("Failed to disable mouse capture: {}", e);
    }
    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    result.and(restored)
}

/// Main event loop: drain engine messages, draw, poll the terminal
fn run_loop(term: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let size = term.size().context("reading terminal size")?;
    engine.process_message(Message::Resize {
        width: size.width,
        height: size.height,
    });

    while !engine.should_quit() {
        // Timer completions and signals arrive on the engine channel
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Event loop finished");
    Ok(())
}
