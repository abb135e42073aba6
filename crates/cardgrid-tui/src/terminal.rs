//! Terminal setup and restoration

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report mouse presses, wheel and moves to the app
pub fn enable_mouse_capture() -> io::Result<()> {
    execute!(io::stdout(), EnableMouseCapture)
}

pub fn disable_mouse_capture() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture)
}
