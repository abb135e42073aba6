//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the app crate (and the headless runner) never depend on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Focus movement
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Scrolling
    PageUp,
    PageDown,

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
