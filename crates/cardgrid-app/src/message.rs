//! Message types for the application (TEA pattern)

use cardgrid_core::CardId;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animation redraws
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Pointer Messages
    // ─────────────────────────────────────────────────────────
    /// Left mouse press at a screen position; hit-tested against the
    /// regions recorded by the last render
    Click { column: u16, row: u16 },
    /// A card was clicked (or activated from the keyboard)
    CardClicked(CardId),
    /// A click landed outside every card
    OutsideClick,

    // ─────────────────────────────────────────────────────────
    // Panel Transition Messages
    // ─────────────────────────────────────────────────────────
    /// A panel transition timer finished
    PanelTimerElapsed { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Move focus one visual row down
    FocusDown,
    /// Move focus one visual row up
    FocusUp,
    FocusFirst,
    FocusLast,
    /// Activate the focused card as if it were clicked
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Viewport Messages
    // ─────────────────────────────────────────────────────────
    /// Terminal (or headless viewport) resized
    Resize { width: u16, height: u16 },
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}
