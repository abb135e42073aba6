//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Map a key press to a message
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc behaves like clicking the page background
        InputKey::Esc => Some(Message::OutsideClick),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),

        InputKey::Left | InputKey::Char('h') => Some(Message::FocusPrevious),
        InputKey::Right | InputKey::Char('l') => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusUp),
        InputKey::Down => Some(Message::FocusDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),

        InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => None,
    }
}
