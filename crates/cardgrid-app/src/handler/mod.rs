//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `panel`: Card activation and inline panel transitions
//! - `focus`: Keyboard focus movement
//! - `keys`: Key event mapping
//! - `scroll`: Scroll handlers

pub(crate) mod focus;
pub(crate) mod keys;
pub(crate) mod panel;
pub(crate) mod scroll;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Wait for a panel transition to finish, then deliver
    /// `Message::PanelTimerElapsed { generation }`
    StartPanelTimer { generation: u64, delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
