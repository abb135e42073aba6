//! Message processing
//!
//! Runs a message through the TEA update function, following up any chained
//! messages and dispatching the actions they produce.

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function.
///
/// `on_step` sees the state after every update in the chain, so observers
/// catch intermediate phases (a panel that closes and immediately reopens
/// passes through `Closed`).
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    mut on_step: impl FnMut(&AppState),
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }
        on_step(state);

        msg = result.message;
    }
}
