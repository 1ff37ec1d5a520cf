/*!
 * Sliding window over a conversation history.
 *
 * The window is what actually goes out with a request: the system message
 * followed by the most recent `2 * max_context` messages. Older exchanges
 * stay in the history but are no longer sent.
 */

use crate::providers::ChatMessage;

use super::history::ConversationHistory;

/// Largest number of messages a window may hold for `max_context`.
pub fn window_limit(max_context: usize) -> usize {
    max_context * 2 + 1
}

/// Bounded view of `history` for the next request.
///
/// When the history holds at most `2 * max_context + 1` messages it is sent
/// whole. Otherwise the result is the system message plus the last
/// `2 * max_context` messages. The history itself is not modified.
pub fn window(history: &ConversationHistory, max_context: usize) -> Vec<ChatMessage> {
    let messages = history.messages();
    if messages.len() <= window_limit(max_context) {
        return messages.to_vec();
    }

    let recent = max_context * 2;
    let mut view = Vec::with_capacity(recent + 1);
    view.push(history.system_message().clone());
    view.extend_from_slice(&messages[messages.len() - recent..]);
    view
}
