/*!
 * Conversation context management for chunk translation.
 *
 * This module provides continuity across chunks of one phase:
 * - Owned conversation history seeded with the phase's system prompt
 * - Sliding window view bounding what each request carries
 */

pub mod history;
pub mod window;

// Re-export main types
pub use history::ConversationHistory;
pub use window::{window, window_limit};
