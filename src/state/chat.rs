//! Chat transcript state machine for the chatbot page.
//!
//! DESIGN
//! ======
//! Plain data with pure transition methods; timestamps are passed in so
//! transitions stay deterministic under test. The page owns the async side:
//! `submit` hands back the query text, the network call runs, and `receive`
//! appends whatever text the resolution produced.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::client::ApiError;

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str =
    "Hello! I'm your VNR Placement Assistant. How can I help you today?";

/// Shown when the chatbot query itself fails (transport or HTTP error).
pub const PROCESSING_FALLBACK: &str =
    "I'm sorry, but I'm having trouble processing your request right now. Please try again later.";

/// Shown when a successful response could not be turned into an answer.
pub const KNOWLEDGE_BASE_FALLBACK: &str =
    "I apologize, but I'm having trouble connecting to my knowledge base. Please try again later.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Transcript-ordinal id: length + 1 at append time.
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// Transcript, input buffer, and composing flag for the chatbot page.
///
/// The composing flag doubles as the `awaiting-response` state: it is set by
/// a successful `submit` and cleared by `receive`.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub is_typing: bool,
}

impl ChatState {
    /// Fresh transcript seeded with the bot greeting.
    pub fn new(now_ms: f64) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input: String::new(),
            is_typing: false,
        };
        state.push(GREETING.to_owned(), Sender::Bot, now_ms);
        state
    }

    /// Submit the current input buffer.
    ///
    /// Empty or whitespace-only input is a no-op returning `None`. Otherwise
    /// the trimmed text is appended as a user message, the buffer is cleared,
    /// the composing flag is set, and the query text is returned for the
    /// caller to dispatch.
    pub fn submit(&mut self, now_ms: f64) -> Option<String> {
        let text = self.input.trim().to_owned();
        if text.is_empty() {
            return None;
        }
        self.push(text.clone(), Sender::User, now_ms);
        self.input.clear();
        self.is_typing = true;
        Some(text)
    }

    /// Append a bot message and clear the composing flag.
    pub fn receive(&mut self, text: impl Into<String>, now_ms: f64) {
        self.push(text.into(), Sender::Bot, now_ms);
        self.is_typing = false;
    }

    fn push(&mut self, text: String, sender: Sender, now_ms: f64) {
        let id = u32::try_from(self.messages.len()).unwrap_or(u32::MAX).saturating_add(1);
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: now_ms,
        });
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Map a query failure to the user-facing fallback text.
///
/// Transport and HTTP failures read as a processing problem; a 2xx body that
/// failed to decode reads as a knowledge-base problem. Errors never escape
/// the chat flow as errors.
pub fn fallback_for(err: &ApiError) -> &'static str {
    match err {
        ApiError::Decode(_) => KNOWLEDGE_BASE_FALLBACK,
        _ => PROCESSING_FALLBACK,
    }
}
