pub mod responder;

use crate::chat::responder::{suggestions, ResponseEngine, SUGGESTED_QUESTIONS};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub use responder::{generate_response, Reply, Topic};

/// Assistant message the transcript opens with.
pub const WELCOME_MESSAGE: &str = "안녕하세요! 👋 포트폴리오에 대해 궁금하신 점을 물어보세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory transcript of the chat widget. The transcript is display state
/// only; replies never depend on earlier turns.
pub struct ChatSession<'a> {
    engine: ResponseEngine<'a>,
    messages: Vec<ChatMessage>,
}

impl<'a> ChatSession<'a> {
    pub fn new(engine: ResponseEngine<'a>) -> Self {
        Self {
            engine,
            messages: vec![ChatMessage::new(Role::Assistant, WELCOME_MESSAGE)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Quick replies, offered only before the first user message.
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        if suggestions::should_offer(self.messages.len()) {
            SUGGESTED_QUESTIONS
        } else {
            &[]
        }
    }

    /// Records the user's message and the assistant's reply. Blank input is
    /// ignored and leaves the transcript untouched.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let reply = self.engine.respond(text);
        self.messages.push(ChatMessage::new(Role::User, text));
        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        self.messages.last()
    }

    /// Sends the suggested question at `index`, exactly as if it were typed.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&ChatMessage> {
        let question = *self.suggested_questions().get(index)?;
        self.send(question)
    }
}

impl Default for ChatSession<'static> {
    fn default() -> Self {
        Self::new(ResponseEngine::builtin())
    }
}
