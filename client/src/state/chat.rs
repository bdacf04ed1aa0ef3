//! Conversation state: the ordered list of chat turns.
//!
//! DESIGN
//! ======
//! Turns are never edited in place. The only removal is dropping the
//! loading placeholder when the answer (or the error) for the in-flight
//! question arrives, so at most one placeholder exists at a time as long as
//! the input stays disabled while `has_pending()` is true.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// First assistant turn shown on every page load.
pub const WELCOME_MESSAGE: &str = "Olá! Sou o Sb100, seu assistente especializado em agricultura e \
fertilização do solo. Como posso ajudá-lo hoje? Posso responder perguntas sobre análise de solo, \
correção de pH, adubação, manejo de nutrientes e muito mais!";

/// Assistant turn appended when an exchange fails.
pub const ERROR_MESSAGE: &str =
    "Desculpe, ocorreu um erro ao processar sua mensagem. Tente novamente mais tarde.";

/// Author of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    pub is_loading: bool,
}

impl Message {
    fn new(role: Role, content: String, timestamp: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), content, role, timestamp, is_loading: false }
    }
}

/// State for the conversation column.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<Message>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::with_welcome(0.0)
    }
}

impl ChatState {
    /// Start a conversation seeded with the assistant's welcome turn.
    #[must_use]
    pub fn with_welcome(now: f64) -> Self {
        let welcome = Message {
            id: "welcome".to_owned(),
            content: WELCOME_MESSAGE.to_owned(),
            role: Role::Assistant,
            timestamp: now,
            is_loading: false,
        };
        Self { messages: vec![welcome] }
    }

    /// Append the user's question.
    pub fn append_user_turn(&mut self, text: &str, now: f64) {
        self.messages.push(Message::new(Role::User, text.to_owned(), now));
    }

    /// Append the "thinking" placeholder for the request about to be sent.
    pub fn append_loading_placeholder(&mut self, now: f64) {
        let mut placeholder = Message::new(Role::Assistant, String::new(), now);
        placeholder.is_loading = true;
        self.messages.push(placeholder);
    }

    /// Replace the loading placeholder with the assistant's answer.
    pub fn resolve_loading(&mut self, answer_text: &str, now: f64) {
        self.drop_loading();
        self.messages.push(Message::new(Role::Assistant, answer_text.to_owned(), now));
    }

    /// Replace the loading placeholder with the fixed error turn.
    pub fn resolve_loading_with_error(&mut self, now: f64) {
        self.resolve_loading(ERROR_MESSAGE, now);
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.messages.iter().any(|m| m.is_loading)
    }

    /// True until the user sends the first question.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }

    fn drop_loading(&mut self) {
        self.messages.retain(|m| !m.is_loading);
    }
}
