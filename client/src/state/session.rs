//! Per-tab identity and page configuration.
//!
//! DESIGN
//! ======
//! Identifiers are generated once when the chat page mounts and are passed
//! into every dispatch explicitly. Nothing here outlives the tab.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Same-origin proxy path served by the host.
pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";

/// Identifiers sent with every question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub user_id: String,
    pub session_id: String,
}

impl ChatSession {
    /// Generate fresh identifiers for this tab.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            user_id: format!("user_{}", uuid::Uuid::new_v4().simple()),
            session_id: format!("session_{}", uuid::Uuid::new_v4().simple()),
        }
    }
}

/// Crop context the assistant answers for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Crop {
    #[default]
    Citros,
    CanaDeAcucar,
}

impl Crop {
    pub const ALL: [Crop; 2] = [Crop::Citros, Crop::CanaDeAcucar];

    /// Value sent as the `cultura` query parameter.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Citros => "citros",
            Self::CanaDeAcucar => "cana-de-acucar",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Citros => "Citros",
            Self::CanaDeAcucar => "Cana-de-açúcar",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// How the chat page talks to the answer service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Absolute URL or same-origin path receiving `POST` questions.
    pub endpoint: String,
    /// Show the crop selector and send `cultura` with each question.
    pub context_selector: bool,
}

/// Built from `SB100_CHAT_ENDPOINT` and `SB100_CONTEXT_SELECTOR` at compile
/// time so the server render and the browser bundle agree.
impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(option_env!("SB100_CHAT_ENDPOINT").unwrap_or(DEFAULT_CHAT_ENDPOINT))
            .with_context_selector(selector_enabled(option_env!("SB100_CONTEXT_SELECTOR")))
    }
}

/// Unset means enabled; `0`, `false`, `off` or `no` turn the selector off.
pub(crate) fn selector_enabled(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return true;
    };
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no")
}

impl ChatConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), context_selector: false }
    }

    #[must_use]
    pub fn with_context_selector(mut self, enabled: bool) -> Self {
        self.context_selector = enabled;
        self
    }

    /// Crop to send, or `None` when the page runs without a context selector.
    #[must_use]
    pub fn effective_crop(&self, selected: Crop) -> Option<Crop> {
        self.context_selector.then_some(selected)
    }
}
