use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Title given to a session until the first user message derives one.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Title substituted when a rename commits an all-whitespace value.
pub const UNTITLED: &str = "Untitled Chat";

/// Longest derived title before the continuation marker kicks in.
pub const TITLE_MAX_CHARS: usize = 30;

/// One conversation thread with its own message history and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: String,
    /// Set once the user renames the session; suppresses auto-derivation.
    /// Defaulted so collections saved before this field existed still load.
    #[serde(default)]
    pub title_edited: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
            title_edited: false,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a display title from the first user message.
pub fn derive_title(first_message: &str) -> String {
    let mut title: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
    if first_message.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}
