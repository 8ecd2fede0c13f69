use serde::{Deserialize, Serialize};

/// Who authored a message. Closed set — the transcript only ever
/// contains these two roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation.
///
/// Messages are immutable once appended to a session. Assistant content
/// may carry trusted inline markup; user content is always plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Supporting evidence, present only on assistant messages
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<Citation>,
    /// RFC 3339 creation time
    pub timestamp: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            sources: Vec::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            sources: Vec::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn assistant_with_sources(text: impl Into<String>, sources: Vec<Citation>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            sources,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A reference to a time range of a source video backing an answer.
///
/// `start_time` and `end_time` are offsets in minutes, `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub video_title: String,
    pub video_url: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl Citation {
    /// Deep link into the video at the cited start offset.
    ///
    /// Appends `t=<seconds>s`, respecting an existing query string.
    pub fn deep_link(&self) -> String {
        let seconds = (self.start_time * 60.0).floor() as u64;
        let sep = if self.video_url.contains('?') { '&' } else { '?' };
        format!("{}{}t={}s", self.video_url, sep, seconds)
    }

    /// Human-readable time range, e.g. `[1.50 – 2.00 min]`.
    pub fn range_label(&self) -> String {
        format!("[{:.2} – {:.2} min]", self.start_time, self.end_time)
    }
}
