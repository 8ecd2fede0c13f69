//! Wire types for the backend boundary: the `/query` answer payload,
//! the `/api/user` profile signal, and the `/stats` counters.

use serde::{Deserialize, Serialize};
use crate::message::Citation;

/// Successful response body from `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Citation>,
}

/// Current user as reported by `GET /api/user`.
/// Consumed only to decide what the header shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Best display string for the header.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Signed in")
    }
}

/// Library statistics from `GET /stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_videos: u64,
    pub total_chunks: u64,
}
