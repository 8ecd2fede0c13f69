use serde::{Deserialize, Serialize};
use crate::api::{IndexStats, UserProfile};
use crate::message::Citation;
use crate::session::ChatSession;

/// Events flowing from background tasks back to the UI frame loop.
/// The app drains these each frame and applies them to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// The persistence adapter finished the startup load
    SessionsLoaded(Vec<ChatSession>),

    /// The query endpoint answered
    AnswerReceived {
        session_id: String,
        answer: String,
        sources: Vec<Citation>,
    },

    /// The query failed (transport, backend, or timeout)
    QueryFailed { session_id: String },

    /// The query endpoint signalled 401 — notify, then redirect
    Unauthenticated,

    /// The auth backend reported who is signed in (None when nobody is)
    ProfileLoaded(Option<UserProfile>),

    /// Library statistics for the header line
    StatsLoaded(IndexStats),

    /// A transient, non-blocking notification
    Toast(String),
}
