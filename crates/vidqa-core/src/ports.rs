//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `vidqa-core` (pure Rust).
//! Implementations live in `vidqa-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use vidqa_types::{api::QueryAnswer, session::ChatSession, Result};

// ─── Persistence Port ────────────────────────────────────────

/// Where chat data lives: a local key-value store or a remote store
/// reached over HTTP. The store is implementation-agnostic — it loads
/// once at startup and saves after every mutating operation.
#[async_trait(?Send)]
pub trait PersistencePort {
    /// Load the full session collection. Nothing stored reads as empty.
    async fn load_all(&self) -> Result<Vec<ChatSession>>;

    /// Replace the stored collection. Best-effort; callers log failures
    /// and never block the UI on them.
    async fn save_all(&self, sessions: &[ChatSession]) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Query Port ──────────────────────────────────────────────

/// One question/answer exchange with the answer-generation backend.
///
/// At most one request is in flight at a time; the input controller
/// enforces that by gating submission on its `processing` flag.
#[async_trait(?Send)]
pub trait QueryPort {
    /// Errors map to the settlement paths: `Unauthenticated` triggers
    /// the notify-and-redirect path, everything else is the generic
    /// failure path.
    async fn ask(&self, question: &str) -> Result<QueryAnswer>;
}
