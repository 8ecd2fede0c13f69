//! The session store — in-memory authoritative collection of chat
//! sessions plus the "current session" pointer.
//!
//! All mutations flow through here. The store is the source of truth
//! for the page lifetime; durable storage is a write-behind cache.
//! Mutating operations raise the dirty flag, and the app schedules one
//! fire-and-forget `save_all` per dirtied frame. A save can still be
//! pending when the page unloads — that loss window is accepted.

use vidqa_types::message::{Message, Role};
use vidqa_types::session::{derive_title, ChatSession, UNTITLED};

pub struct SessionStore {
    sessions: Vec<ChatSession>,
    current_id: String,
    dirty: bool,
}

impl SessionStore {
    /// A store is never empty: construction synthesizes a first session.
    /// The synthesized session is not dirty — scheduling a save before
    /// the startup load settles would overwrite the stored history with
    /// the lone "New Chat". It persists with the first real mutation.
    pub fn new() -> Self {
        let session = ChatSession::new();
        let current_id = session.id.clone();
        Self {
            sessions: vec![session],
            current_id,
            dirty: false,
        }
    }

    /// Fold in the collection the persistence adapter loaded at
    /// startup. Empty loads are ignored — the synthesized session
    /// stays. Sessions mutated before the load settled (a question the
    /// user already typed, a rename) survive it: they stay at the
    /// front of the loaded collection and the merge is scheduled for
    /// saving. A pristine adoption does not re-persist what was just
    /// read.
    pub fn adopt(&mut self, loaded: Vec<ChatSession>) {
        if loaded.is_empty() {
            return;
        }
        let mut merged: Vec<ChatSession> = std::mem::take(&mut self.sessions)
            .into_iter()
            .filter(|s| !s.messages.is_empty() || s.title_edited)
            .collect();
        let pristine = merged.is_empty();
        let current_kept = merged.iter().any(|s| s.id == self.current_id);

        merged.extend(loaded);
        self.sessions = merged;
        if !current_kept {
            self.current_id = self.sessions[0].id.clone();
        }
        self.dirty = !pristine;
    }

    // ─── Operations ──────────────────────────────────────────

    /// Create a fresh session at the front (most-recent-first) and make
    /// it current. Always succeeds.
    pub fn create_session(&mut self) -> &ChatSession {
        let session = ChatSession::new();
        self.current_id = session.id.clone();
        self.sessions.insert(0, session);
        self.dirty = true;
        &self.sessions[0]
    }

    /// Switch the current session. Missing ids are a logged no-op.
    /// Selection repaints from existing messages; nothing is re-persisted.
    pub fn select_session(&mut self, id: &str) -> bool {
        if self.sessions.iter().any(|s| s.id == id) {
            self.current_id = id.to_string();
            true
        } else {
            log::warn!("select_session: no session with id {}", id);
            false
        }
    }

    /// Rename a session, trimming the input and substituting the
    /// fallback literal for all-whitespace values. Renaming suppresses
    /// any later auto-derivation for that session.
    pub fn rename_session(&mut self, id: &str, new_title: &str) -> bool {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            log::warn!("rename_session: no session with id {}", id);
            return false;
        };
        let trimmed = new_title.trim();
        session.title = if trimmed.is_empty() {
            UNTITLED.to_string()
        } else {
            trimmed.to_string()
        };
        session.title_edited = true;
        self.dirty = true;
        true
    }

    /// Remove a session. Deleting the current session promotes the new
    /// first session, or synthesizes a fresh one so the store is never
    /// left without a current session.
    pub fn delete_session(&mut self, id: &str) {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() == before {
            log::warn!("delete_session: no session with id {}", id);
            return;
        }
        self.dirty = true;

        if self.current_id == id {
            match self.sessions.first() {
                Some(first) => self.current_id = first.id.clone(),
                None => {
                    self.create_session();
                }
            }
        }
    }

    /// Append a message to the named session. The first user message
    /// derives the session title exactly once, unless a user rename
    /// already fixed it.
    pub fn append_message(&mut self, session_id: &str, message: Message) -> bool {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) else {
            log::warn!("append_message: no session with id {}", session_id);
            return false;
        };

        let derive = message.role == Role::User
            && !session.title_edited
            && !session.messages.iter().any(|m| m.role == Role::User);
        if derive {
            session.title = derive_title(&message.content);
        }

        session.messages.push(message);
        self.dirty = true;
        true
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn current(&self) -> &ChatSession {
        // Invariant: current_id always names an existing session
        self.sessions
            .iter()
            .find(|s| s.id == self.current_id)
            .unwrap_or(&self.sessions[0])
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Drain the write-behind flag. True means a save should be
    /// scheduled for the collection as it stands now.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
