//! UI-level state that drives rendering: the compose box, the
//! in-flight flag, the open context menu, a pending rename edit, and
//! the transient toast. All of it is page-lifetime only — nothing in
//! here is persisted.

use vidqa_types::api::{IndexStats, UserProfile};

/// How long a toast stays on screen.
pub const TOAST_SECONDS: f64 = 2.5;

pub struct UiState {
    /// Compose box contents
    pub compose_text: String,
    /// True between submission and settlement; gates further submits
    /// and keeps the single loading placeholder visible
    pub processing: bool,
    /// Session id whose context menu is open, if any (at most one)
    pub menu_open: Option<String>,
    /// In-progress rename edit, if any
    pub rename: Option<RenameEdit>,
    toast: Option<Toast>,
    /// Header signals from the backend
    pub profile: Option<UserProfile>,
    pub stats: Option<IndexStats>,
}

pub struct RenameEdit {
    pub session_id: String,
    pub buffer: String,
    /// Focus is stolen once when the editor appears, then left alone
    /// so losing it can commit the edit
    pub focus_requested: bool,
}

struct Toast {
    text: String,
    expires_at: f64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            compose_text: String::new(),
            processing: false,
            menu_open: None,
            rename: None,
            toast: None,
            profile: None,
            stats: None,
        }
    }

    /// Submission gate: non-empty after trimming AND not processing.
    pub fn can_submit(&self) -> bool {
        !self.compose_text.trim().is_empty() && !self.processing
    }

    /// Take the composed question if submission is permitted.
    ///
    /// Clears and resets the compose box and flips `processing`, so a
    /// second call before settlement returns None — concurrent
    /// submissions are rejected here, not queued.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let question = self.compose_text.trim().to_string();
        self.compose_text.clear();
        self.processing = true;
        Some(question)
    }

    /// Settle the in-flight request: removes the loading placeholder
    /// and re-enables submission. Runs unconditionally for every
    /// outcome, including the unauthenticated redirect path.
    pub fn settle(&mut self) {
        self.processing = false;
    }

    // ─── Context menu / rename ───────────────────────────────

    /// Open one session's menu; any other open menu closes.
    pub fn toggle_menu(&mut self, session_id: &str) {
        if self.menu_open.as_deref() == Some(session_id) {
            self.menu_open = None;
        } else {
            self.menu_open = Some(session_id.to_string());
        }
    }

    pub fn close_menus(&mut self) {
        self.menu_open = None;
    }

    pub fn begin_rename(&mut self, session_id: &str, current_title: &str) {
        self.rename = Some(RenameEdit {
            session_id: session_id.to_string(),
            buffer: current_title.to_string(),
            focus_requested: false,
        });
        self.menu_open = None;
    }

    /// Discard an in-progress edit; the list repaints read-only.
    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Take the edit for committing through the store's rename rule.
    pub fn take_rename(&mut self) -> Option<RenameEdit> {
        self.rename.take()
    }

    // ─── Toast ───────────────────────────────────────────────

    pub fn show_toast(&mut self, text: impl Into<String>, now: f64) {
        self.toast = Some(Toast {
            text: text.into(),
            expires_at: now + TOAST_SECONDS,
        });
    }

    /// Current toast text, dropping it once its time is up.
    pub fn active_toast(&mut self, now: f64) -> Option<&str> {
        if let Some(toast) = &self.toast {
            if toast.expires_at <= now {
                self.toast = None;
            }
        }
        self.toast.as_ref().map(|t| t.text.as_str())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
