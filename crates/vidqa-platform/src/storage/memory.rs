//! In-memory persistence backend.
//! Fastest option but not durable across page reloads; used in tests
//! and as the last-resort fallback when localStorage is unavailable.

use async_trait::async_trait;
use std::cell::RefCell;
use vidqa_core::ports::PersistencePort;
use vidqa_types::{session::ChatSession, Result};

pub struct MemoryStore {
    sessions: RefCell<Vec<ChatSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sessions: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl PersistencePort for MemoryStore {
    async fn load_all(&self) -> Result<Vec<ChatSession>> {
        Ok(self.sessions.borrow().clone())
    }

    async fn save_all(&self, sessions: &[ChatSession]) -> Result<()> {
        *self.sessions.borrow_mut() = sessions.to_vec();
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
