//! localStorage persistence backend.
//! The whole session collection lives under one fixed namespace key as
//! a JSON array. Durable across page reloads in all browsers.

use async_trait::async_trait;
use vidqa_core::ports::PersistencePort;
use vidqa_types::{session::ChatSession, ChatError, Result};
use web_sys::Storage;

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    /// Open the backend, verifying localStorage is actually reachable
    /// (it is absent in workers and can be disabled by the browser).
    pub fn open(namespace: impl Into<String>) -> Result<Self> {
        backing()?;
        Ok(Self {
            key: namespace.into(),
        })
    }
}

fn backing() -> Result<Storage> {
    let window =
        web_sys::window().ok_or_else(|| ChatError::Storage("No window object".to_string()))?;
    window
        .local_storage()
        .map_err(|e| ChatError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))
}

#[async_trait(?Send)]
impl PersistencePort for LocalStorageStore {
    async fn load_all(&self) -> Result<Vec<ChatSession>> {
        let storage = backing()?;
        let stored = storage
            .get_item(&self.key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;

        let Some(json) = stored else {
            return Ok(Vec::new());
        };

        // A corrupt payload reads as an empty collection rather than
        // taking the whole client down.
        match serde_json::from_str(&json) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                log::warn!("discarding corrupt session payload under {}: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_all(&self, sessions: &[ChatSession]) -> Result<()> {
        let storage = backing()?;
        let json = serde_json::to_string(sessions)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
