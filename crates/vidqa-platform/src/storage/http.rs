//! HTTP-backed persistence adapter.
//! Loads and saves the full session collection via authenticated
//! GET/POST against a fixed resource path. Uses browser `fetch()` via
//! gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use vidqa_core::ports::PersistencePort;
use vidqa_types::{session::ChatSession, ChatError, Result};

const CHATS_PATH: &str = "/chats";

pub struct HttpStore {
    endpoint: String,
}

impl HttpStore {
    pub fn new() -> Self {
        Self {
            endpoint: CHATS_PATH.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl PersistencePort for HttpStore {
    async fn load_all(&self) -> Result<Vec<ChatSession>> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(ChatError::Unauthenticated);
        }
        if !response.ok() {
            return Err(ChatError::Backend {
                status: response.status(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string()),
            });
        }

        response
            .json::<Vec<ChatSession>>()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))
    }

    async fn save_all(&self, sessions: &[ChatSession]) -> Result<()> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&sessions)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Backend {
                status: response.status(),
                message: "save rejected".to_string(),
            });
        }
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
