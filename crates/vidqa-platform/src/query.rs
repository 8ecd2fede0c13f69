//! HTTP query client for the answer-generation backend.
//!
//! One `POST /query` per question. Uses browser `fetch()` via gloo-net
//! for WASM compatibility, raced against a bounded timeout so an
//! unresponsive backend settles as a failure instead of leaving the
//! input controller stuck in `processing`.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::json;

use vidqa_core::ports::QueryPort;
use vidqa_types::{
    api::{IndexStats, QueryAnswer},
    config::QueryConfig,
    ChatError, Result,
};

pub struct HttpQueryClient {
    config: QueryConfig,
}

impl HttpQueryClient {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    async fn send(&self, question: &str) -> Result<QueryAnswer> {
        let body = json!({ "question": question });

        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(ChatError::Unauthenticated);
        }

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Backend { status, message });
        }

        response
            .json::<QueryAnswer>()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))
    }
}

#[async_trait(?Send)]
impl QueryPort for HttpQueryClient {
    async fn ask(&self, question: &str) -> Result<QueryAnswer> {
        let timeout_ms = self.config.timeout_ms;
        let request = self.send(question);
        futures::pin_mut!(request);

        match select(request, TimeoutFuture::new(timeout_ms)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ChatError::Timeout(timeout_ms)),
        }
    }
}

/// Fetch library statistics for the header line.
/// Best-effort; the caller logs failures and shows nothing.
pub async fn fetch_stats(config: &QueryConfig) -> Result<IndexStats> {
    let response = Request::get(&config.stats_endpoint)
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ChatError::Backend {
            status: response.status(),
            message: "stats unavailable".to_string(),
        });
    }

    response
        .json::<IndexStats>()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))
}
