//! The request/response lifecycle for one user question.
//!
//! The user message is already appended and persisted before this runs;
//! this half owns settlement only. Each outcome maps to exactly one
//! event so the UI can remove the loading placeholder and reset its
//! `processing` flag unconditionally:
//!
//! - answer   → `AnswerReceived` (assistant message with citations)
//! - 401      → `Unauthenticated` (no assistant message; notify + redirect)
//! - anything else, including timeout → `QueryFailed` (fallback message)

use crate::event_bus::EventBus;
use crate::ports::QueryPort;
use vidqa_types::event::ChatEvent;
use vidqa_types::ChatError;

/// Literal shown in place of an answer when the exchange fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Ask the backend one question and emit the settlement event.
///
/// Spawned via `wasm_bindgen_futures::spawn_local`; never blocks the UI.
pub async fn run_query(query: &dyn QueryPort, bus: &EventBus, session_id: String, question: String) {
    match query.ask(&question).await {
        Ok(reply) => {
            bus.emit(ChatEvent::AnswerReceived {
                session_id,
                answer: reply.answer,
                sources: reply.sources,
            });
        }
        Err(ChatError::Unauthenticated) => {
            log::info!("query rejected: not authenticated");
            bus.emit(ChatEvent::Unauthenticated);
        }
        Err(e) => {
            log::warn!("query failed: {}", e);
            bus.emit(ChatEvent::QueryFailed { session_id });
        }
    }
}
