//! WASM-target tests for vidqa-core.
//!
//! Runs EventBus, SessionStore, and query-exchange tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use async_trait::async_trait;
use std::cell::RefCell;

use vidqa_core::event_bus::EventBus;
use vidqa_core::exchange::{run_query, FALLBACK_MESSAGE};
use vidqa_core::ports::QueryPort;
use vidqa_core::store::SessionStore;
use vidqa_types::api::QueryAnswer;
use vidqa_types::event::ChatEvent;
use vidqa_types::message::Message;
use vidqa_types::session::{ChatSession, DEFAULT_TITLE, UNTITLED};
use vidqa_types::ChatError;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(ChatEvent::Unauthenticated);
    bus.emit(ChatEvent::Toast("copied".to_string()));

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn event_bus_clone_shares_state() {
    let bus1 = EventBus::new();
    let bus2 = bus1.clone();
    bus1.emit(ChatEvent::Unauthenticated);
    assert_eq!(bus2.drain().len(), 1);
}

// ─── SessionStore Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn store_never_starts_empty() {
    let store = SessionStore::new();
    assert_eq!(store.sessions().len(), 1);
    assert_eq!(store.current().title, DEFAULT_TITLE);
}

#[wasm_bindgen_test]
fn store_starts_clean() {
    let mut store = SessionStore::new();
    assert!(!store.take_dirty());
}

#[wasm_bindgen_test]
fn first_user_message_derives_title() {
    let mut store = SessionStore::new();
    let id = store.current_id().to_string();
    let question = "What is shrinkflation and why does it matter to consumers?";
    store.append_message(&id, Message::user(question));
    assert_eq!(store.current().title, "What is shrinkflation and why ...");
}

#[wasm_bindgen_test]
fn rename_whitespace_falls_back_to_untitled() {
    let mut store = SessionStore::new();
    let id = store.current_id().to_string();
    store.rename_session(&id, "   ");
    assert_eq!(store.current().title, UNTITLED);
}

#[wasm_bindgen_test]
fn delete_last_session_synthesizes_fresh_one() {
    let mut store = SessionStore::new();
    let id = store.current_id().to_string();
    store.delete_session(&id);
    assert_eq!(store.sessions().len(), 1);
    assert_ne!(store.current_id(), id);
}

#[wasm_bindgen_test]
fn adopt_keeps_session_mutated_before_load_settled() {
    let mut store = SessionStore::new();
    let typed_id = store.current_id().to_string();
    store.append_message(&typed_id, Message::user("typed before load settled"));

    store.adopt(vec![ChatSession::new()]);

    assert_eq!(store.sessions().len(), 2);
    assert_eq!(store.current_id(), typed_id);
    assert_eq!(
        store.current().messages[0].content,
        "typed before load settled"
    );
}

// ─── Query Exchange Tests ────────────────────────────────

struct MockQuery {
    outcome: vidqa_types::Result<QueryAnswer>,
    calls: RefCell<usize>,
}

#[async_trait(?Send)]
impl QueryPort for MockQuery {
    async fn ask(&self, _question: &str) -> vidqa_types::Result<QueryAnswer> {
        *self.calls.borrow_mut() += 1;
        self.outcome.clone()
    }
}

#[wasm_bindgen_test]
async fn exchange_success_emits_answer() {
    let bus = EventBus::new();
    let query = MockQuery {
        outcome: Ok(QueryAnswer {
            answer: "<p>It shrinks.</p>".to_string(),
            sources: vec![],
        }),
        calls: Default::default(),
    };

    run_query(&query, &bus, "s1".to_string(), "what?".to_string()).await;

    let events = bus.drain();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        ChatEvent::AnswerReceived { session_id, .. } if session_id == "s1"
    ));
    assert_eq!(*query.calls.borrow(), 1);
}

#[wasm_bindgen_test]
async fn exchange_failure_emits_query_failed() {
    let bus = EventBus::new();
    let query = MockQuery {
        outcome: Err(ChatError::Network("unreachable".to_string())),
        calls: Default::default(),
    };

    run_query(&query, &bus, "s1".to_string(), "what?".to_string()).await;

    assert!(matches!(
        bus.drain().as_slice(),
        [ChatEvent::QueryFailed { .. }]
    ));
}

#[wasm_bindgen_test]
async fn exchange_unauthenticated_is_distinct() {
    let bus = EventBus::new();
    let query = MockQuery {
        outcome: Err(ChatError::Unauthenticated),
        calls: Default::default(),
    };

    run_query(&query, &bus, "s1".to_string(), "what?".to_string()).await;

    let events = bus.drain();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ChatEvent::Unauthenticated));
}

#[wasm_bindgen_test]
fn fallback_message_is_the_known_literal() {
    assert_eq!(FALLBACK_MESSAGE, "Sorry, I encountered an error. Please try again.");
}
