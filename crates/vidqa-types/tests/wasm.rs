//! WASM-target tests for vidqa-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use vidqa_types::api::*;
use vidqa_types::error::*;
use vidqa_types::message::*;
use vidqa_types::session::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert!(msg.sources.is_empty());
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = Message::assistant("I can help");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "I can help");
}

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        r#""assistant""#
    );
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = Message::user("test input");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::User);
    assert_eq!(deserialized.content, "test input");
}

// ─── Citation Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn deep_link_with_existing_query() {
    let citation = Citation {
        video_title: "t".to_string(),
        video_url: "https://x/v?id=1".to_string(),
        start_time: 1.5,
        end_time: 2.0,
    };
    assert_eq!(citation.deep_link(), "https://x/v?id=1&t=90s");
}

#[wasm_bindgen_test]
fn deep_link_without_query() {
    let citation = Citation {
        video_title: "t".to_string(),
        video_url: "https://x/v".to_string(),
        start_time: 2.0,
        end_time: 3.0,
    };
    assert_eq!(citation.deep_link(), "https://x/v?t=120s");
}

// ─── Session Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn session_new() {
    let session = ChatSession::new();
    assert!(!session.id.is_empty());
    assert_eq!(session.title, DEFAULT_TITLE);
    assert!(session.messages.is_empty());
    assert!(!session.title_edited);
}

#[wasm_bindgen_test]
fn session_serialization() {
    let session = ChatSession::new();
    let json = serde_json::to_string(&session).unwrap();
    let deserialized: ChatSession = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.id, session.id);
    assert_eq!(deserialized.title, DEFAULT_TITLE);
}

#[wasm_bindgen_test]
fn derive_title_truncates() {
    let question = "What is shrinkflation and why does it matter to consumers?";
    assert_eq!(derive_title(question), "What is shrinkflation and why ...");
}

// ─── API Wire Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn query_answer_deserialization() {
    let json = r#"{"answer": "hi", "sources": []}"#;
    let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.answer, "hi");
    assert!(parsed.sources.is_empty());
}

#[wasm_bindgen_test]
fn index_stats_deserialization() {
    let json = r#"{"total_videos": 12, "total_chunks": 3400}"#;
    let stats: IndexStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_videos, 12);
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    assert_eq!(
        ChatError::Network("unreachable".to_string()).to_string(),
        "Network error: unreachable"
    );
    assert_eq!(ChatError::Unauthenticated.to_string(), "Not authenticated");
}
