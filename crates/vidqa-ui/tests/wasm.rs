//! WASM-target tests for vidqa-ui.
//!
//! Runs the markup parser, view-model, and UI-state tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use vidqa_types::message::Message;
use vidqa_types::session::ChatSession;
use vidqa_ui::markup::{parse_markup, Block};
use vidqa_ui::state::{UiState, TOAST_SECONDS};
use vidqa_ui::view::{show_welcome, transcript, Body};

fn paragraph_text(block: &Block) -> String {
    match block {
        Block::Paragraph(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        other => panic!("unexpected block: {:?}", other),
    }
}

// ─── Markup Parser Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn parse_paragraphs() {
    let blocks = parse_markup("<p>first</p><p>second</p>");
    assert_eq!(blocks.len(), 2);
    assert_eq!(paragraph_text(&blocks[0]), "first");
    assert_eq!(paragraph_text(&blocks[1]), "second");
}

#[wasm_bindgen_test]
fn parse_link_extracts_href() {
    let blocks = parse_markup(r#"<a href="https://y/w?v=x">watch</a>"#);
    let Block::Paragraph(spans) = &blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(spans[0].href.as_deref(), Some("https://y/w?v=x"));
}

#[wasm_bindgen_test]
fn parse_bullets() {
    let blocks = parse_markup("<ul><li>one</li><li>two</li></ul>");
    assert!(matches!(&blocks[0], Block::Bullets(items) if items.len() == 2));
}

#[wasm_bindgen_test]
fn bare_ampersand_survives() {
    let blocks = parse_markup("t=90s&x=1");
    assert_eq!(paragraph_text(&blocks[0]), "t=90s&x=1");
}

// ─── View Model Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn user_script_tag_stays_literal() {
    let mut session = ChatSession::new();
    session
        .messages
        .push(Message::user("<script>alert('x')</script>"));

    let entries = transcript(&session);
    assert!(matches!(
        &entries[0].body,
        Body::Plain(text) if text == "<script>alert('x')</script>"
    ));
}

#[wasm_bindgen_test]
fn welcome_shows_only_for_empty_idle_session() {
    let session = ChatSession::new();
    assert!(show_welcome(&session, false));
    assert!(!show_welcome(&session, true));
}

// ─── UI State Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn second_submission_rejected_while_processing() {
    let mut state = UiState::new();
    state.compose_text = "first".to_string();
    assert!(state.take_submission().is_some());

    state.compose_text = "second".to_string();
    assert!(state.take_submission().is_none());

    state.settle();
    assert!(state.take_submission().is_some());
}

#[wasm_bindgen_test]
fn toast_visible_then_expires() {
    let mut state = UiState::new();
    state.show_toast("Link copied!", 10.0);
    assert_eq!(state.active_toast(10.1), Some("Link copied!"));
    assert_eq!(state.active_toast(10.0 + TOAST_SECONDS + 0.1), None);
}
