//! Pure "compute view model from state" functions.
//!
//! The panels only apply these projections to the screen, which keeps
//! the interesting rendering rules testable without an egui context.

use crate::markup::{parse_markup, Block};
use vidqa_types::message::{Citation, Role};
use vidqa_types::session::ChatSession;

/// Fixed prompts offered by the welcome screen. Activating one fills
/// the compose box and submits as if typed.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "How do companies fool customers?",
    "Who is the oldest human?",
    "Tell me about shrinkflation",
    "What is planned obsolescence?",
];

/// One painted message in the transcript.
pub struct TranscriptEntry {
    pub avatar: &'static str,
    pub role: Role,
    pub body: Body,
    pub citations: Vec<CitationLink>,
}

/// How a message body gets painted.
///
/// User text is untrusted and stays on the plain path — it is never
/// handed to the markup parser, so `<script>` and friends render as
/// the literal characters the user typed.
pub enum Body {
    Plain(String),
    Markup(Vec<Block>),
}

/// A clickable citation row beneath an assistant message.
pub struct CitationLink {
    pub title: String,
    pub range: String,
    pub href: String,
}

/// Project a session's message list into paintable entries, in
/// conversation order.
pub fn transcript(session: &ChatSession) -> Vec<TranscriptEntry> {
    session
        .messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => TranscriptEntry {
                avatar: "U",
                role: Role::User,
                body: Body::Plain(msg.content.clone()),
                citations: Vec::new(),
            },
            Role::Assistant => TranscriptEntry {
                avatar: "AI",
                role: Role::Assistant,
                body: Body::Markup(parse_markup(&msg.content)),
                citations: msg.sources.iter().map(citation_link).collect(),
            },
        })
        .collect()
}

fn citation_link(citation: &Citation) -> CitationLink {
    CitationLink {
        title: citation.video_title.clone(),
        range: citation.range_label(),
        href: citation.deep_link(),
    }
}

/// Whether the welcome screen (rather than a transcript) should show.
pub fn show_welcome(session: &ChatSession, processing: bool) -> bool {
    session.messages.is_empty() && !processing
}
