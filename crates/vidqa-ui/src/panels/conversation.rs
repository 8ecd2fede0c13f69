//! Conversation panel — paints the current session's transcript, the
//! loading placeholder while a request is in flight, and the welcome
//! screen with example prompts for an empty session.

use egui::{self, RichText, ScrollArea};
use vidqa_types::message::Role;
use vidqa_types::session::ChatSession;

use crate::markup::{Block, Span};
use crate::theme::*;
use crate::view::{self, Body, TranscriptEntry};

/// Render the transcript for one session. Returns Some(prompt) when
/// the user activates an example card on the welcome screen.
pub fn conversation_panel(
    ui: &mut egui::Ui,
    session: &ChatSession,
    processing: bool,
    now: f64,
) -> Option<String> {
    let mut picked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if view::show_welcome(session, processing) {
                picked = welcome_screen(ui);
                return;
            }

            for entry in view::transcript(session) {
                render_entry(ui, &entry);
                ui.add_space(4.0);
            }

            if processing {
                loading_placeholder(ui, now);
            }
        });

    picked
}

fn render_entry(ui: &mut egui::Ui, entry: &TranscriptEntry) {
    let badge = match entry.role {
        Role::User => USER_BADGE,
        Role::Assistant => ASSISTANT_BADGE,
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(entry.avatar).color(badge).strong().small());

            match &entry.body {
                // User text is painted verbatim; egui labels never
                // interpret markup, so injected tags stay literal.
                Body::Plain(text) => {
                    ui.label(RichText::new(text).color(TEXT_PRIMARY));
                }
                Body::Markup(blocks) => {
                    for block in blocks {
                        render_block(ui, block);
                    }
                }
            }

            if !entry.citations.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Sources").color(TEXT_SECONDARY).small());
                for (i, citation) in entry.citations.iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            RichText::new(format!("{}.", i + 1))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                        ui.hyperlink_to(&citation.title, &citation.href);
                        ui.hyperlink_to(
                            RichText::new(&citation.range).small(),
                            &citation.href,
                        );
                    });
                }
            }
        });
}

fn render_block(ui: &mut egui::Ui, block: &Block) {
    match block {
        Block::Paragraph(spans) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for span in spans {
                    render_span(ui, span);
                }
            });
        }
        Block::Bullets(items) => {
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(RichText::new("•  ").color(TEXT_SECONDARY));
                    for span in item {
                        render_span(ui, span);
                    }
                });
            }
        }
    }
}

fn render_span(ui: &mut egui::Ui, span: &Span) {
    let mut rich = RichText::new(&span.text).color(TEXT_PRIMARY);
    if span.strong {
        rich = rich.strong();
    }
    match &span.href {
        Some(href) => {
            ui.hyperlink_to(rich, href);
        }
        None => {
            ui.label(rich);
        }
    }
}

fn loading_placeholder(ui: &mut egui::Ui, now: f64) {
    // One transient element, never a Message, never persisted
    let dots = ".".repeat(((now * 2.0) as usize % 3) + 1);
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new("AI").color(ASSISTANT_BADGE).strong().small());
            ui.label(RichText::new(format!("Thinking{}", dots)).color(TEXT_SECONDARY));
        });
    ui.ctx().request_repaint();
}

fn welcome_screen(ui: &mut egui::Ui) -> Option<String> {
    let mut picked = None;

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("Welcome to VidQA").color(TEXT_PRIMARY).strong());
        ui.label(
            RichText::new("Ask questions about the video library").color(TEXT_SECONDARY),
        );
        ui.add_space(16.0);

        for prompt in view::EXAMPLE_PROMPTS {
            let card = egui::Button::new(RichText::new(prompt).color(TEXT_PRIMARY))
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING)
                .min_size(egui::Vec2::new(320.0, 36.0));
            if ui.add(card).clicked() {
                picked = Some(prompt.to_string());
            }
            ui.add_space(6.0);
        }
    });

    picked
}
