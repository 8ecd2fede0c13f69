//! Compose panel — the input box and send button.
//!
//! Submission fires on the button or on Enter without a modifier;
//! Shift+Enter falls through to egui's default multiline handling and
//! inserts a literal newline. Both routes go through the same
//! `take_submission` gate, so nothing submits while a request is
//! already in flight.

use egui::{self, RichText};
use crate::state::UiState;
use crate::theme::*;

/// Take the unmodified Enter press, if any. Consuming it here keeps
/// the TextEdit from inserting a newline at the caret; Shift+Enter is
/// left for the TextEdit to handle as a line break.
pub(crate) fn submit_key_pressed(ctx: &egui::Context) -> bool {
    ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter))
}

/// Render the compose box. Returns Some(question) on submission.
pub fn compose_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let editor_id = ui.id().with("compose_editor");
        // Focus from the previous frame; checked before the TextEdit
        // claims this frame's input
        let plain_enter =
            ui.memory(|m| m.has_focus(editor_id)) && submit_key_pressed(ui.ctx());

        let editor = egui::TextEdit::multiline(&mut state.compose_text)
            .id(editor_id)
            .hint_text("Ask about the video library...")
            .desired_rows(1)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(editor);

        let send_enabled = state.can_submit();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(egui::Vec2::new(60.0, 0.0)),
        );

        if plain_enter || send_btn.clicked() {
            submitted = state.take_submission();
            if submitted.is_some() {
                response.request_focus();
            }
        }
    });

    submitted
}
