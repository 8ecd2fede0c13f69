//! Session list panel — selectable history with per-entry context
//! actions (rename, share, delete) and the "New chat" button.
//!
//! Immediate mode means at most one action surfaces per frame; the
//! caller routes it through the session store.

use egui::{self, Align, Layout, RichText, ScrollArea};
use vidqa_types::session::ChatSession;

use crate::state::UiState;
use crate::theme::*;

/// What the user asked the store to do this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    Create,
    Select(String),
    Rename { id: String, title: String },
    Share(String),
    Delete(String),
}

pub fn sidebar_panel(
    ui: &mut egui::Ui,
    sessions: &[ChatSession],
    current_id: &str,
    state: &mut UiState,
) -> Option<SidebarAction> {
    let mut action = None;

    ui.add_space(4.0);
    let new_chat = egui::Button::new(RichText::new("+  New chat").color(TEXT_PRIMARY))
        .fill(ACCENT)
        .corner_radius(PANEL_ROUNDING)
        .min_size(egui::Vec2::new(ui.available_width(), 30.0));
    if ui.add(new_chat).clicked() {
        state.close_menus();
        action = Some(SidebarAction::Create);
    }
    ui.add_space(8.0);

    let open_before = state.menu_open.clone();
    let mut open_entry_rect = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for session in sessions {
                if let Some(a) = session_entry(ui, session, current_id, state, &mut open_entry_rect)
                {
                    action = Some(a);
                }
            }
        });

    // A press anywhere outside the open menu's entry closes it; this
    // covers clicks in the other panels too, since input is global.
    // A menu opened or switched this frame is left alone — the press
    // that opened it must not immediately close it.
    if state.menu_open.is_some() && state.menu_open == open_before {
        let pressed = ui.input(|i| i.pointer.any_pressed());
        let press_pos = ui.input(|i| i.pointer.interact_pos());
        if should_close_menus(pressed, press_pos, open_entry_rect) {
            state.close_menus();
        }
    }

    action
}

/// Close rule for the open context menu: a press whose position falls
/// outside the menu's own entry closes it.
pub(crate) fn should_close_menus(
    pressed: bool,
    press_pos: Option<egui::Pos2>,
    open_entry_rect: Option<egui::Rect>,
) -> bool {
    if !pressed {
        return false;
    }
    match (press_pos, open_entry_rect) {
        (Some(pos), Some(rect)) => !rect.contains(pos),
        _ => true,
    }
}

fn session_entry(
    ui: &mut egui::Ui,
    session: &ChatSession,
    current_id: &str,
    state: &mut UiState,
    open_entry_rect: &mut Option<egui::Rect>,
) -> Option<SidebarAction> {
    let mut action = None;
    let is_current = session.id == current_id;
    let renaming = state
        .rename
        .as_ref()
        .is_some_and(|r| r.session_id == session.id);

    let fill = if is_current { BG_SURFACE } else { BG_SECONDARY };
    let frame = egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if renaming {
                    action = rename_editor(ui, state);
                    return;
                }

                let title = ui.add(
                    egui::Label::new(
                        RichText::new(&session.title)
                            .color(if is_current { TEXT_PRIMARY } else { TEXT_SECONDARY })
                            .small(),
                    )
                    .truncate()
                    .sense(egui::Sense::click()),
                );
                if title.clicked() {
                    state.close_menus();
                    action = Some(SidebarAction::Select(session.id.clone()));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .small_button(RichText::new("⋯").color(TEXT_SECONDARY))
                        .clicked()
                    {
                        // Opening one menu closes any other
                        state.toggle_menu(&session.id);
                    }
                });
            });

            if state.menu_open.as_deref() == Some(session.id.as_str()) {
                ui.horizontal(|ui| {
                    if ui.small_button("Rename").clicked() {
                        state.begin_rename(&session.id, &session.title);
                    }
                    if ui.small_button("Share").clicked() {
                        state.close_menus();
                        action = Some(SidebarAction::Share(session.id.clone()));
                    }
                    // No confirmation step
                    if ui
                        .small_button(RichText::new("Delete").color(ERROR))
                        .clicked()
                    {
                        state.close_menus();
                        action = Some(SidebarAction::Delete(session.id.clone()));
                    }
                });
            }
        });
    if state.menu_open.as_deref() == Some(session.id.as_str()) {
        *open_entry_rect = Some(frame.response.rect);
    }
    ui.add_space(2.0);

    action
}

fn rename_editor(ui: &mut egui::Ui, state: &mut UiState) -> Option<SidebarAction> {
    let Some(edit) = state.rename.as_mut() else {
        return None;
    };

    let response = ui.add(
        egui::TextEdit::singleline(&mut edit.buffer)
            .desired_width(ui.available_width())
            .font(egui::FontId::proportional(12.0)),
    );
    if !edit.focus_requested {
        response.request_focus();
        edit.focus_requested = true;
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        // Explicit cancel discards the edit, never merges it
        state.cancel_rename();
        return None;
    }

    let commit = ui.input(|i| i.key_pressed(egui::Key::Enter)) || response.lost_focus();
    if commit {
        let edit = state.take_rename()?;
        return Some(SidebarAction::Rename {
            id: edit.session_id,
            title: edit.buffer,
        });
    }

    None
}
