//! Main egui application — composes the panels and owns the frame loop.
//!
//! Each frame: drain background events into the store and UI state,
//! paint the panels, route their actions, then flush any dirty session
//! data to storage in the background.

use std::rc::Rc;

use egui::{self, Align, CentralPanel, Layout, RichText, SidePanel, TopBottomPanel};

use vidqa_core::event_bus::EventBus;
use vidqa_core::exchange::{self, FALLBACK_MESSAGE};
use vidqa_core::ports::{PersistencePort, QueryPort};
use vidqa_core::store::SessionStore;
use vidqa_platform::query::{self, HttpQueryClient};
use vidqa_platform::storage::auto_detect_storage;
use vidqa_platform::{auth, clipboard};
use vidqa_types::config::{AppConfig, QueryConfig};
use vidqa_types::event::ChatEvent;
use vidqa_types::message::Message;
use vidqa_types::ChatError;
use vidqa_ui::panels::compose::compose_panel;
use vidqa_ui::panels::conversation::conversation_panel;
use vidqa_ui::panels::sidebar::{sidebar_panel, SidebarAction};
use vidqa_ui::state::UiState;
use vidqa_ui::theme;

/// The main application state
pub struct ChatApp {
    store: SessionStore,
    ui_state: UiState,
    config: AppConfig,
    bus: EventBus,
    persistence: Rc<dyn PersistencePort>,
    query: Rc<dyn QueryPort>,
    /// Frame time at which the deferred login redirect fires
    redirect_at: Option<f64>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let bus = EventBus::new();

        let persistence = auto_detect_storage(&config.storage);
        log::info!("Storage backend: {}", persistence.backend_name());
        let query: Rc<dyn QueryPort> = Rc::new(HttpQueryClient::new(config.query.clone()));

        Self::load_sessions(persistence.clone(), bus.clone());
        Self::load_profile(config.auth.profile_endpoint.clone(), bus.clone());
        Self::load_stats(config.query.clone(), bus.clone());

        Self {
            store: SessionStore::new(),
            ui_state: UiState::new(),
            config,
            bus,
            persistence,
            query,
            redirect_at: None,
            first_frame: true,
        }
    }

    /// Startup load (async). Until it lands the store shows the one
    /// synthesized session; `adopt` folds the loaded collection in,
    /// keeping anything the user mutated in the meantime.
    fn load_sessions(persistence: Rc<dyn PersistencePort>, bus: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            match persistence.load_all().await {
                Ok(sessions) => bus.emit(ChatEvent::SessionsLoaded(sessions)),
                Err(ChatError::Unauthenticated) => bus.emit(ChatEvent::Unauthenticated),
                Err(e) => log::warn!("Loading stored chats failed: {}", e),
            }
        });
    }

    fn load_profile(endpoint: String, bus: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            match auth::fetch_profile(&endpoint).await {
                Ok(profile) => bus.emit(ChatEvent::ProfileLoaded(profile)),
                Err(e) => log::warn!("Profile probe failed: {}", e),
            }
        });
    }

    fn load_stats(config: QueryConfig, bus: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            match query::fetch_stats(&config).await {
                Ok(stats) => bus.emit(ChatEvent::StatsLoaded(stats)),
                Err(e) => log::warn!("Stats fetch failed: {}", e),
            }
        });
    }

    fn apply_event(&mut self, event: ChatEvent, now: f64) {
        match event {
            ChatEvent::SessionsLoaded(sessions) => self.store.adopt(sessions),
            ChatEvent::AnswerReceived {
                session_id,
                answer,
                sources,
            } => {
                self.store.append_message(
                    &session_id,
                    Message::assistant_with_sources(answer, sources),
                );
                self.ui_state.settle();
            }
            ChatEvent::QueryFailed { session_id } => {
                self.store
                    .append_message(&session_id, Message::assistant(FALLBACK_MESSAGE));
                self.ui_state.settle();
            }
            ChatEvent::Unauthenticated => {
                self.ui_state.settle();
                self.ui_state
                    .show_toast("Signed out. Redirecting to login...", now);
                let delay = f64::from(self.config.auth.redirect_delay_ms) / 1000.0;
                self.redirect_at = Some(now + delay);
            }
            ChatEvent::ProfileLoaded(profile) => self.ui_state.profile = profile,
            ChatEvent::StatsLoaded(stats) => self.ui_state.stats = Some(stats),
            ChatEvent::Toast(text) => self.ui_state.show_toast(text, now),
        }
    }

    /// Append the question to the current session and start the
    /// exchange in the background. Settlement arrives on the bus.
    fn submit(&mut self, question: String, ctx: &egui::Context) {
        let session_id = self.store.current_id().to_string();
        self.store
            .append_message(&session_id, Message::user(question.clone()));

        let query = self.query.clone();
        let bus = self.bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            exchange::run_query(query.as_ref(), &bus, session_id, question).await;
            ctx.request_repaint();
        });
    }

    fn route_sidebar(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::Create => {
                self.store.create_session();
            }
            SidebarAction::Select(id) => {
                self.store.select_session(&id);
            }
            SidebarAction::Rename { id, title } => {
                self.store.rename_session(&id, &title);
            }
            SidebarAction::Share(id) => self.share_session(id),
            SidebarAction::Delete(id) => {
                self.store.delete_session(&id);
            }
        }
    }

    /// Copy the session's share link to the clipboard (async) and
    /// report the outcome with a toast.
    fn share_session(&self, session_id: String) {
        let bus = self.bus.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let copied = match auth::share_url(&session_id) {
                Ok(url) => clipboard::copy_text(&url).await.is_ok(),
                Err(e) => {
                    log::warn!("Building share link failed: {}", e);
                    false
                }
            };
            let text = if copied {
                "Link copied!"
            } else {
                "Failed to copy link"
            };
            bus.emit(ChatEvent::Toast(text.to_string()));
        });
    }

    /// Background save once per frame when session data changed.
    /// Failures are logged; the in-memory store stays authoritative.
    fn flush_dirty(&mut self) {
        if !self.store.take_dirty() {
            return;
        }
        let sessions = self.store.sessions().to_vec();
        let persistence = self.persistence.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = persistence.save_all(&sessions).await {
                log::warn!("Saving to {} failed: {}", persistence.backend_name(), e);
            }
        });
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("VidQA")
                    .strong()
                    .color(theme::ACCENT)
                    .size(16.0),
            );
            if let Some(stats) = &self.ui_state.stats {
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} videos · {} chunks indexed",
                        stats.total_videos, stats.total_chunks
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(profile) = &self.ui_state.profile {
                    ui.label(
                        RichText::new(profile.display_name())
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                }
            });
        });
    }

    fn show_toast(&mut self, ctx: &egui::Context, now: f64) {
        if let Some(text) = self.ui_state.active_toast(now) {
            let text = text.to_string();
            egui::Area::new(egui::Id::new("toast"))
                .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -48.0])
                .show(ctx, |ui| {
                    egui::Frame::default()
                        .fill(theme::TOAST_BG)
                        .corner_radius(theme::PANEL_ROUNDING)
                        .inner_margin(theme::PANEL_PADDING)
                        .show(ui, |ui| {
                            ui.label(RichText::new(text).color(theme::TEXT_PRIMARY));
                        });
                });
            // Keep painting until the toast expires
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);

        let events = self.bus.drain();
        if !events.is_empty() {
            for event in events {
                self.apply_event(event, now);
            }
            ctx.request_repaint();
        }

        if let Some(at) = self.redirect_at {
            if now >= at {
                self.redirect_at = None;
                if let Err(e) = auth::redirect_to_login(&self.config.auth.login_path) {
                    log::error!("Login redirect failed: {}", e);
                }
            } else {
                ctx.request_repaint();
            }
        }

        TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ui);
        });

        SidePanel::left("sidebar")
            .default_width(240.0)
            .show(ctx, |ui| {
                let action = sidebar_panel(
                    ui,
                    self.store.sessions(),
                    self.store.current_id(),
                    &mut self.ui_state,
                );
                if let Some(action) = action {
                    self.route_sidebar(action);
                }
            });

        TopBottomPanel::bottom("compose").show(ctx, |ui| {
            if let Some(question) = compose_panel(ui, &mut self.ui_state) {
                self.submit(question, ctx);
            }
        });

        CentralPanel::default().show(ctx, |ui| {
            let picked =
                conversation_panel(ui, self.store.current(), self.ui_state.processing, now);
            if let Some(prompt) = picked {
                // Example prompts go through the same submission gate
                self.ui_state.compose_text = prompt;
                if let Some(question) = self.ui_state.take_submission() {
                    self.submit(question, ctx);
                }
            }
        });

        self.show_toast(ctx, now);
        self.flush_dirty();
    }
}
