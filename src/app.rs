use crate::event::AppEvent;
use crate::i18n::{keys, Language};
use crate::panels::assistant::AssistantPanel;
use crate::panels::docs::DocsPanel;
use crate::panels::finder::{FinderAction, FinderPanel};
use crate::panels::{alerts, community};
use crate::router::{View, ViewRouter};
use crate::services::ServiceHub;
use crate::settings::SettingsContext;
use crate::speech::Narrator;
use crate::theme::Theme;
use eframe::egui::{self, Margin, RichText, ScrollArea};
use std::sync::mpsc::{Receiver, TryRecvError};

pub struct SahayataApp {
    rx: Receiver<AppEvent>,
    hub: ServiceHub,
    settings: SettingsContext,
    router: ViewRouter,
    theme: Theme,
    applied_revision: Option<u64>,
    finder: FinderPanel,
    docs: DocsPanel,
    assistant: AssistantPanel,
}

impl SahayataApp {
    pub fn new(
        rx: Receiver<AppEvent>,
        hub: ServiceHub,
        settings: SettingsContext,
        narrator: Narrator,
        start_view: Option<&str>,
    ) -> Self {
        let theme = Theme::for_presentation(&settings.presentation());
        let assistant = AssistantPanel::new(&settings);
        let mut router = ViewRouter::default();
        if let Some(id) = start_view {
            router.set_from_id(id);
        }
        Self {
            rx,
            hub,
            settings,
            router,
            theme,
            applied_revision: None,
            finder: FinderPanel::new(narrator),
            docs: DocsPanel::default(),
            assistant,
        }
    }

    fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SchemesResolved { request_id, result } => {
                self.finder.apply_result(request_id, result);
            }
            AppEvent::ChatReplied(result) => {
                self.assistant.apply_reply(result, &self.settings);
            }
            AppEvent::TranscriptReady(result) => {
                self.finder.apply_transcript(result);
            }
        }
    }

    /// Re-style egui only when the presentation actually changed.
    fn sync_presentation(&mut self, ctx: &egui::Context) {
        let revision = self.settings.presentation_revision();
        if self.applied_revision == Some(revision) {
            return;
        }
        self.theme = Theme::for_presentation(&self.settings.presentation());
        self.theme.apply_visuals(ctx);
        self.applied_revision = Some(revision);
        tracing::debug!(revision, mode = ?self.theme.mode, "presentation applied");
    }

    fn navigate(&mut self, view: View) {
        if let Some(previous) = self.router.set(view) {
            if previous == View::Finder {
                self.finder.on_hidden();
            }
        }
    }

    fn dispatch(&mut self, action: FinderAction) {
        match action {
            FinderAction::Search { request_id, query } => {
                tracing::info!(request_id, disability = %query.disability, "searching schemes");
                self.hub.find_schemes(request_id, query);
            }
            FinderAction::Listen => self.hub.listen(self.settings.language()),
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.header_fill)
                    .inner_margin(Margin::symmetric(theme.spacing_24 as i8, theme.spacing_12 as i8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(self.settings.text(keys::APP_NAME))
                                .heading()
                                .strong()
                                .color(theme.text_on_header()),
                        );
                        ui.label(
                            RichText::new(self.settings.text(keys::TAGLINE))
                                .small()
                                .color(theme.accent_muted),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_language_picker(ui);

                        let mut large = self.settings.settings().is_large_text;
                        if ui
                            .toggle_value(&mut large, self.settings.text(keys::LARGE_TEXT))
                            .changed()
                        {
                            self.settings.toggle_large_text();
                        }

                        let mut contrast = self.settings.settings().is_high_contrast;
                        if ui
                            .toggle_value(&mut contrast, self.settings.text(keys::HIGH_CONTRAST))
                            .changed()
                        {
                            self.settings.toggle_high_contrast();
                        }
                    });
                });
            });
    }

    fn render_language_picker(&mut self, ui: &mut egui::Ui) {
        let current = self.settings.language();
        let mut selected = current;
        egui::ComboBox::from_id_salt("language_picker")
            .selected_text(self.settings.text(current.label_key()))
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(
                        &mut selected,
                        language,
                        self.settings.text(language.label_key()),
                    );
                }
            });
        ui.label(
            RichText::new(self.settings.text(keys::LANGUAGE)).color(self.theme.text_on_header()),
        );

        if selected != current {
            self.settings.set_language(selected);
        }
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut target = None;
        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::new()
                    .fill(theme.nav_fill)
                    .inner_margin(Margin::symmetric(theme.spacing_24 as i8, theme.spacing_4 as i8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for view in View::ALL {
                        let active = self.router.active() == view;
                        let label = RichText::new(self.settings.text(view.label_key()))
                            .strong()
                            .color(theme.text_on_header());
                        if ui.selectable_label(active, label).clicked() {
                            target = Some(view);
                        }
                    }
                });
            });
        if let Some(view) = target {
            self.navigate(view);
        }
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        let theme = &self.theme;
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(theme.header_fill)
                    .inner_margin(Margin::same(theme.spacing_12 as i8)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(self.settings.text(keys::FOOTER))
                            .small()
                            .color(theme.text_on_header()),
                    );
                });
            });
    }

    fn render_body(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut action = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.background)
                    .inner_margin(Margin::same(theme.spacing_24 as i8)),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("body")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if self.router.shows_alerts() {
                            alerts::render(ui, &self.settings, &theme);
                            ui.add_space(theme.spacing_16);
                        }

                        match self.router.active() {
                            View::Finder => {
                                action = self.finder.render(
                                    ui,
                                    &self.settings,
                                    &theme,
                                    self.hub.has_recognizer(),
                                );
                            }
                            View::Docs => self.docs.render(ui, &self.settings, &theme),
                            View::Chat => {
                                if let Some(message) = self.assistant.render(ui, &self.settings, &theme) {
                                    self.hub.send_chat(message);
                                }
                            }
                            View::Community => community::render(ui, &self.settings, &theme),
                        }
                    });
            });

        if let Some(action) = action {
            self.dispatch(action);
        }
    }
}

impl eframe::App for SahayataApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.sync_presentation(ctx);
        self.render_header(ctx);
        self.render_nav(ctx);
        self.render_footer(ctx);
        self.render_body(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::schemes::parse_schemes;
    use crate::test_support::{sample_schemes_json, settings_context, ScriptedBackend};
    use std::sync::{mpsc, Arc};

    fn app() -> SahayataApp {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime");
        let (tx, rx) = mpsc::channel();
        let hub = ServiceHub::new(
            runtime.handle().clone(),
            tx,
            Arc::new(ScriptedBackend::default()),
            None,
        );
        SahayataApp::new(rx, hub, settings_context(), Narrator::new(None), None)
    }

    #[test]
    fn leaving_finder_and_back_keeps_settings() {
        let mut app = app();
        let before = *app.settings.settings();
        assert!(app.router.shows_alerts());

        app.navigate(View::Docs);
        assert!(!app.router.shows_alerts());
        app.navigate(View::Finder);
        assert!(app.router.shows_alerts());
        assert_eq!(*app.settings.settings(), before);
    }

    #[test]
    fn start_view_opens_the_requested_tab() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime");
        let (tx, rx) = mpsc::channel();
        let hub = ServiceHub::new(
            runtime.handle().clone(),
            tx,
            Arc::new(ScriptedBackend::default()),
            None,
        );
        let app = SahayataApp::new(rx, hub, settings_context(), Narrator::new(None), Some("chat"));
        assert_eq!(app.router.active(), View::Chat);
        assert!(!app.router.shows_alerts());
    }

    #[test]
    fn events_reach_their_panels() {
        let mut app = app();
        app.finder.set_criteria("Visual Impairment", "34", "Maharashtra");
        let request_id = match app.finder.submit() {
            Some(FinderAction::Search { request_id, .. }) => request_id,
            other => panic!("expected a search, got {other:?}"),
        };

        app.apply_event(AppEvent::SchemesResolved {
            request_id,
            result: parse_schemes(&sample_schemes_json(2)),
        });
        app.apply_event(AppEvent::ChatReplied(Ok("Namaste".into())));

        assert_eq!(app.finder.schemes().len(), 2);
        assert_eq!(
            app.assistant.messages().last().map(|m| m.text.as_str()),
            Some("Namaste")
        );
    }
}
