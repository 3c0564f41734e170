use eframe::egui::{self, Align, Layout, RichText};
use std::time::{Duration, Instant};

use crate::i18n::keys;
use crate::panels::{page_title, Notice};
use crate::services::error::ServiceError;
use crate::settings::SettingsContext;
use crate::theme::Theme;

pub const HUMAN_HELP_NOTICE: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// Live Assistance transcript and composer.
pub struct AssistantPanel {
    messages: Vec<Message>,
    input: String,
    is_loading: bool,
    next_id: u64,
    notice: Notice,
}

impl AssistantPanel {
    pub fn new(settings: &SettingsContext) -> Self {
        let mut panel = Self {
            messages: Vec::new(),
            input: String::new(),
            is_loading: false,
            next_id: 1,
            notice: Notice::default(),
        };
        panel.push(Sender::Bot, settings.text(keys::CHAT_GREETING));
        panel
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[cfg(test)]
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn push(&mut self, sender: Sender, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message { id, text, sender });
    }

    pub fn can_send(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// Append the user's turn and return the text to send.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_string();
        self.input.clear();
        self.push(Sender::User, text.clone());
        self.is_loading = true;
        Some(text)
    }

    pub fn apply_reply(&mut self, result: Result<String, ServiceError>, settings: &SettingsContext) {
        self.is_loading = false;
        let text = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "assistant reply failed");
                settings.text(keys::CHAT_UNAVAILABLE)
            }
        };
        self.push(Sender::Bot, text);
    }

    pub fn request_human_help(&mut self, now: Instant) {
        tracing::info!("human help requested");
        self.notice.show(keys::HUMAN_HELP_NOTICE, now, HUMAN_HELP_NOTICE);
    }

    pub fn notice_key(&self, now: Instant) -> Option<&'static str> {
        self.notice.active_key(now)
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        settings: &SettingsContext,
        theme: &Theme,
    ) -> Option<String> {
        let now = Instant::now();
        let mut outgoing = None;

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            page_title(ui, settings.text(keys::CHAT_TITLE), theme);

            egui::ScrollArea::vertical()
                .id_salt("assistant_transcript")
                .max_height(360.0)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in self.messages() {
                        render_message(ui, message, theme);
                        ui.add_space(theme.spacing_4);
                    }
                    if self.is_loading() {
                        ui.label(
                            RichText::new(settings.text(keys::TYPING))
                                .italics()
                                .color(theme.text_muted),
                        );
                    }
                });

            ui.add_space(theme.spacing_8);
            theme.composer_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    let send_width = 96.0;
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.input)
                            .hint_text(settings.text(keys::TYPE_MESSAGE))
                            .desired_width(ui.available_width() - send_width),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let send = ui.add_enabled(
                        self.can_send(),
                        egui::Button::new(
                            RichText::new(settings.text(keys::SEND)).color(theme.text_on_accent),
                        )
                        .fill(theme.accent),
                    );
                    if send.clicked() || submitted {
                        outgoing = self.begin_send();
                        response.request_focus();
                    }
                });
            });

            ui.add_space(theme.spacing_8);
            if ui.link(settings.text(keys::HUMAN_HELP)).clicked() {
                self.request_human_help(now);
            }
            if let Some(key) = self.notice_key(now) {
                ui.label(RichText::new(settings.text(key)).color(theme.success));
            }
        });

        self.notice.schedule_repaint(ui.ctx(), now);
        outgoing
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message, theme: &Theme) {
    let (layout, fill, color) = match message.sender {
        Sender::User => (
            Layout::right_to_left(Align::TOP),
            theme.user_bubble,
            theme.text_on_accent,
        ),
        Sender::Bot => (
            Layout::left_to_right(Align::TOP),
            theme.bot_bubble,
            theme.text_primary,
        ),
    };
    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.8);
        theme.bubble_frame(fill).show(ui, |ui| {
            ui.label(RichText::new(&message.text).color(color));
        });
    });
}
