use eframe::egui::{self, RichText};
use std::time::{Duration, Instant};

use crate::i18n::keys;
use crate::panels::{bullet_list, card_title, page_title, Notice};
use crate::settings::SettingsContext;
use crate::theme::Theme;

pub const AUTOFILL_NOTICE: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct DocsPanel {
    notice: Notice,
}

impl DocsPanel {
    pub fn autofill(&mut self, now: Instant) {
        tracing::info!("autofill requested");
        self.notice.show(keys::AUTOFILL_SUCCESS, now, AUTOFILL_NOTICE);
    }

    pub fn notice_key(&self, now: Instant) -> Option<&'static str> {
        self.notice.active_key(now)
    }

    pub fn render(&mut self, ui: &mut egui::Ui, settings: &SettingsContext, theme: &Theme) {
        let now = Instant::now();

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            page_title(ui, settings.text(keys::DOCS_TITLE), theme);

            card_title(ui, settings.text(keys::COMMON_DOCS), theme);
            bullet_list(ui, &settings.list(keys::DOC_LIST), theme);
            ui.add_space(theme.spacing_16);

            card_title(ui, settings.text(keys::GLOSSARY_TITLE), theme);
            egui::Grid::new("docs_glossary")
                .num_columns(2)
                .spacing([theme.spacing_16, theme.spacing_8])
                .striped(true)
                .show(ui, |ui| {
                    for entry in settings.glossary() {
                        ui.label(RichText::new(&entry.term).strong().color(theme.heading));
                        ui.label(RichText::new(&entry.definition).color(theme.text_muted));
                        ui.end_row();
                    }
                });
            ui.add_space(theme.spacing_16);

            let autofill = egui::Button::new(
                RichText::new(settings.text(keys::AUTOFILL)).color(theme.text_on_accent),
            )
            .fill(theme.accent);
            if ui.add(autofill).clicked() {
                self.autofill(now);
            }
            if let Some(key) = self.notice_key(now) {
                ui.label(RichText::new(settings.text(key)).color(theme.success));
            }
        });

        self.notice.schedule_repaint(ui.ctx(), now);
    }
}
