use eframe::egui::{self, RichText};

use crate::i18n::keys;
use crate::settings::SettingsContext;
use crate::theme::Theme;

pub fn render(ui: &mut egui::Ui, settings: &SettingsContext, theme: &Theme) {
    theme.alert_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("🔔").color(theme.alert_text));
            ui.label(
                RichText::new(settings.text(keys::ALERTS_TITLE))
                    .strong()
                    .color(theme.alert_text),
            );
        });
        ui.label(RichText::new(settings.text(keys::ALERTS_CONTENT)).color(theme.alert_text));
    });
}
