use eframe::egui::{self, RichText};

use crate::i18n::keys;
use crate::panels::{card_title, page_title};
use crate::settings::SettingsContext;
use crate::theme::Theme;

const STORIES: [(&str, &str); 2] = [
    (keys::STORY1_TITLE, keys::STORY1_CONTENT),
    (keys::STORY2_TITLE, keys::STORY2_CONTENT),
];

pub fn render(ui: &mut egui::Ui, settings: &SettingsContext, theme: &Theme) {
    page_title(ui, settings.text(keys::COMMUNITY_TITLE), theme);

    for (title, content) in STORIES {
        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_title(ui, settings.text(title), theme);
            ui.label(RichText::new(settings.text(content)).color(theme.text_muted));
        });
        ui.add_space(theme.spacing_12);
    }
}
