pub mod alerts;
pub mod assistant;
pub mod community;
pub mod docs;
pub mod finder;

use eframe::egui::{self, RichText};
use std::time::{Duration, Instant};

use crate::theme::Theme;

/// A short-lived confirmation line, stored as a translation key so it follows
/// language changes while visible.
#[derive(Debug, Default)]
pub struct Notice {
    shown: Option<(&'static str, Instant)>,
}

impl Notice {
    pub fn show(&mut self, key: &'static str, now: Instant, duration: Duration) {
        self.shown = Some((key, now + duration));
    }

    pub fn active_key(&self, now: Instant) -> Option<&'static str> {
        match self.shown {
            Some((key, until)) if now < until => Some(key),
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.shown
            .and_then(|(_, until)| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }

    /// Keep the UI ticking until the notice expires.
    pub fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if let Some(left) = self.remaining(now) {
            ctx.request_repaint_after(left);
        }
    }
}

pub fn page_title(ui: &mut egui::Ui, text: impl Into<String>, theme: &Theme) {
    ui.label(RichText::new(text).heading().strong().color(theme.heading));
    ui.add_space(theme.spacing_8);
}

pub fn card_title(ui: &mut egui::Ui, text: impl Into<String>, theme: &Theme) {
    ui.label(
        RichText::new(text)
            .font(theme.section_font())
            .strong()
            .color(theme.heading),
    );
    ui.add_space(theme.spacing_4);
}

pub fn bullet_list(ui: &mut egui::Ui, items: &[String], theme: &Theme) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("•").color(theme.accent));
            ui.label(RichText::new(item).color(theme.text_muted));
        });
    }
}
