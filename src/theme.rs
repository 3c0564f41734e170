use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

use crate::settings::{Presentation, ThemeMode};

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub text_scale: f32,
    pub background: Color32,
    pub surface: Color32,
    pub header_fill: Color32,
    pub nav_fill: Color32,
    pub accent: Color32,
    pub accent_muted: Color32,
    pub heading: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub border: Color32,
    pub alert_fill: Color32,
    pub alert_border: Color32,
    pub alert_text: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub spacing_4: f32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub spacing_24: f32,
    pub radius_8: u8,
    pub radius_12: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P12: f32 = 12.0;
    pub const P16: f32 = 16.0;
    pub const P24: f32 = 24.0;

    pub fn standard() -> Self {
        Self {
            mode: ThemeMode::Standard,
            text_scale: 1.0,
            background: Color32::from_rgb(0xF0, 0xF9, 0xFF),
            surface: Color32::WHITE,
            header_fill: Color32::from_rgb(0x07, 0x59, 0x85),
            nav_fill: Color32::from_rgb(0x03, 0x69, 0xA1),
            accent: Color32::from_rgb(0x02, 0x84, 0xC7),
            accent_muted: Color32::from_rgb(0x7D, 0xD3, 0xFC),
            heading: Color32::from_rgb(0x07, 0x59, 0x85),
            text_primary: Color32::from_rgb(0x1F, 0x29, 0x37),
            text_muted: Color32::from_rgb(0x4B, 0x55, 0x63),
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            alert_fill: Color32::from_rgb(0xFE, 0xF9, 0xC3),
            alert_border: Color32::from_rgb(0xFA, 0xCC, 0x15),
            alert_text: Color32::from_rgb(0x85, 0x4D, 0x0E),
            success: Color32::from_rgb(0x16, 0xA3, 0x4A),
            danger: Color32::from_rgb(0xDC, 0x26, 0x26),
            user_bubble: Color32::from_rgb(0x02, 0x84, 0xC7),
            bot_bubble: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            spacing_4: 4.0,
            spacing_8: Self::P8,
            spacing_12: Self::P12,
            spacing_16: Self::P16,
            spacing_24: Self::P24,
            radius_8: Self::R8,
            radius_12: Self::R12,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            mode: ThemeMode::HighContrast,
            background: Color32::BLACK,
            surface: Color32::from_rgb(0x1F, 0x29, 0x37),
            header_fill: Color32::BLACK,
            nav_fill: Color32::from_rgb(0x11, 0x18, 0x27),
            accent: Color32::from_rgb(0xFA, 0xCC, 0x15),
            accent_muted: Color32::from_rgb(0x4B, 0x55, 0x63),
            heading: Color32::from_rgb(0x7D, 0xD3, 0xFC),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(0xD1, 0xD5, 0xDB),
            text_on_accent: Color32::BLACK,
            border: Color32::from_rgb(0x37, 0x41, 0x51),
            alert_fill: Color32::from_rgb(0x42, 0x20, 0x06),
            alert_border: Color32::from_rgb(0xCA, 0x8A, 0x04),
            alert_text: Color32::from_rgb(0xFE, 0xF0, 0x8A),
            success: Color32::from_rgb(0x4A, 0xDE, 0x80),
            danger: Color32::from_rgb(0xF8, 0x71, 0x71),
            user_bubble: Color32::from_rgb(0xFA, 0xCC, 0x15),
            bot_bubble: Color32::from_rgb(0x37, 0x41, 0x51),
            ..Self::standard()
        }
    }

    pub fn for_presentation(presentation: &Presentation) -> Self {
        let base = match presentation.theme {
            ThemeMode::Standard => Self::standard(),
            ThemeMode::HighContrast => Self::high_contrast(),
        };
        Self {
            text_scale: presentation.text_scale,
            ..base
        }
    }

    fn scaled(&self, size: f32) -> f32 {
        size * self.text_scale
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let dark = self.mode == ThemeMode::HighContrast;
        ctx.set_theme(if dark { egui::Theme::Dark } else { egui::Theme::Light });

        let mut visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.override_text_color = Some(self.text_primary);
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.text_on_accent);
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke.color = self.text_on_accent;
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(self.scaled(24.0)));
        style.text_styles.insert(
            TextStyle::Name("section".into()),
            FontId::proportional(self.scaled(18.0)),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(self.scaled(15.0)));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(self.scaled(15.0)));
        style
            .text_styles
            .insert(TextStyle::Monospace, FontId::monospace(self.scaled(13.0)));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::proportional(self.scaled(12.5)));
        ctx.set_style(style);
    }

    /// Foreground for text on the header, nav and footer bars.
    pub fn text_on_header(&self) -> Color32 {
        match self.mode {
            ThemeMode::Standard => Color32::WHITE,
            ThemeMode::HighContrast => self.accent,
        }
    }

    pub fn section_font(&self) -> FontId {
        FontId::proportional(self.scaled(18.0))
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .inner_margin(Margin::same(self.spacing_16 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, self.border))
            .shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: Color32::from_black_alpha(24),
            })
    }

    pub fn alert_frame(&self) -> Frame {
        Frame::new()
            .fill(self.alert_fill)
            .inner_margin(Margin::same(self.spacing_16 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, self.alert_border))
    }

    pub fn bubble_frame(&self, fill: Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::symmetric(self.spacing_16 as i8, self.spacing_8 as i8))
            .corner_radius(CornerRadius::same(self.radius_12))
    }

    pub fn composer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .inner_margin(Margin::symmetric(self.spacing_12 as i8, 10))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.border))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{LARGE_TEXT_SCALE, STANDARD_TEXT_SCALE};

    #[test]
    fn presentation_selects_palette_and_scale() {
        let theme = Theme::for_presentation(&Presentation {
            theme: ThemeMode::HighContrast,
            text_scale: LARGE_TEXT_SCALE,
        });
        assert_eq!(theme.background, Color32::BLACK);
        assert_eq!(theme.section_font().size, 18.0 * LARGE_TEXT_SCALE);

        let theme = Theme::for_presentation(&Presentation {
            theme: ThemeMode::Standard,
            text_scale: STANDARD_TEXT_SCALE,
        });
        assert_eq!(theme.background, Color32::from_rgb(0xF0, 0xF9, 0xFF));
        assert_eq!(theme.section_font().size, 18.0);
    }

    #[test]
    fn high_contrast_keeps_spacing_tokens() {
        let hc = Theme::high_contrast();
        let standard = Theme::standard();
        assert_eq!(hc.spacing_16, standard.spacing_16);
        assert_eq!(hc.radius_12, standard.radius_12);
        assert_ne!(hc.text_primary, standard.text_primary);
    }
}
