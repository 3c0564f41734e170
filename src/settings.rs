//! Session settings shared by every panel.
//!
//! [`SettingsContext`] is the single writer for [`Settings`]. Each mutation
//! recomputes the derived [`Presentation`] in the same call and bumps its
//! revision when the visual state changed, so the shell can re-style the
//! window without the caller doing anything else.

use crate::i18n::{GlossaryTerm, Language, Translation, TranslationStore};
use std::sync::Arc;

pub const STANDARD_TEXT_SCALE: f32 = 1.0;
pub const LARGE_TEXT_SCALE: f32 = 1.125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub language: Language,
    pub is_high_contrast: bool,
    pub is_large_text: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Standard,
    HighContrast,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub theme: ThemeMode,
    pub text_scale: f32,
}

impl Presentation {
    pub fn for_settings(settings: &Settings) -> Self {
        Self {
            theme: if settings.is_high_contrast {
                ThemeMode::HighContrast
            } else {
                ThemeMode::Standard
            },
            text_scale: if settings.is_large_text {
                LARGE_TEXT_SCALE
            } else {
                STANDARD_TEXT_SCALE
            },
        }
    }
}

pub enum SettingsUpdate {
    Replace(Settings),
    With(Box<dyn FnOnce(&Settings) -> Settings>),
}

impl From<Settings> for SettingsUpdate {
    fn from(settings: Settings) -> Self {
        Self::Replace(settings)
    }
}

pub struct SettingsContext {
    settings: Settings,
    store: Arc<TranslationStore>,
    presentation: Presentation,
    presentation_revision: u64,
}

impl SettingsContext {
    pub fn new(store: Arc<TranslationStore>) -> Self {
        let settings = Settings::default();
        Self {
            presentation: Presentation::for_settings(&settings),
            settings,
            store,
            presentation_revision: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn presentation_revision(&self) -> u64 {
        self.presentation_revision
    }

    pub fn apply(&mut self, update: SettingsUpdate) {
        let next = match update {
            SettingsUpdate::Replace(settings) => settings,
            SettingsUpdate::With(f) => f(&self.settings),
        };
        if next == self.settings {
            return;
        }

        if next.language != self.settings.language {
            tracing::info!(language = next.language.code(), "language changed");
        }
        self.settings = next;

        let presentation = Presentation::for_settings(&self.settings);
        if presentation != self.presentation {
            self.presentation = presentation;
            self.presentation_revision += 1;
            tracing::debug!(
                theme = ?presentation.theme,
                text_scale = presentation.text_scale,
                "presentation updated"
            );
        }
    }

    pub fn set(&mut self, settings: Settings) {
        self.apply(SettingsUpdate::Replace(settings));
    }

    pub fn update(&mut self, f: impl FnOnce(&Settings) -> Settings + 'static) {
        self.apply(SettingsUpdate::With(Box::new(f)));
    }

    pub fn toggle_high_contrast(&mut self) {
        self.update(|s| Settings {
            is_high_contrast: !s.is_high_contrast,
            ..*s
        });
    }

    pub fn toggle_large_text(&mut self) {
        self.update(|s| Settings {
            is_large_text: !s.is_large_text,
            ..*s
        });
    }

    pub fn set_language(&mut self, language: Language) {
        self.update(move |s| Settings { language, ..*s });
    }

    /// Look up `key` in the active language. A missing key is logged and the
    /// key itself comes back as the display value.
    pub fn t(&self, key: &str) -> Translation {
        match self.store.resolve(self.settings.language, key) {
            Some(translation) => translation,
            None => {
                tracing::warn!(
                    key,
                    language = self.settings.language.code(),
                    "translation key not found"
                );
                Translation::Text(key.to_string())
            }
        }
    }

    pub fn text(&self, key: &str) -> String {
        self.t(key).into_text()
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.t(key).into_list()
    }

    pub fn glossary(&self) -> &[GlossaryTerm] {
        self.store.glossary(self.settings.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    fn context() -> SettingsContext {
        let store = TranslationStore::builtin().expect("bundled locale packs should parse");
        SettingsContext::new(Arc::new(store))
    }

    #[test]
    fn defaults_are_english_without_accessibility_flags() {
        let ctx = context();
        assert_eq!(*ctx.settings(), Settings::default());
        assert_eq!(ctx.presentation().theme, ThemeMode::Standard);
        assert_eq!(ctx.presentation().text_scale, STANDARD_TEXT_SCALE);
    }

    #[test]
    fn toggling_high_contrast_twice_restores_presentation() {
        let mut ctx = context();
        let original = ctx.presentation();

        ctx.toggle_high_contrast();
        assert_eq!(ctx.presentation().theme, ThemeMode::HighContrast);
        assert_eq!(ctx.presentation_revision(), 1);

        ctx.toggle_high_contrast();
        assert_eq!(ctx.presentation(), original);
        assert_eq!(ctx.presentation_revision(), 2);
    }

    #[test]
    fn large_text_scales_presentation_in_the_same_call() {
        let mut ctx = context();
        ctx.toggle_large_text();
        assert_eq!(ctx.presentation().text_scale, LARGE_TEXT_SCALE);
        assert!(ctx.settings().is_large_text);
    }

    #[test]
    fn replace_and_function_updates_both_apply() {
        let mut ctx = context();
        ctx.set(Settings {
            language: Language::Hi,
            is_high_contrast: true,
            is_large_text: false,
        });
        assert_eq!(ctx.language(), Language::Hi);

        ctx.update(|s| Settings {
            is_large_text: true,
            ..*s
        });
        assert!(ctx.settings().is_high_contrast);
        assert!(ctx.settings().is_large_text);
    }

    #[test]
    fn language_change_leaves_presentation_revision_alone() {
        let mut ctx = context();
        ctx.set_language(Language::Hi);
        assert_eq!(ctx.presentation_revision(), 0);
        assert_eq!(ctx.text(keys::NAV_FINDER), "योजना खोजें");
    }

    #[test]
    fn missing_key_falls_back_to_the_key() {
        let ctx = context();
        assert_eq!(ctx.text("finder.doesNotExist"), "finder.doesNotExist");
        assert_eq!(ctx.list("nope"), vec!["nope".to_string()]);
    }

    #[test]
    fn glossary_follows_active_language() {
        let mut ctx = context();
        let english = ctx.glossary()[1].term.clone();
        ctx.set_language(Language::Hi);
        assert_ne!(ctx.glossary()[1].term, english);
    }
}
