use eframe::egui::{self, RichText};

use crate::i18n::keys;
use crate::panels::{bullet_list, card_title, page_title};
use crate::services::error::ServiceError;
use crate::services::schemes::{Scheme, SchemeQuery};
use crate::settings::SettingsContext;
use crate::speech::{Narrator, SpeechError};
use crate::theme::Theme;

pub const DISABILITY_TYPES: &[&str] = &[
    "Visual Impairment",
    "Hearing Impairment",
    "Locomotor Disability",
    "Intellectual Disability",
    "Mental Illness",
    "Multiple Disabilities",
    "Autism Spectrum Disorder",
    "Cerebral Palsy",
    "Speech and Language Disability",
];

/// Work the finder asks the shell to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderAction {
    Search { request_id: u64, query: SchemeQuery },
    Listen,
}

pub struct FinderPanel {
    disability: String,
    age: String,
    location: String,
    schemes: Vec<Scheme>,
    is_loading: bool,
    error_key: Option<&'static str>,
    is_listening: bool,
    voice_failed: bool,
    last_request_id: u64,
    pending_request: Option<u64>,
    narrator: Narrator,
}

impl FinderPanel {
    pub fn new(narrator: Narrator) -> Self {
        Self {
            disability: String::new(),
            age: String::new(),
            location: String::new(),
            schemes: Vec::new(),
            is_loading: false,
            error_key: None,
            is_listening: false,
            voice_failed: false,
            last_request_id: 0,
            pending_request: None,
            narrator,
        }
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn is_narrating(&self) -> bool {
        self.narrator.speaking().is_some()
    }

    pub fn error_message(&self, settings: &SettingsContext) -> Option<String> {
        self.error_key.map(|key| settings.text(key))
    }

    #[cfg(test)]
    pub fn set_criteria(&mut self, disability: &str, age: &str, location: &str) {
        self.disability = disability.to_string();
        self.age = age.chars().filter(char::is_ascii_digit).collect();
        self.location = location.to_string();
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading
            && !self.disability.trim().is_empty()
            && !self.age.trim().is_empty()
            && !self.location.trim().is_empty()
    }

    /// Clear the previous outcome and hand back a tagged query to dispatch.
    pub fn submit(&mut self) -> Option<FinderAction> {
        if !self.can_submit() {
            return None;
        }
        self.narrator.cancel();
        self.schemes.clear();
        self.error_key = None;
        self.is_loading = true;
        self.last_request_id += 1;
        self.pending_request = Some(self.last_request_id);

        Some(FinderAction::Search {
            request_id: self.last_request_id,
            query: SchemeQuery {
                disability: self.disability.trim().to_string(),
                age: self.age.trim().to_string(),
                location: self.location.trim().to_string(),
            },
        })
    }

    pub fn apply_result(&mut self, request_id: u64, result: Result<Vec<Scheme>, ServiceError>) {
        if self.pending_request != Some(request_id) {
            tracing::debug!(request_id, "dropping stale scheme response");
            return;
        }
        self.pending_request = None;
        self.is_loading = false;

        match result {
            Ok(schemes) => {
                if schemes.is_empty() {
                    self.error_key = Some(keys::NO_SCHEMES_FOUND);
                }
                self.schemes = schemes;
            }
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "scheme search failed");
                self.schemes.clear();
                self.error_key = Some(keys::ERROR_FINDING_SCHEMES);
            }
        }
    }

    pub fn start_listening(&mut self) -> Option<FinderAction> {
        if self.is_listening {
            return None;
        }
        self.is_listening = true;
        self.voice_failed = false;
        Some(FinderAction::Listen)
    }

    pub fn apply_transcript(&mut self, result: Result<String, SpeechError>) {
        self.is_listening = false;
        match result {
            Ok(transcript) if !transcript.trim().is_empty() => {
                self.location = transcript.trim().to_string();
            }
            Ok(_) => {}
            Err(_) => self.voice_failed = true,
        }
    }

    pub fn on_hidden(&mut self) {
        self.narrator.cancel();
    }

    pub fn toggle_narration(&mut self, index: usize, settings: &SettingsContext) {
        let Some(scheme) = self.schemes.get(index) else {
            return;
        };
        let text = scheme.narration();
        if let Err(err) = self.narrator.toggle(index, &text, settings.language()) {
            tracing::warn!(error = %err, "read aloud failed");
        }
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        settings: &SettingsContext,
        theme: &Theme,
        can_listen: bool,
    ) -> Option<FinderAction> {
        self.narrator.poll();
        if self.is_narrating() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(250));
        }

        let mut action = None;

        theme.card_frame().show(ui, |ui| {
            page_title(ui, settings.text(keys::FINDER_TITLE), theme);

            ui.label(settings.text(keys::DISABILITY_TYPE));
            let selected = if self.disability.is_empty() {
                settings.text(keys::SELECT_DISABILITY)
            } else {
                self.disability.clone()
            };
            egui::ComboBox::from_id_salt("finder_disability")
                .selected_text(selected)
                .width(ui.available_width().min(360.0))
                .show_ui(ui, |ui| {
                    for kind in DISABILITY_TYPES {
                        ui.selectable_value(&mut self.disability, (*kind).to_string(), *kind);
                    }
                });

            ui.label(settings.text(keys::AGE));
            let age = ui.add(
                egui::TextEdit::singleline(&mut self.age)
                    .hint_text(settings.text(keys::ENTER_AGE))
                    .desired_width(120.0),
            );
            if age.changed() {
                self.age.retain(|c| c.is_ascii_digit());
            }

            ui.label(settings.text(keys::LOCATION));
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.location)
                        .hint_text(settings.text(keys::ENTER_LOCATION))
                        .desired_width(280.0),
                );
                if can_listen {
                    let mic = ui
                        .add_enabled(!self.is_listening, egui::Button::new("🎤"))
                        .on_hover_text(settings.text(keys::USE_VOICE_INPUT));
                    if mic.clicked() {
                        action = self.start_listening();
                    }
                }
            });
            if self.is_listening() {
                ui.label(
                    RichText::new(settings.text(keys::VOICE_INPUT_ACTIVE))
                        .small()
                        .color(theme.accent),
                );
            } else if self.voice_failed {
                ui.label(
                    RichText::new(settings.text(keys::VOICE_INPUT_FAILED))
                        .small()
                        .color(theme.danger),
                );
            }

            ui.add_space(theme.spacing_8);
            let label = if self.is_loading() {
                settings.text(keys::FINDING_SCHEMES)
            } else {
                settings.text(keys::FIND_SCHEMES)
            };
            let submit = egui::Button::new(RichText::new(label).color(theme.text_on_accent))
                .fill(theme.accent);
            if ui.add_enabled(self.can_submit(), submit).clicked() {
                action = self.submit();
            }
        });

        ui.add_space(theme.spacing_16);

        if let Some(message) = self.error_message(settings) {
            ui.label(RichText::new(message).color(theme.danger));
        }

        let mut toggled = None;
        let speaking = self.narrator.speaking();
        for (index, scheme) in self.schemes().iter().enumerate() {
            let read_key = if speaking == Some(index) {
                keys::STOP_READING
            } else {
                keys::READ_ALOUD
            };
            if scheme_card(ui, scheme, settings, theme, self.narrator.is_available(), read_key) {
                toggled = Some(index);
            }
            ui.add_space(theme.spacing_12);
        }
        if let Some(index) = toggled {
            self.toggle_narration(index, settings);
        }

        action
    }
}

/// Returns true when the read-aloud toggle was clicked.
fn scheme_card(
    ui: &mut egui::Ui,
    scheme: &Scheme,
    settings: &SettingsContext,
    theme: &Theme,
    can_read: bool,
    read_key: &str,
) -> bool {
    let mut clicked = false;
    theme.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            card_title(ui, &scheme.scheme_name, theme);
            if can_read {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    clicked = ui.button(settings.text(read_key)).clicked();
                });
            }
        });
        ui.label(RichText::new(&scheme.description).color(theme.text_muted));
        ui.add_space(theme.spacing_8);

        ui.columns(2, |columns| {
            card_title(&mut columns[0], settings.text(keys::ELIGIBILITY), theme);
            bullet_list(&mut columns[0], &scheme.eligibility, theme);
            card_title(&mut columns[1], settings.text(keys::BENEFITS), theme);
            bullet_list(&mut columns[1], &scheme.benefits, theme);
        });

        card_title(ui, settings.text(keys::DOCUMENTS_REQUIRED), theme);
        bullet_list(ui, &scheme.documents_required, theme);

        card_title(ui, settings.text(keys::APPLICATION_PROCESS), theme);
        ui.label(RichText::new(&scheme.application_process).color(theme.text_muted));
    });
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::services::schemes::parse_schemes;
    use crate::speech::synthesis::fake::{Call, FakeSynthesizer};
    use crate::test_support::{sample_schemes_json, settings_context};

    fn filled_panel() -> FinderPanel {
        let mut panel = FinderPanel::new(Narrator::new(None));
        panel.set_criteria("Visual Impairment", "34", "Maharashtra");
        panel
    }

    fn request_id(action: Option<FinderAction>) -> u64 {
        match action {
            Some(FinderAction::Search { request_id, .. }) => request_id,
            other => panic!("expected a search, got {other:?}"),
        }
    }

    #[test]
    fn submit_requires_every_field() {
        let mut panel = FinderPanel::new(Narrator::new(None));
        panel.set_criteria("Visual Impairment", "", "Maharashtra");
        assert!(!panel.can_submit());
        assert_eq!(panel.submit(), None);

        panel.set_criteria("Visual Impairment", "34", "  ");
        assert!(!panel.can_submit());
    }

    #[test]
    fn age_keeps_only_digits() {
        let mut panel = FinderPanel::new(Narrator::new(None));
        panel.set_criteria("Visual Impairment", "3a4 ", "Pune");
        match panel.submit() {
            Some(FinderAction::Search { query, .. }) => assert_eq!(query.age, "34"),
            other => panic!("expected a search, got {other:?}"),
        }
    }

    #[test]
    fn two_schemes_render_two_cards_without_error() {
        let settings = settings_context();
        let mut panel = filled_panel();

        let action = panel.submit();
        match &action {
            Some(FinderAction::Search { query, .. }) => {
                assert_eq!(query.disability, "Visual Impairment");
                assert_eq!(query.age, "34");
                assert_eq!(query.location, "Maharashtra");
            }
            other => panic!("expected a search, got {other:?}"),
        }
        assert!(panel.is_loading());
        assert!(!panel.can_submit());

        let id = request_id(action);
        panel.apply_result(id, parse_schemes(&sample_schemes_json(2)));

        assert!(!panel.is_loading());
        assert_eq!(panel.schemes().len(), 2);
        assert_eq!(panel.error_message(&settings), None);
    }

    #[test]
    fn unparsable_response_shows_localized_error() {
        let settings = settings_context();
        let mut panel = filled_panel();
        let id = request_id(panel.submit());

        panel.apply_result(id, parse_schemes("this is not json"));

        assert!(panel.schemes().is_empty());
        assert_eq!(
            panel.error_message(&settings),
            Some(settings.text(keys::ERROR_FINDING_SCHEMES))
        );
    }

    #[test]
    fn empty_result_shows_no_schemes_message() {
        let mut settings = settings_context();
        let mut panel = filled_panel();
        let id = request_id(panel.submit());
        panel.apply_result(id, Ok(Vec::new()));

        settings.set_language(Language::Hi);
        assert_eq!(
            panel.error_message(&settings),
            Some(settings.text(keys::NO_SCHEMES_FOUND))
        );
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut panel = filled_panel();
        let first = request_id(panel.submit());
        // Simulate a second search replacing the first.
        panel.is_loading = false;
        let second = request_id(panel.submit());
        assert!(second > first);

        panel.apply_result(first, parse_schemes(&sample_schemes_json(3)));
        assert!(panel.is_loading());
        assert!(panel.schemes().is_empty());

        panel.apply_result(second, parse_schemes(&sample_schemes_json(1)));
        assert!(!panel.is_loading());
        assert_eq!(panel.schemes().len(), 1);
    }

    #[test]
    fn new_search_clears_previous_error() {
        let settings = settings_context();
        let mut panel = filled_panel();
        let id = request_id(panel.submit());
        panel.apply_result(id, Err(ServiceError::Timeout { secs: 30 }));
        assert!(panel.error_message(&settings).is_some());

        panel.submit();
        assert_eq!(panel.error_message(&settings), None);
    }

    #[test]
    fn transcript_fills_location() {
        let mut panel = FinderPanel::new(Narrator::new(None));
        assert_eq!(panel.start_listening(), Some(FinderAction::Listen));
        assert_eq!(panel.start_listening(), None);

        panel.apply_transcript(Ok("  Kerala ".into()));
        assert!(!panel.is_listening());
        assert_eq!(panel.location, "Kerala");

        panel.start_listening();
        panel.apply_transcript(Ok(String::new()));
        assert_eq!(panel.location, "Kerala");
    }

    #[test]
    fn failed_transcript_flags_voice_error() {
        let mut panel = FinderPanel::new(Narrator::new(None));
        panel.start_listening();
        panel.apply_transcript(Err(SpeechError::Spawn {
            program: "stt".into(),
            message: "not found".into(),
        }));
        assert!(!panel.is_listening());
        assert!(panel.voice_failed);
    }

    #[test]
    fn hiding_the_panel_stops_narration() {
        let settings = settings_context();
        let fake = FakeSynthesizer::default();
        let mut panel = FinderPanel::new(Narrator::new(Some(Box::new(fake.clone()))));
        panel.set_criteria("Visual Impairment", "34", "Maharashtra");
        let id = request_id(panel.submit());
        panel.apply_result(id, parse_schemes(&sample_schemes_json(1)));

        panel.toggle_narration(0, &settings);
        assert!(panel.is_narrating());

        panel.on_hidden();
        assert!(!panel.is_narrating());
        let calls = fake.calls();
        assert!(matches!(calls.first(), Some(Call::Speak(text)) if text.starts_with("Scheme: Scheme 1.")));
        assert_eq!(calls.last(), Some(&Call::Cancel));
    }
}
