//! Startup configuration read from the environment.

use std::time::Duration;

use crate::i18n::Language;

pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
pub const MODEL_VAR: &str = "SAHAYATA_MODEL";
pub const API_BASE_VAR: &str = "SAHAYATA_API_BASE";
pub const TIMEOUT_VAR: &str = "SAHAYATA_REQUEST_TIMEOUT_SECS";
pub const STT_COMMAND_VAR: &str = "SAHAYATA_STT_COMMAND";
pub const LANGUAGE_VAR: &str = "SAHAYATA_LANGUAGE";
pub const START_VIEW_VAR: &str = "SAHAYATA_START_VIEW";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum StartupConfigError {
    #[error("[CONFIG_INVALID] API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("[CONFIG_INVALID] {var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("[CONFIG_INVALID] {var} must be 'en' or 'hi', got '{value}'")]
    InvalidLanguage { var: &'static str, value: String },
    #[error("[CONFIG_INVALID] http client could not be built: {0}")]
    HttpClient(String),
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub stt_command: Option<String>,
    pub language: Option<Language>,
    /// View id opened at launch; unknown ids land on the finder.
    pub start_view: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("stt_command", &self.stt_command)
            .field("language", &self.language)
            .field("start_view", &self.start_view)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            stt_command: None,
            language: None,
            start_view: None,
        }
    }

    pub fn from_env() -> Result<Self, StartupConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StartupConfigError> {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| non_blank(*name))
            .ok_or(StartupConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_blank(MODEL_VAR) {
            config.model = model;
        }
        if let Some(base) = non_blank(API_BASE_VAR) {
            config.api_base = base;
        }
        if let Some(raw) = non_blank(TIMEOUT_VAR) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| StartupConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        config.stt_command = non_blank(STT_COMMAND_VAR);
        if let Some(raw) = non_blank(LANGUAGE_VAR) {
            let language =
                Language::from_code(&raw).ok_or_else(|| StartupConfigError::InvalidLanguage {
                    var: LANGUAGE_VAR,
                    value: raw.clone(),
                })?;
            config.language = Some(language);
        }
        config.start_view = non_blank(START_VIEW_VAR);
        Ok(config)
    }

    #[cfg(test)]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    #[cfg(test)]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).expect_err("no key should fail");
        assert!(matches!(err, StartupConfigError::MissingApiKey));
        assert!(err.to_string().starts_with("[CONFIG_INVALID]"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("API_KEY", "   ")]))
            .expect_err("blank key should fail");
        assert!(matches!(err, StartupConfigError::MissingApiKey));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k-123")]))
            .expect("key alone should be enough");
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.stt_command.is_none());
        assert!(config.language.is_none());
        assert!(config.start_view.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "k"),
            (MODEL_VAR, "gemini-2.0-flash"),
            (API_BASE_VAR, "http://localhost:9999"),
            (TIMEOUT_VAR, "5"),
            (STT_COMMAND_VAR, "whisper-listen --short"),
            (LANGUAGE_VAR, "HI"),
            (START_VIEW_VAR, "chat"),
        ]))
        .expect("overrides should parse");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_base, "http://localhost:9999");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.stt_command.as_deref(), Some("whisper-listen --short"));
        assert_eq!(config.language, Some(Language::Hi));
        assert_eq!(config.start_view.as_deref(), Some("chat"));
    }

    #[test]
    fn unsupported_language_is_rejected() {
        let err = Config::from_lookup(lookup(&[("API_KEY", "k"), (LANGUAGE_VAR, "fr")]))
            .expect_err("fr is not bundled");
        assert!(matches!(err, StartupConfigError::InvalidLanguage { .. }));
    }

    #[test]
    fn zero_or_garbage_timeout_is_rejected() {
        for raw in ["0", "soon"] {
            let err = Config::from_lookup(lookup(&[("API_KEY", "k"), (TIMEOUT_VAR, raw)]))
                .expect_err("invalid timeout should fail");
            assert!(matches!(err, StartupConfigError::InvalidTimeout { .. }));
        }
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = Config::new("secret-key");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
