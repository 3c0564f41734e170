//! Shared helpers for unit tests.

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::i18n::TranslationStore;
use crate::services::error::ServiceError;
use crate::services::gemini::{GenerateRequest, GenerativeBackend};
use crate::settings::SettingsContext;

/// Backend that answers from a queue and records every request.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, ServiceError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedBackend {
    pub fn with_replies(replies: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<String, ServiceError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Request("script exhausted".into())))
    }
}

pub fn sample_schemes_json(count: usize) -> String {
    let schemes: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "schemeName": format!("Scheme {n}"),
                "description": "Monthly support for persons with disabilities.",
                "eligibility": ["Indian citizen", "Disability of 40% or more"],
                "benefits": ["Monthly pension"],
                "documentsRequired": ["UDID card", "Aadhaar card"],
                "applicationProcess": "Apply online at the state portal",
            })
        })
        .collect();
    serde_json::Value::Array(schemes).to_string()
}

pub fn settings_context() -> SettingsContext {
    let store = TranslationStore::builtin().expect("bundled locale packs should parse");
    SettingsContext::new(Arc::new(store))
}
