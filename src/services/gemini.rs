//! Gemini `generateContent` REST client.
//!
//! Both services talk to the provider through [`GenerativeBackend`], so tests
//! can swap in a scripted backend. [`GeminiClient`] is the only
//! implementation that touches the network.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::{Config, StartupConfigError};
use crate::services::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub contents: Vec<Turn>,
    /// When set, the reply is constrained to JSON matching this schema.
    pub response_schema: Option<Value>,
}

#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run one request and return the concatenated reply text.
    async fn generate(&self, request: GenerateRequest) -> Result<String, ServiceError>;
}

pub fn build_request_body(request: &GenerateRequest) -> Value {
    let contents: Vec<Value> = request
        .contents
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": [{ "text": turn.text }],
            })
        })
        .collect();

    let mut body = json!({ "contents": contents });

    if let Some(system) = &request.system_instruction {
        body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }

    if let Some(schema) = &request.response_schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }

    body
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
pub fn extract_reply_text(body: &str) -> Result<String, ServiceError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(format!("invalid response body: {e}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ServiceError::MalformedResponse(
            "response contained no candidate text".to_string(),
        ));
    }
    Ok(text)
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, StartupConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StartupConfigError::HttpClient(e.to_string()))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.api_base.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint,
            timeout_secs: config.request_timeout.as_secs().max(1),
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            ServiceError::Request(format!("Gemini request failed: {err}"))
        }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, ServiceError> {
        let body = build_request_body(&request);
        tracing::debug!(
            turns = request.contents.len(),
            structured = request.response_schema.is_some(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(ServiceError::Http {
                status: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        extract_reply_text(&text)
    }
}
