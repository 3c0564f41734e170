use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::services::error::ServiceError;
use crate::services::gemini::{GenerateRequest, GenerativeBackend, Turn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub scheme_name: String,
    pub description: String,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    pub documents_required: Vec<String>,
    pub application_process: String,
}

impl Scheme {
    /// Text read aloud for a scheme card.
    pub fn narration(&self) -> String {
        format!(
            "Scheme: {}. Description: {}. Eligibility: {}. Benefits: {}. Documents Required: {}. Application Process: {}.",
            self.scheme_name,
            self.description,
            self.eligibility.join(", "),
            self.benefits.join(", "),
            self.documents_required.join(", "),
            self.application_process,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeQuery {
    pub disability: String,
    pub age: String,
    pub location: String,
}

pub fn build_prompt(query: &SchemeQuery) -> String {
    format!(
        "Find relevant government schemes in India for a person with the following details:\n\
         - Disability Type: {}\n\
         - Age: {}\n\
         - Location / State: {}\n\n\
         Provide a list of 2-3 highly relevant schemes. For each scheme, give the name, a simple \
         description, key eligibility criteria, benefits, documents required, and the application process.",
        query.disability.trim(),
        query.age.trim(),
        query.location.trim(),
    )
}

/// Output schema in the provider's OpenAPI subset: an array of scheme
/// objects with every field required.
pub fn response_schema() -> Value {
    let string_list = |description: &str| {
        json!({
            "type": "ARRAY",
            "items": { "type": "STRING" },
            "description": description,
        })
    };

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "schemeName": {
                    "type": "STRING",
                    "description": "The official name of the government scheme.",
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief, simple explanation of the scheme's purpose.",
                },
                "eligibility": string_list("A list of key eligibility criteria for the applicant."),
                "benefits": string_list("A list of benefits provided by the scheme."),
                "documentsRequired": string_list("A list of documents needed to apply."),
                "applicationProcess": {
                    "type": "STRING",
                    "description": "A step-by-step guide on how to apply for the scheme.",
                },
            },
            "required": [
                "schemeName",
                "description",
                "eligibility",
                "benefits",
                "documentsRequired",
                "applicationProcess",
            ],
        },
    })
}

pub fn parse_schemes(text: &str) -> Result<Vec<Scheme>, ServiceError> {
    serde_json::from_str(text.trim())
        .map_err(|e| ServiceError::MalformedResponse(format!("scheme list did not match schema: {e}")))
}

pub struct SchemeService {
    backend: Arc<dyn GenerativeBackend>,
}

impl SchemeService {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub async fn find_schemes(&self, query: &SchemeQuery) -> Result<Vec<Scheme>, ServiceError> {
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Turn::user(build_prompt(query))],
            response_schema: Some(response_schema()),
        };

        let result = self
            .backend
            .generate(request)
            .await
            .and_then(|text| parse_schemes(&text));

        match &result {
            Ok(schemes) => tracing::debug!(count = schemes.len(), "schemes received"),
            Err(err) => tracing::error!(code = err.code(), error = %err, "scheme query failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_schemes_json, ScriptedBackend};

    fn query() -> SchemeQuery {
        SchemeQuery {
            disability: "Visual Impairment".into(),
            age: "34".into(),
            location: "Maharashtra".into(),
        }
    }

    #[test]
    fn prompt_embeds_all_three_criteria() {
        let prompt = build_prompt(&query());
        assert!(prompt.contains("Disability Type: Visual Impairment"));
        assert!(prompt.contains("Age: 34"));
        assert!(prompt.contains("Location / State: Maharashtra"));
        assert!(prompt.contains("2-3 highly relevant schemes"));
    }

    #[test]
    fn schema_requires_all_six_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"]
            .as_array()
            .expect("required list");
        assert_eq!(required.len(), 6);
        let properties = schema["items"]["properties"]
            .as_object()
            .expect("properties map");
        for name in required {
            let name = name.as_str().expect("field name");
            assert!(properties.contains_key(name), "{name} has no property");
        }
        assert_eq!(properties["benefits"]["items"]["type"], "STRING");
    }

    #[test]
    fn parse_accepts_padded_json() {
        let schemes = parse_schemes(&format!("\n  {}  \n", sample_schemes_json(2)))
            .expect("well-formed list should parse");
        assert_eq!(schemes.len(), 2);
        assert_eq!(schemes[0].documents_required.len(), 2);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = parse_schemes(r#"[{"schemeName": "X", "description": "Y"}]"#)
            .expect_err("incomplete scheme should fail");
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }

    #[test]
    fn parse_allows_empty_list() {
        assert!(parse_schemes("[]").expect("empty list").is_empty());
    }

    #[test]
    fn narration_concatenates_every_section() {
        let scheme = parse_schemes(&sample_schemes_json(1)).expect("sample")[0].clone();
        let text = scheme.narration();
        assert!(text.starts_with("Scheme: Scheme 1."));
        assert!(text.contains("Eligibility: Indian citizen, Disability of 40% or more."));
        assert!(text.ends_with("Application Process: Apply online at the state portal."));
    }

    #[tokio::test]
    async fn find_schemes_sends_structured_request() {
        let backend = Arc::new(ScriptedBackend::with_replies(vec![Ok(sample_schemes_json(3))]));
        let service = SchemeService::new(backend.clone());

        let schemes = service.find_schemes(&query()).await.expect("schemes");
        assert_eq!(schemes.len(), 3);

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].response_schema.is_some());
        assert!(requests[0].system_instruction.is_none());
    }

    #[tokio::test]
    async fn every_call_is_a_fresh_request() {
        let backend = Arc::new(ScriptedBackend::with_replies(vec![
            Ok(sample_schemes_json(1)),
            Ok(sample_schemes_json(1)),
        ]));
        let service = SchemeService::new(backend.clone());
        service.find_schemes(&query()).await.expect("first");
        service.find_schemes(&query()).await.expect("second");
        assert_eq!(backend.requests().len(), 2);
        assert_eq!(backend.requests()[1].contents.len(), 1);
    }

    #[tokio::test]
    async fn malformed_reply_is_a_service_error() {
        let backend = Arc::new(ScriptedBackend::with_replies(vec![Ok("not json".into())]));
        let service = SchemeService::new(backend);
        let err = service.find_schemes(&query()).await.expect_err("bad json");
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }
}
