//! Failures of a single AI request.
//!
//! Panels never show these directly; they map any variant to a localized
//! message. The stable codes are for logs.

pub mod error_codes {
    pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
    pub const HTTP_STATUS: &str = "HTTP_STATUS";
    pub const TIMEOUT_ERROR: &str = "TIMEOUT_ERROR";
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Transport failure before a response arrived.
    #[error("[{}] {}", error_codes::REQUEST_FAILED, .0)]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("[{}] HTTP {status}: {message}", error_codes::HTTP_STATUS)]
    Http { status: u16, message: String },

    #[error("[{}] no response within {secs}s", error_codes::TIMEOUT_ERROR)]
    Timeout { secs: u64 },

    /// Missing candidate text, invalid JSON, or a payload that does not match
    /// the requested schema.
    #[error("[{}] {}", error_codes::MALFORMED_RESPONSE, .0)]
    MalformedResponse(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Request(_) => error_codes::REQUEST_FAILED,
            Self::Http { .. } => error_codes::HTTP_STATUS,
            Self::Timeout { .. } => error_codes::TIMEOUT_ERROR,
            Self::MalformedResponse(_) => error_codes::MALFORMED_RESPONSE,
        }
    }
}
