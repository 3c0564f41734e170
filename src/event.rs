use crate::services::error::ServiceError;
use crate::services::schemes::Scheme;
use crate::speech::SpeechError;

/// Results of background work, delivered to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SchemesResolved {
        request_id: u64,
        result: Result<Vec<Scheme>, ServiceError>,
    },
    ChatReplied(Result<String, ServiceError>),
    TranscriptReady(Result<String, SpeechError>),
}
