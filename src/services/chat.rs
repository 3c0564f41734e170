use std::sync::Arc;
use tokio::sync::Mutex;

use crate::services::error::ServiceError;
use crate::services::gemini::{GenerateRequest, GenerativeBackend, Turn};

pub const SYSTEM_INSTRUCTION: &str = "You are an empathetic and helpful AI assistant for \"Sahayata\", an app for people with disabilities in India. Your goal is to provide clear, simple, and encouraging information about government schemes, documentation, and accessibility. Do not give medical or legal advice. Keep responses concise and easy to understand.";

#[derive(Debug, Clone)]
struct ChatSession {
    system_instruction: String,
    history: Vec<Turn>,
}

impl ChatSession {
    fn new() -> Self {
        tracing::info!("chat session started");
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            history: Vec::new(),
        }
    }
}

/// Owns the one conversational session of the process. The session is
/// created on the first `send` and kept until the service is dropped.
pub struct ChatService {
    backend: Arc<dyn GenerativeBackend>,
    session: Mutex<Option<ChatSession>>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            session: Mutex::new(None),
        }
    }

    /// Send one user turn with the full prior history. The history only
    /// grows when the reply arrives; a failed turn leaves it untouched.
    pub async fn send(&self, message: &str) -> Result<String, ServiceError> {
        let mut slot = self.session.lock().await;
        let session = slot.get_or_insert_with(ChatSession::new);

        let mut contents = session.history.clone();
        contents.push(Turn::user(message));
        let request = GenerateRequest {
            system_instruction: Some(session.system_instruction.clone()),
            contents,
            response_schema: None,
        };

        match self.backend.generate(request).await {
            Ok(reply) => {
                session.history.push(Turn::user(message));
                session.history.push(Turn::model(reply.clone()));
                tracing::debug!(turns = session.history.len(), "chat turn completed");
                Ok(reply)
            }
            Err(err) => {
                tracing::error!(code = err.code(), error = %err, "chat turn failed");
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub async fn history_len(&self) -> usize {
        self.session
            .lock()
            .await
            .as_ref()
            .map(|session| session.history.len())
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub async fn has_session(&self) -> bool {
        self.session.lock().await.is_some()
    }
}
