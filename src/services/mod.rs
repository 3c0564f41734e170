pub mod chat;
pub mod error;
pub mod gemini;
pub mod schemes;

use eframe::egui;
use std::sync::{mpsc, Arc, OnceLock};
use tokio::runtime::Handle;

use crate::event::AppEvent;
use crate::i18n::Language;
use crate::speech::SpeechRecognizer;
use chat::ChatService;
use gemini::GenerativeBackend;
use schemes::{SchemeQuery, SchemeService};

/// Runs service calls on the tokio runtime and posts their results back to
/// the UI as [`AppEvent`]s.
#[derive(Clone)]
pub struct ServiceHub {
    runtime: Handle,
    tx: mpsc::Sender<AppEvent>,
    schemes: Arc<SchemeService>,
    chat: Arc<ChatService>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    repaint: Arc<OnceLock<egui::Context>>,
}

impl ServiceHub {
    pub fn new(
        runtime: Handle,
        tx: mpsc::Sender<AppEvent>,
        backend: Arc<dyn GenerativeBackend>,
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
    ) -> Self {
        Self {
            runtime,
            tx,
            schemes: Arc::new(SchemeService::new(Arc::clone(&backend))),
            chat: Arc::new(ChatService::new(backend)),
            recognizer,
            repaint: Arc::new(OnceLock::new()),
        }
    }

    /// Wake the UI whenever a result is posted.
    pub fn attach_repaint(&self, ctx: egui::Context) {
        let _ = self.repaint.set(ctx);
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    fn post(
        tx: &mpsc::Sender<AppEvent>,
        repaint: &OnceLock<egui::Context>,
        event: AppEvent,
    ) {
        if tx.send(event).is_err() {
            tracing::warn!("event channel closed, dropping result");
            return;
        }
        if let Some(ctx) = repaint.get() {
            ctx.request_repaint();
        }
    }

    pub fn find_schemes(&self, request_id: u64, query: SchemeQuery) {
        let tx = self.tx.clone();
        let repaint = Arc::clone(&self.repaint);
        let schemes = Arc::clone(&self.schemes);

        self.runtime.spawn(async move {
            let result = schemes.find_schemes(&query).await;
            Self::post(&tx, &repaint, AppEvent::SchemesResolved { request_id, result });
        });
    }

    pub fn send_chat(&self, message: String) {
        let tx = self.tx.clone();
        let repaint = Arc::clone(&self.repaint);
        let chat = Arc::clone(&self.chat);

        self.runtime.spawn(async move {
            let result = chat.send(&message).await;
            Self::post(&tx, &repaint, AppEvent::ChatReplied(result));
        });
    }

    pub fn listen(&self, language: Language) {
        let Some(recognizer) = self.recognizer.clone() else {
            return;
        };
        let tx = self.tx.clone();
        let repaint = Arc::clone(&self.repaint);

        self.runtime.spawn(async move {
            let result = recognizer.listen(language).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "speech recognition failed");
            }
            Self::post(&tx, &repaint, AppEvent::TranscriptReady(result));
        });
    }
}
