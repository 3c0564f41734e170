//! Optional OS speech capabilities, detected at startup.

pub mod recognition;
pub mod synthesis;

pub use recognition::{CommandRecognizer, SpeechRecognizer};
pub use synthesis::{CommandSynthesizer, Narrator, SpeechSynthesizer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("failed to start {program}: {message}")]
    Spawn { program: String, message: String },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}
