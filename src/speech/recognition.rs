use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

use crate::i18n::Language;
use crate::speech::SpeechError;

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listen once and return the transcript, possibly empty.
    async fn listen(&self, language: Language) -> Result<String, SpeechError>;
}

/// Runs a user-configured capture command. The language code is appended as
/// the last argument and stdout is the transcript.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandRecognizer {
    /// `None` when no command is configured or its program is not on `PATH`.
    pub fn from_command_line(command_line: Option<&str>) -> Option<Self> {
        let mut parts = command_line?.split_whitespace();
        let name = parts.next()?;
        match which::which(name) {
            Ok(program) => {
                tracing::info!(program = %program.display(), "speech recognition available");
                Some(Self {
                    program,
                    args: parts.map(String::from).collect(),
                })
            }
            Err(err) => {
                tracing::warn!(program = name, error = %err, "speech recognition command not found");
                None
            }
        }
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn listen(&self, language: Language) -> Result<String, SpeechError> {
        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(language.code())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| SpeechError::Spawn {
                program: program.clone(),
                message: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(SpeechError::Failed {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
