use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use crate::i18n::Language;
use crate::speech::SpeechError;

pub trait SpeechSynthesizer: Send {
    /// Start speaking `text`, replacing any utterance in progress.
    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError>;
    fn cancel(&mut self);
    /// False once the current utterance finished or was cancelled.
    fn is_speaking(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    Say,
    Espeak,
}

const CANDIDATES: [(&str, Engine); 3] = [
    ("say", Engine::Say),
    ("espeak-ng", Engine::Espeak),
    ("espeak", Engine::Espeak),
];

/// Speaks through the first TTS program found on `PATH`.
#[derive(Debug)]
pub struct CommandSynthesizer {
    program: PathBuf,
    engine: Engine,
    child: Option<Child>,
}

impl CommandSynthesizer {
    pub fn detect() -> Option<Self> {
        let found = CANDIDATES
            .iter()
            .find_map(|(name, engine)| which::which(name).ok().map(|path| (path, *engine)));

        match found {
            Some((program, engine)) => {
                tracing::info!(program = %program.display(), "text-to-speech available");
                Some(Self {
                    program,
                    engine,
                    child: None,
                })
            }
            None => {
                tracing::info!("no text-to-speech program found, read-aloud disabled");
                None
            }
        }
    }

    fn command(&self, text: &str, language: Language) -> Command {
        let mut command = Command::new(&self.program);
        if self.engine == Engine::Espeak {
            command.arg("-v").arg(language.code());
        }
        command
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        self.cancel();
        let child = self
            .command(text, language)
            .spawn()
            .map_err(|err| SpeechError::Spawn {
                program: self.program.display().to_string(),
                message: err.to_string(),
            })?;
        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                tracing::debug!(error = %err, "utterance already finished");
            }
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) | Err(_) => {
                self.child = None;
                false
            }
        }
    }
}

impl Drop for CommandSynthesizer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Tracks which scheme card is being read aloud.
pub struct Narrator {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    speaking: Option<usize>,
}

impl Narrator {
    pub fn new(synthesizer: Option<Box<dyn SpeechSynthesizer>>) -> Self {
        Self {
            synthesizer,
            speaking: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    pub fn speaking(&self) -> Option<usize> {
        self.speaking
    }

    /// Stop card `index` if it is being read, otherwise read it.
    pub fn toggle(&mut self, index: usize, text: &str, language: Language) -> Result<(), SpeechError> {
        let Some(synthesizer) = self.synthesizer.as_mut() else {
            return Ok(());
        };

        if self.speaking == Some(index) {
            synthesizer.cancel();
            self.speaking = None;
            return Ok(());
        }

        self.speaking = None;
        synthesizer.speak(text, language)?;
        self.speaking = Some(index);
        Ok(())
    }

    pub fn poll(&mut self) {
        if self.speaking.is_none() {
            return;
        }
        if let Some(synthesizer) = self.synthesizer.as_mut() {
            if !synthesizer.is_speaking() {
                self.speaking = None;
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.speaking.take().is_some() {
            if let Some(synthesizer) = self.synthesizer.as_mut() {
                synthesizer.cancel();
            }
        }
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use super::fake::{Call, FakeSynthesizer};
    use super::*;

    fn narrator() -> (Narrator, FakeSynthesizer) {
        let fake = FakeSynthesizer::default();
        (Narrator::new(Some(Box::new(fake.clone()))), fake)
    }

    #[test]
    fn toggling_the_same_card_stops_it() {
        let (mut narrator, fake) = narrator();
        narrator.toggle(0, "Scheme: A.", Language::En).expect("speak");
        assert_eq!(narrator.speaking(), Some(0));

        narrator.toggle(0, "Scheme: A.", Language::En).expect("stop");
        assert_eq!(narrator.speaking(), None);
        assert_eq!(fake.calls(), vec![Call::Speak("Scheme: A.".into()), Call::Cancel]);
    }

    #[test]
    fn natural_end_clears_speaking_on_poll() {
        let (mut narrator, fake) = narrator();
        narrator.toggle(1, "text", Language::Hi).expect("speak");
        narrator.poll();
        assert_eq!(narrator.speaking(), Some(1));

        fake.finish();
        narrator.poll();
        assert_eq!(narrator.speaking(), None);
    }

    #[test]
    fn cancel_only_touches_the_engine_when_speaking() {
        let (mut narrator, fake) = narrator();
        narrator.cancel();
        assert!(fake.calls().is_empty());

        narrator.toggle(0, "text", Language::En).expect("speak");
        narrator.cancel();
        assert_eq!(fake.calls().last(), Some(&Call::Cancel));
    }

    #[test]
    fn dropping_the_narrator_cancels_speech() {
        let (mut narrator, fake) = narrator();
        narrator.toggle(0, "text", Language::En).expect("speak");
        drop(narrator);
        assert_eq!(fake.calls().last(), Some(&Call::Cancel));
    }

    #[test]
    fn unavailable_narrator_is_inert() {
        let mut narrator = Narrator::new(None);
        assert!(!narrator.is_available());
        narrator.toggle(0, "text", Language::En).expect("no-op");
        assert_eq!(narrator.speaking(), None);
    }
}
