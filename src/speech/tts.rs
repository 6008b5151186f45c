//! Text-to-speech implementation on top of the platform synthesizer
//!
//! This module wraps the OS speech synthesizer (speech-dispatcher, SAPI or
//! AVFoundation depending on platform) behind a worker thread that owns the
//! handle for the lifetime of the process. Utterances are fire-and-forget
//! with last-call-wins semantics; no completion signal is consumed.

use crate::{JokeboxError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread;
use tracing::{debug, error, info, warn};
use tts::Tts;

/// Default BCP-47 language tag used to pick a voice.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Lower bound for the rate multiplier.
pub const MIN_RATE_MULTIPLIER: f32 = 0.25;

/// Upper bound for the rate multiplier.
pub const MAX_RATE_MULTIPLIER: f32 = 4.0;

/// Configuration for the speech engine
#[derive(Clone, Debug)]
pub struct SpeechConfig {
    /// Language tag used to pick a voice.
    pub language: String,

    /// Rate multiplier relative to the platform's normal rate (1.0 = normal).
    pub rate: f32,

    /// Maximum queue size for pending commands.
    pub queue_size: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            rate: 1.0,
            queue_size: 16,
        }
    }
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voice language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the rate multiplier, clamped to a usable range.
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate.clamp(MIN_RATE_MULTIPLIER, MAX_RATE_MULTIPLIER);
        self
    }
}

/// Command sent to the speech worker
#[derive(Clone, Debug)]
pub enum SpeechCommand {
    /// Speak the given text, interrupting any in-progress utterance
    Speak(String),

    /// Stop any in-progress utterance
    Stop,

    /// Shut down the worker
    Shutdown,
}

/// Event emitted by the speech worker
#[derive(Clone, Debug)]
pub enum SpeechEvent {
    /// An error occurred during synthesis or playback
    Error(String),

    /// Worker has shut down
    Shutdown,
}

/// Speech engine wrapping the platform synthesizer handle.
pub struct SpeechEngine {
    tts: Tts,
}

impl SpeechEngine {
    /// Create a new engine and apply the configured voice and rate.
    ///
    /// Voice and rate support vary by backend; unsupported settings are
    /// skipped with a log entry rather than failing construction.
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        let mut tts = Tts::default()
            .map_err(|e| JokeboxError::SpeechError(format!("Synthesizer init failed: {e}")))?;

        let features = tts.supported_features();

        if features.rate {
            let rate = (tts.normal_rate() * config.rate).clamp(tts.min_rate(), tts.max_rate());
            if let Err(e) = tts.set_rate(rate) {
                warn!("Failed to set speech rate: {}", e);
            }
        }

        if features.voice {
            Self::select_voice(&mut tts, &config.language);
        }

        info!("Speech engine initialized");

        Ok(Self { tts })
    }

    fn select_voice(tts: &mut Tts, language: &str) {
        let voices = match tts.voices() {
            Ok(voices) => voices,
            Err(e) => {
                warn!("Failed to enumerate voices: {}", e);
                return;
            }
        };

        let voice = voices
            .iter()
            .find(|v| v.language().as_str().eq_ignore_ascii_case(language))
            .or_else(|| {
                voices
                    .iter()
                    .find(|v| language_matches(v.language().as_str(), language))
            });

        match voice {
            Some(voice) => {
                if let Err(e) = tts.set_voice(voice) {
                    warn!("Failed to set voice {}: {}", voice.id(), e);
                }
            }
            None => warn!("No voice found for language {}", language),
        }
    }

    /// Submit an utterance, interrupting any in-progress speech.
    ///
    /// Fire-and-forget: no completion signal is consumed by the caller.
    pub fn speak(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);

        self.tts
            .speak(text, true)
            .map(|_| ())
            .map_err(|e| JokeboxError::SpeechError(e.to_string()))
    }

    /// Stop any in-progress utterance.
    pub fn stop(&mut self) -> Result<()> {
        self.tts
            .stop()
            .map(|_| ())
            .map_err(|e| JokeboxError::SpeechError(e.to_string()))
    }
}

/// Match a voice language against a wanted tag by primary subtag,
/// so "en-GB" still satisfies a request for "en-US" when no exact match exists.
fn language_matches(voice: &str, wanted: &str) -> bool {
    primary_subtag(voice).eq_ignore_ascii_case(primary_subtag(wanted))
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Speech pipeline with channel-based communication.
///
/// The worker thread owns the synthesizer for the whole process lifetime:
/// started once at startup, torn down with [`SpeechCommand::Shutdown`].
pub struct SpeechPipeline {
    /// Configuration
    config: SpeechConfig,

    /// Command sender
    command_tx: Sender<SpeechCommand>,

    /// Command receiver (for worker)
    command_rx: Receiver<SpeechCommand>,

    /// Event sender (for worker)
    event_tx: Sender<SpeechEvent>,

    /// Event receiver
    event_rx: Receiver<SpeechEvent>,
}

impl SpeechPipeline {
    /// Create a new speech pipeline
    pub fn new(config: SpeechConfig) -> Self {
        let (command_tx, command_rx) = bounded(config.queue_size);
        let (event_tx, event_rx) = bounded(config.queue_size);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<SpeechCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<SpeechEvent> {
        self.event_rx.clone()
    }

    /// Start the pipeline worker thread.
    /// Returns the JoinHandle for the worker thread.
    pub fn start_worker(self) -> thread::JoinHandle<()> {
        let config = self.config.clone();
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            info!("Speech worker starting");

            // The synthesizer handle is created on the worker thread and
            // never leaves it.
            let mut engine = match SpeechEngine::new(&config) {
                Ok(engine) => engine,
                Err(e) => {
                    error!("Failed to initialize speech engine: {}", e);
                    let _ = event_tx.send(SpeechEvent::Error(e.to_string()));
                    let _ = event_tx.send(SpeechEvent::Shutdown);
                    return;
                }
            };

            loop {
                match command_rx.recv() {
                    Ok(SpeechCommand::Speak(text)) => {
                        if let Err(e) = engine.speak(&text) {
                            warn!("Speech output failed: {}", e);
                            let _ = event_tx.send(SpeechEvent::Error(e.to_string()));
                        }
                    }

                    Ok(SpeechCommand::Stop) => {
                        if let Err(e) = engine.stop() {
                            warn!("Speech stop failed: {}", e);
                        }
                    }

                    Ok(SpeechCommand::Shutdown) => {
                        let _ = engine.stop();
                        info!("Speech worker shutting down");
                        let _ = event_tx.send(SpeechEvent::Shutdown);
                        break;
                    }

                    Err(e) => {
                        error!("Command channel error: {}", e);
                        break;
                    }
                }
            }

            info!("Speech worker stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = SpeechConfig::default();
        assert_eq!(config.language, "en-US");
        assert_eq!(config.rate, 1.0);
        assert!(config.queue_size > 0);
    }

    #[test]
    fn config_builder() {
        let config = SpeechConfig::new().with_language("de-DE").with_rate(1.5);

        assert_eq!(config.language, "de-DE");
        assert!((config.rate - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn config_rate_is_clamped() {
        let too_slow = SpeechConfig::new().with_rate(0.0);
        assert!((too_slow.rate - MIN_RATE_MULTIPLIER).abs() < f32::EPSILON);

        let too_fast = SpeechConfig::new().with_rate(100.0);
        assert!((too_fast.rate - MAX_RATE_MULTIPLIER).abs() < f32::EPSILON);
    }

    #[test]
    fn language_matching() {
        assert!(language_matches("en-US", "en-US"));
        assert!(language_matches("en-GB", "en-US"));
        assert!(language_matches("en_AU", "en-US"));
        assert!(!language_matches("de-DE", "en-US"));
    }

    #[test]
    fn pipeline_creation() {
        let pipeline = SpeechPipeline::new(SpeechConfig::default());

        let cmd_tx = pipeline.command_sender();
        let event_rx = pipeline.event_receiver();

        // Commands queue without a worker attached.
        cmd_tx.send(SpeechCommand::Speak("hello".to_string())).unwrap();
        cmd_tx.send(SpeechCommand::Stop).unwrap();
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn command_variants() {
        let cmd = SpeechCommand::Speak("Yo mama".to_string());
        match cmd {
            SpeechCommand::Speak(text) => assert_eq!(text, "Yo mama"),
            _ => panic!("Wrong variant"),
        }

        assert!(matches!(SpeechCommand::Stop, SpeechCommand::Stop));
        assert!(matches!(SpeechCommand::Shutdown, SpeechCommand::Shutdown));
    }
}
