//! Speech output through the platform text-to-speech synthesizer.

pub mod tts;

pub use tts::{
    SpeechCommand, SpeechConfig, SpeechEngine, SpeechEvent, SpeechPipeline, DEFAULT_LANGUAGE,
};
