pub mod jokes;
pub mod prefs;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum JokeboxError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Speech error: {0}")]
    SpeechError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<reqwest::Error> for JokeboxError {
    fn from(e: reqwest::Error) -> Self {
        JokeboxError::HttpError(e.to_string())
    }
}

impl From<serde_json::Error> for JokeboxError {
    fn from(e: serde_json::Error) -> Self {
        JokeboxError::DecodeError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JokeboxError>;
