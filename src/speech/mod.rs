//! Speech synthesis and playback
//!
//! The session loop consumes a single capability: speak a line of text in
//! the configured language. The default implementation fetches MP3 audio
//! from the Google Translate TTS endpoint and plays it through the default
//! output device.
//!
//! # Components
//! - `gtts.rs`: synthesis client (blocking HTTP, one request per utterance)
//! - `player.rs`: audio output, detached by default

pub mod gtts;
pub mod player;

pub use gtts::GoogleSpeaker;
pub use player::Player;

use thiserror::Error;

/// Failures from synthesis or the output device. Never retried; they
/// terminate the session without a summary.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("synthesis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("synthesis endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("audio output unavailable: {0}")]
    Device(String),

    #[error("could not decode synthesized audio: {0}")]
    Decode(String),
}

/// The one capability the session loop consumes
pub trait Speaker {
    /// Render `text` audibly. Implementations must not block on audio
    /// completion unless explicitly configured for synchronous playback.
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}
