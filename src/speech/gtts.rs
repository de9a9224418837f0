//! Google Translate TTS client
//!
//! Same endpoint the gTTS tooling uses: one GET per utterance returning an
//! MP3 buffer. Synthesis is synchronous so its failures propagate; the
//! playback that follows is fire-and-forget unless configured otherwise.

use log::debug;
use reqwest::blocking::Client;

use super::player::Player;
use super::{Speaker, SpeechError};

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Speed factor the endpoint maps to its slow voice
const SLOW_SPEED: &str = "0.24";
const NORMAL_SPEED: &str = "1.0";

/// Speaker backed by Google Translate TTS and the local audio device
pub struct GoogleSpeaker {
    client: Client,
    player: Player,
    lang: String,
    slow: bool,
    blocking: bool,
}

impl GoogleSpeaker {
    /// `lang` and `slow` are passed through to synthesis unchanged;
    /// `blocking` makes playback wait for audio completion.
    pub fn new(lang: &str, slow: bool, blocking: bool) -> Result<Self, SpeechError> {
        Ok(GoogleSpeaker {
            client: Client::new(),
            player: Player::new()?,
            lang: lang.to_string(),
            slow,
            blocking,
        })
    }

    fn fetch(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .get(TTS_ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.lang.as_str()),
                ("ttsspeed", if self.slow { SLOW_SPEED } else { NORMAL_SPEED }),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status(status));
        }
        Ok(response.bytes()?.to_vec())
    }
}

impl Speaker for GoogleSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        if text.is_empty() {
            // Zero-length trial: nothing to say.
            return Ok(());
        }

        debug!(
            "synthesizing {:?} (lang={}, slow={})",
            text, self.lang, self.slow
        );
        let audio = self.fetch(text)?;
        self.player.play(audio, self.blocking)
    }
}
