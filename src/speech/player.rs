//! Audio output through the default device
//!
//! Playback is detached by default: the sink keeps playing while the
//! session loop moves on to read the guess. Nothing cancels in-flight
//! audio when the session ends.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::SpeechError;

pub struct Player {
    // The stream must outlive every sink appended to it.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Player {
    /// Open the default output device for the session's lifetime
    pub fn new() -> Result<Self, SpeechError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| SpeechError::Device(e.to_string()))?;
        Ok(Player {
            _stream: stream,
            handle,
        })
    }

    /// Queue an encoded audio buffer. Detaches unless `blocking` is set.
    pub fn play(&self, audio: Vec<u8>, blocking: bool) -> Result<(), SpeechError> {
        let source =
            Decoder::new(Cursor::new(audio)).map_err(|e| SpeechError::Decode(e.to_string()))?;
        let sink =
            Sink::try_new(&self.handle).map_err(|e| SpeechError::Device(e.to_string()))?;
        sink.append(source);

        if blocking {
            sink.sleep_until_end();
        } else {
            sink.detach();
        }
        Ok(())
    }
}
