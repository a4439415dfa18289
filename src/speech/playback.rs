//! Audio playback for synthesized speech.
//!
//! Providers hand back encoded MP3; playback decodes it and plays it on a
//! rodio sink, polling for completion so an in-flight utterance can be
//! cancelled. The `AudioOutput` trait keeps playback injectable: the service
//! uses the rodio device, headless deployments and tests use the silent one.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::SpeechError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Something that can play one encoded audio payload to completion.
#[async_trait]
pub trait AudioOutput: Send + Sync {
    /// Play the payload, resolving when it finishes or is cancelled.
    async fn play(&self, audio: Vec<u8>) -> Result<(), SpeechError>;

    /// Stop the current payload, if any.
    fn cancel(&self);
}

/// Default speaker-backed output.
pub struct RodioOutput {
    // Kept alive for the output's lifetime; in rodio 0.21 the stream is the
    // handle itself
    output_stream: OutputStream,
    active_sink: Arc<Mutex<Option<Sink>>>,
    cancel_flag: Arc<AtomicBool>,
}

impl RodioOutput {
    pub fn new() -> Result<Self, SpeechError> {
        let output_stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| SpeechError::Playback(format!("failed to open audio output: {e}")))?;
        Ok(Self {
            output_stream,
            active_sink: Arc::new(Mutex::new(None)),
            cancel_flag: Arc::new(AtomicBool::new(false)),
        })
    }
}

#[async_trait]
impl AudioOutput for RodioOutput {
    async fn play(&self, audio: Vec<u8>) -> Result<(), SpeechError> {
        self.cancel_flag.store(false, Ordering::Relaxed);

        let source = Decoder::new(Cursor::new(audio))
            .map_err(|e| SpeechError::Playback(format!("failed to decode audio: {e}")))?;

        let sink = Sink::connect_new(self.output_stream.mixer());
        sink.append(source);
        *self.active_sink.lock().unwrap() = Some(sink);

        let cancel_flag = self.cancel_flag.clone();
        let active_sink = self.active_sink.clone();

        // Poll for completion or cancellation off the async runtime
        tokio::task::spawn_blocking(move || loop {
            let is_empty = {
                let guard = active_sink.lock().unwrap();
                match guard.as_ref() {
                    Some(s) => s.empty(),
                    None => true,
                }
            };
            if is_empty {
                return;
            }
            if cancel_flag.load(Ordering::Relaxed) {
                if let Some(sink) = active_sink.lock().unwrap().take() {
                    sink.stop();
                }
                debug!("Playback cancelled");
                return;
            }
            std::thread::sleep(POLL_INTERVAL);
        })
        .await
        .map_err(|e| SpeechError::Playback(format!("playback task failed: {e}")))?;

        *self.active_sink.lock().unwrap() = None;
        Ok(())
    }

    fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
        if let Some(sink) = self.active_sink.lock().unwrap().take() {
            sink.stop();
        }
    }
}

/// Output that discards audio. Used on headless hosts and in tests.
#[derive(Default)]
pub struct SilentOutput;

#[async_trait]
impl AudioOutput for SilentOutput {
    async fn play(&self, _audio: Vec<u8>) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel(&self) {}
}
