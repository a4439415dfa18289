//! On-device fallback speech engine.
//!
//! Drives an `espeak-ng` subprocess with a Japanese voice. Unlike the cloud
//! backends it renders audio itself and returns nothing to cache; it is the
//! guaranteed last entry in the provider chain, so a lower-quality voice is
//! always preferred over silence.

use std::process::Stdio;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tracing::debug;

use super::provider::{SpeechProvider, Synthesis};
use super::SpeechError;
use crate::config::FallbackConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct EspeakProvider {
    config: FallbackConfig,
    // Current utterance process, exposed for cancellation
    child: Mutex<Option<Child>>,
}

impl EspeakProvider {
    pub fn new(config: &FallbackConfig) -> Self {
        Self {
            config: config.clone(),
            child: Mutex::new(None),
        }
    }

    /// Kill the current utterance, if any.
    pub fn cancel(&self) {
        if let Some(mut child) = self.child.lock().unwrap().take() {
            let _ = child.start_kill();
            debug!("Fallback utterance cancelled");
        }
    }
}

#[async_trait]
impl SpeechProvider for EspeakProvider {
    fn name(&self) -> &'static str {
        "espeak"
    }

    fn quality(&self) -> u8 {
        1
    }

    fn cost_per_1k_chars(&self) -> f64 {
        0.0
    }

    async fn synthesize(&self, text: &str) -> Result<Synthesis, SpeechError> {
        let child = Command::new(&self.config.command)
            .arg("-v")
            .arg(&self.config.voice)
            .arg("-s")
            .arg(self.config.words_per_minute.to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::ProviderCall {
                provider: "espeak",
                reason: format!("failed to spawn '{}': {e}", self.config.command),
            })?;

        *self.child.lock().unwrap() = Some(child);

        // Poll for completion; an empty slot means cancel() took the child.
        loop {
            let outcome = {
                let mut guard = self.child.lock().unwrap();
                match guard.as_mut() {
                    None => Some(Ok(())),
                    Some(c) => match c.try_wait() {
                        Ok(Some(status)) if status.success() => {
                            guard.take();
                            Some(Ok(()))
                        }
                        Ok(Some(status)) => {
                            guard.take();
                            Some(Err(SpeechError::ProviderCall {
                                provider: "espeak",
                                reason: format!("process exited with {status}"),
                            }))
                        }
                        Ok(None) => None,
                        Err(e) => {
                            guard.take();
                            Some(Err(SpeechError::ProviderCall {
                                provider: "espeak",
                                reason: format!("failed to wait on process: {e}"),
                            }))
                        }
                    },
                }
            };

            match outcome {
                Some(Ok(())) => return Ok(Synthesis::Rendered),
                Some(Err(e)) => return Err(e),
                None => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }
    }
}
