//! ElevenLabs text-to-speech client.
//!
//! Highest-quality (and most expensive) voice in the chain. POSTs JSON to
//! the voice endpoint and receives an MP3 body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::provider::{SpeechProvider, Synthesis};
use super::SpeechError;
use crate::config::ElevenLabsConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ElevenLabsProvider {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsProvider {
    pub fn from_config(config: &ElevenLabsConfig) -> Result<Self, SpeechError> {
        if !config.is_configured() {
            return Err(SpeechError::Unconfigured {
                provider: "elevenlabs",
            });
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpeechError::ProviderCall {
                provider: "elevenlabs",
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    fn name(&self) -> &'static str {
        "elevenlabs"
    }

    fn quality(&self) -> u8 {
        5
    }

    fn cost_per_1k_chars(&self) -> f64 {
        0.30
    }

    async fn synthesize(&self, text: &str) -> Result<Synthesis, SpeechError> {
        let url = format!(
            "https://api.elevenlabs.io/v1/text-to-speech/{}",
            self.config.voice_id
        );
        let body = json!({
            "text": text,
            "model_id": self.config.model,
            "voice_settings": {
                "stability": self.config.stability,
                "similarity_boost": self.config.similarity_boost,
                "style": 0.0,
                "use_speaker_boost": true,
            },
        });

        let resp = self
            .client
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::ProviderCall {
                provider: "elevenlabs",
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(SpeechError::ProviderCall {
                provider: "elevenlabs",
                reason: format!("API returned status {}", resp.status()),
            });
        }

        let audio = resp.bytes().await.map_err(|e| SpeechError::ProviderCall {
            provider: "elevenlabs",
            reason: format!("failed to read audio body: {e}"),
        })?;
        Ok(Synthesis::Audio(audio.to_vec()))
    }
}
