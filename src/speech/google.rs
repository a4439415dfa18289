//! Google Cloud text-to-speech client.
//!
//! Unlike the other cloud backends, Google wraps the audio in JSON: the
//! response carries a base64 `audioContent` field that must be decoded
//! before caching or playback.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::json;

use super::provider::{SpeechProvider, Synthesis};
use super::SpeechError;
use crate::config::GoogleConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct GoogleProvider {
    config: GoogleConfig,
    client: Client,
}

impl GoogleProvider {
    pub fn from_config(config: &GoogleConfig) -> Result<Self, SpeechError> {
        if !config.is_configured() {
            return Err(SpeechError::Unconfigured { provider: "google" });
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpeechError::ProviderCall {
                provider: "google",
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }
}

#[async_trait]
impl SpeechProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    fn quality(&self) -> u8 {
        4
    }

    fn cost_per_1k_chars(&self) -> f64 {
        0.16
    }

    async fn synthesize(&self, text: &str) -> Result<Synthesis, SpeechError> {
        let url = format!(
            "https://texttospeech.googleapis.com/v1/text:synthesize?key={}",
            self.config.api_key
        );
        let body = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": "ja-JP",
                "name": self.config.voice_name,
            },
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": self.config.speaking_rate,
                "pitch": 0,
            },
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::ProviderCall {
                provider: "google",
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(SpeechError::ProviderCall {
                provider: "google",
                reason: format!("API returned status {}", resp.status()),
            });
        }

        let data: serde_json::Value =
            resp.json().await.map_err(|e| SpeechError::ProviderCall {
                provider: "google",
                reason: format!("failed to parse response JSON: {e}"),
            })?;

        let audio_content = data["audioContent"]
            .as_str()
            .ok_or_else(|| SpeechError::ProviderCall {
                provider: "google",
                reason: "response missing audioContent".into(),
            })?;

        let audio = BASE64
            .decode(audio_content)
            .map_err(|e| SpeechError::ProviderCall {
                provider: "google",
                reason: format!("audioContent is not valid base64: {e}"),
            })?;
        Ok(Synthesis::Audio(audio))
    }
}
