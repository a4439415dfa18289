//! Azure Cognitive Services speech client.
//!
//! POSTs SSML to the regional endpoint and receives an MP3 body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::provider::{SpeechProvider, Synthesis};
use super::SpeechError;
use crate::config::AzureConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct AzureProvider {
    config: AzureConfig,
    client: Client,
}

impl AzureProvider {
    pub fn from_config(config: &AzureConfig) -> Result<Self, SpeechError> {
        if !config.is_configured() {
            return Err(SpeechError::Unconfigured { provider: "azure" });
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpeechError::ProviderCall {
                provider: "azure",
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    fn ssml(&self, text: &str) -> String {
        format!(
            r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xml:lang="ja-JP"><voice name="{}">{}</voice></speak>"#,
            self.config.voice_name,
            escape_xml(text),
        )
    }
}

#[async_trait]
impl SpeechProvider for AzureProvider {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn quality(&self) -> u8 {
        4
    }

    fn cost_per_1k_chars(&self) -> f64 {
        0.16
    }

    async fn synthesize(&self, text: &str) -> Result<Synthesis, SpeechError> {
        let url = format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.config.region
        );

        let resp = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", "audio-16khz-128kbitrate-mono-mp3")
            .header("User-Agent", "KanjiMatch")
            .body(self.ssml(text))
            .send()
            .await
            .map_err(|e| SpeechError::ProviderCall {
                provider: "azure",
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(SpeechError::ProviderCall {
                provider: "azure",
                reason: format!("API returned status {}", resp.status()),
            });
        }

        let audio = resp.bytes().await.map_err(|e| SpeechError::ProviderCall {
            provider: "azure",
            reason: format!("failed to read audio body: {e}"),
        })?;
        Ok(Synthesis::Audio(audio.to_vec()))
    }
}

/// Minimal XML escaping for text interpolated into SSML.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
