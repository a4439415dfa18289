//! The speech provider interface.
//!
//! Providers are ranked by voice quality and tried in a fixed order. Cloud
//! backends return a cacheable audio payload; the on-device fallback renders
//! speech itself and has nothing to cache.

use async_trait::async_trait;
use serde::Serialize;

use super::SpeechError;

/// Outcome of a synthesis request.
pub enum Synthesis {
    /// Encoded audio (MP3) to cache and play.
    Audio(Vec<u8>),
    /// The provider played the text directly; terminal, nothing to cache.
    Rendered,
}

/// A single speech backend.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Relative voice quality, 1 (robotic) to 5 (most natural).
    fn quality(&self) -> u8;

    /// Approximate cost per 1000 characters in USD.
    fn cost_per_1k_chars(&self) -> f64;

    async fn synthesize(&self, text: &str) -> Result<Synthesis, SpeechError>;
}

/// Provider row for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub quality: u8,
    pub cost_per_1k_chars: f64,
}

impl ProviderInfo {
    pub fn of(provider: &dyn SpeechProvider) -> Self {
        Self {
            name: provider.name(),
            quality: provider.quality(),
            cost_per_1k_chars: provider.cost_per_1k_chars(),
        }
    }
}
