//! Speech synthesis: provider chain, audio caching, playback.
//!
//! Components:
//! - `provider`: the `SpeechProvider` trait and the cloud/on-device backends
//! - `cache`: two-tier (memory LRU + durable base64 files) audio cache
//! - `playback`: rodio decode + sink playback with cancellation
//! - `manager`: the speak state machine tying the three together

pub mod azure;
pub mod cache;
pub mod elevenlabs;
pub mod espeak;
pub mod google;
pub mod manager;
pub mod playback;
pub mod provider;

use thiserror::Error;

/// Errors surfaced by the speech layer.
///
/// A single failed provider is recovered internally by advancing down the
/// chain; only chain exhaustion and playback failures reach the caller.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Provider lacks credentials. Raised at chain construction, where it
    /// means "skip this provider", never during `speak`.
    #[error("provider '{provider}' is not configured")]
    Unconfigured { provider: &'static str },

    /// A configured provider's call failed; the chain moves on.
    #[error("provider '{provider}' call failed: {reason}")]
    ProviderCall {
        provider: &'static str,
        reason: String,
    },

    /// Every provider in the chain failed.
    #[error("all speech providers failed")]
    AllProvidersFailed,

    /// Synthesized audio could not be decoded or played. Not retried
    /// against another provider.
    #[error("audio playback failed: {0}")]
    Playback(String),
}
