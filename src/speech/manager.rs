//! The voice manager: provider chain, cache check, playback.
//!
//! Per speak request: CacheCheck → ProviderAttempt → Playback → Done.
//! Provider attempts are strictly sequential within one call so a single
//! request never pays two cloud providers. Calls are not serialized or
//! coalesced against each other; overlapping callers may overlap audio.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::azure::AzureProvider;
use super::cache::{cache_key, AudioCache, CacheStats};
use super::elevenlabs::ElevenLabsProvider;
use super::espeak::EspeakProvider;
use super::google::GoogleProvider;
use super::playback::AudioOutput;
use super::provider::{ProviderInfo, SpeechProvider, Synthesis};
use super::SpeechError;
use crate::config::Config;

pub struct VoiceManager {
    // Quality-ordered; the on-device fallback, when present, is always last
    providers: Vec<Arc<dyn SpeechProvider>>,
    // Kept concretely for utterance cancellation
    fallback: Option<Arc<EspeakProvider>>,
    // Index of the last provider that served a request; used for cache
    // lookups and display, not as a health record
    current: AtomicUsize,
    cache: Arc<AudioCache>,
    output: Arc<dyn AudioOutput>,
    speaking: AtomicBool,
}

impl VoiceManager {
    /// Build the chain from explicit configuration. Providers without
    /// credentials are skipped; the on-device fallback is always appended.
    pub fn from_config(config: &Config, cache: Arc<AudioCache>, output: Arc<dyn AudioOutput>) -> Self {
        let mut providers: Vec<Arc<dyn SpeechProvider>> = Vec::new();

        match ElevenLabsProvider::from_config(&config.elevenlabs) {
            Ok(p) => providers.push(Arc::new(p)),
            Err(e) => debug!("Skipping provider: {e}"),
        }
        match AzureProvider::from_config(&config.azure) {
            Ok(p) => providers.push(Arc::new(p)),
            Err(e) => debug!("Skipping provider: {e}"),
        }
        match GoogleProvider::from_config(&config.google) {
            Ok(p) => providers.push(Arc::new(p)),
            Err(e) => debug!("Skipping provider: {e}"),
        }

        let fallback = Arc::new(EspeakProvider::new(&config.fallback));
        providers.push(fallback.clone());

        info!(
            "Voice provider chain: [{}]",
            providers.iter().map(|p| p.name()).collect::<Vec<_>>().join(" > ")
        );

        Self {
            providers,
            fallback: Some(fallback),
            current: AtomicUsize::new(0),
            cache,
            output,
            speaking: AtomicBool::new(false),
        }
    }

    /// Build from an explicit provider list. Used by tests to stub the
    /// chain; the list is taken as-is, fallback included or not.
    pub fn with_providers(
        providers: Vec<Arc<dyn SpeechProvider>>,
        cache: Arc<AudioCache>,
        output: Arc<dyn AudioOutput>,
    ) -> Self {
        Self {
            providers,
            fallback: None,
            current: AtomicUsize::new(0),
            cache,
            output,
            speaking: AtomicBool::new(false),
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::Relaxed)
    }

    /// Name of the provider that served the last request (initially the
    /// chain head).
    pub fn current_provider(&self) -> &'static str {
        self.providers
            .get(self.current.load(Ordering::Relaxed))
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn provider_table(&self) -> Vec<ProviderInfo> {
        self.providers.iter().map(|p| ProviderInfo::of(p.as_ref())).collect()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Speak `text`, resolving when audio finishes (or the fallback
    /// utterance completes).
    pub async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.speaking.store(true, Ordering::Relaxed);
        let result = self.speak_inner(text).await;
        self.speaking.store(false, Ordering::Relaxed);
        result
    }

    async fn speak_inner(&self, text: &str) -> Result<(), SpeechError> {
        if self.providers.is_empty() {
            return Err(SpeechError::AllProvidersFailed);
        }

        // CacheCheck, keyed by the active provider
        let active = self.current.load(Ordering::Relaxed).min(self.providers.len() - 1);
        let key = cache_key(self.providers[active].name(), text);
        if let Some(audio) = self.cache.get(&key) {
            debug!("Cache hit for {}", self.providers[active].name());
            return self.output.play(audio).await;
        }

        // ProviderAttempt: head-first, strictly sequential
        for (i, provider) in self.providers.iter().enumerate() {
            match provider.synthesize(text).await {
                Ok(Synthesis::Rendered) => {
                    self.current.store(i, Ordering::Relaxed);
                    return Ok(());
                }
                Ok(Synthesis::Audio(audio)) => {
                    self.current.store(i, Ordering::Relaxed);
                    let key = cache_key(provider.name(), text);
                    self.cache.insert_memory(&key, audio.clone());

                    // Durable write never blocks or fails the speak path
                    let cache = self.cache.clone();
                    let payload = audio.clone();
                    tokio::task::spawn_blocking(move || cache.persist(&key, &payload));

                    return self.output.play(audio).await;
                }
                Err(e) => {
                    warn!("Voice provider {} failed: {e}", provider.name());
                }
            }
        }

        Err(SpeechError::AllProvidersFailed)
    }

    /// Stop in-flight playback and any running fallback utterance. Callers
    /// invoke this before issuing a new speak request.
    pub fn cancel(&self) {
        self.output.cancel();
        if let Some(fallback) = &self.fallback {
            fallback.cancel();
        }
        self.speaking.store(false, Ordering::Relaxed);
    }
}
