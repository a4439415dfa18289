//! Provider-chain behavior: fallback order, caching, playback failures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use kanjimatch::speech::cache::{cache_key, AudioCache};
use kanjimatch::speech::manager::VoiceManager;
use kanjimatch::speech::playback::{AudioOutput, SilentOutput};
use kanjimatch::speech::provider::{SpeechProvider, Synthesis};
use kanjimatch::speech::SpeechError;

/// Scripted provider: fails, renders directly, or returns its name as the
/// audio payload. Counts synthesis calls.
struct StubProvider {
    name: &'static str,
    fails: bool,
    renders: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    fn cloud(name: &'static str, fails: bool) -> Arc<Self> {
        Arc::new(Self {
            name,
            fails,
            renders: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn on_device(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fails: false,
            renders: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SpeechProvider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn quality(&self) -> u8 {
        if self.renders {
            1
        } else {
            5
        }
    }

    fn cost_per_1k_chars(&self) -> f64 {
        0.0
    }

    async fn synthesize(&self, _text: &str) -> Result<Synthesis, SpeechError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fails {
            return Err(SpeechError::ProviderCall {
                provider: self.name,
                reason: "stubbed failure".into(),
            });
        }
        if self.renders {
            return Ok(Synthesis::Rendered);
        }
        Ok(Synthesis::Audio(self.name.as_bytes().to_vec()))
    }
}

/// Output that counts plays.
#[derive(Default)]
struct CountingOutput {
    plays: AtomicUsize,
}

#[async_trait]
impl AudioOutput for CountingOutput {
    async fn play(&self, _audio: Vec<u8>) -> Result<(), SpeechError> {
        self.plays.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn cancel(&self) {}
}

/// Output whose device is broken.
struct FailingOutput;

#[async_trait]
impl AudioOutput for FailingOutput {
    async fn play(&self, _audio: Vec<u8>) -> Result<(), SpeechError> {
        Err(SpeechError::Playback("no sound device".into()))
    }

    fn cancel(&self) {}
}

fn manager_with(
    providers: Vec<Arc<StubProvider>>,
    cache: Arc<AudioCache>,
    output: Arc<dyn AudioOutput>,
) -> VoiceManager {
    let chain: Vec<Arc<dyn SpeechProvider>> = providers
        .into_iter()
        .map(|p| p as Arc<dyn SpeechProvider>)
        .collect();
    VoiceManager::with_providers(chain, cache, output)
}

#[tokio::test]
async fn failed_provider_falls_back_and_caches_under_the_successful_one() {
    let a = StubProvider::cloud("a", true);
    let b = StubProvider::cloud("b", false);
    let cache = Arc::new(AudioCache::new(16));
    let manager = manager_with(vec![a.clone(), b.clone()], cache.clone(), Arc::new(SilentOutput));

    manager.speak("こんにちは").await.unwrap();

    assert_eq!(a.call_count(), 1);
    assert_eq!(b.call_count(), 1);
    assert_eq!(manager.current_provider(), "b");
    assert_eq!(cache.get(&cache_key("b", "こんにちは")), Some(b"b".to_vec()));
    assert_eq!(cache.get(&cache_key("a", "こんにちは")), None);
}

#[tokio::test]
async fn repeated_request_is_served_from_cache() {
    let b = StubProvider::cloud("b", false);
    let manager = manager_with(vec![b.clone()], Arc::new(AudioCache::new(16)), Arc::new(SilentOutput));

    manager.speak("ありがとう").await.unwrap();
    manager.speak("ありがとう").await.unwrap();

    // Second call is a cache hit: exactly one synthesis
    assert_eq!(b.call_count(), 1);
}

#[tokio::test]
async fn cache_lookups_follow_the_provider_that_last_succeeded() {
    let a = StubProvider::cloud("a", true);
    let b = StubProvider::cloud("b", false);
    let manager = manager_with(vec![a.clone(), b.clone()], Arc::new(AudioCache::new(16)), Arc::new(SilentOutput));

    manager.speak("みず").await.unwrap();
    manager.speak("みず").await.unwrap();

    // The second call finds the entry under "b" without touching "a" again
    assert_eq!(a.call_count(), 1);
    assert_eq!(b.call_count(), 1);
}

#[tokio::test]
async fn on_device_fallback_keeps_the_chain_from_exhausting() {
    let a = StubProvider::cloud("a", true);
    let b = StubProvider::cloud("b", true);
    let device = StubProvider::on_device("espeak");
    let output = Arc::new(CountingOutput::default());
    let cache = Arc::new(AudioCache::new(16));
    let manager = manager_with(
        vec![a, b, device.clone()],
        cache.clone(),
        output.clone(),
    );

    manager.speak("ねこ").await.unwrap();

    assert_eq!(device.call_count(), 1);
    // Rendered speech bypasses both caching and playback
    assert_eq!(output.plays.load(Ordering::Relaxed), 0);
    assert_eq!(cache.stats().memory_entries, 0);
    assert_eq!(manager.current_provider(), "espeak");
}

#[tokio::test]
async fn empty_chain_rejects() {
    let manager = VoiceManager::with_providers(
        Vec::new(),
        Arc::new(AudioCache::new(16)),
        Arc::new(SilentOutput),
    );

    let err = manager.speak("はい").await.unwrap_err();
    assert!(matches!(err, SpeechError::AllProvidersFailed));
}

#[tokio::test]
async fn exhausted_chain_rejects() {
    let a = StubProvider::cloud("a", true);
    let b = StubProvider::cloud("b", true);
    let manager = manager_with(vec![a, b], Arc::new(AudioCache::new(16)), Arc::new(SilentOutput));

    let err = manager.speak("いいえ").await.unwrap_err();
    assert!(matches!(err, SpeechError::AllProvidersFailed));
}

#[tokio::test]
async fn playback_failure_surfaces_without_retrying_providers() {
    let b = StubProvider::cloud("b", false);
    let manager = manager_with(vec![b.clone()], Arc::new(AudioCache::new(16)), Arc::new(FailingOutput));

    let err = manager.speak("とり").await.unwrap_err();
    assert!(matches!(err, SpeechError::Playback(_)));
    // The audio was synthesized once; the failure is not retried elsewhere
    assert_eq!(b.call_count(), 1);
}

#[tokio::test]
async fn durable_tier_serves_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    let disk = |capacity| {
        kanjimatch::speech::cache::DiskCache::new(dir.path().to_path_buf(), capacity)
    };

    let b = StubProvider::cloud("b", false);
    let cache = Arc::new(AudioCache::new(16).with_disk(disk(8)));
    let manager = manager_with(vec![b.clone()], cache, Arc::new(SilentOutput));
    manager.speak("うみ").await.unwrap();

    // Give the fire-and-forget persist a moment to land
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // New session: empty memory tier, same directory
    let b2 = StubProvider::cloud("b", false);
    let cache2 = Arc::new(AudioCache::new(16).with_disk(disk(8)));
    let manager2 = manager_with(vec![b2.clone()], cache2, Arc::new(SilentOutput));
    manager2.speak("うみ").await.unwrap();

    assert_eq!(b2.call_count(), 0);
}
