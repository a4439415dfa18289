//! Two-tier audio cache keyed by (provider, text).
//!
//! The memory tier is a bounded LRU for the current session; the durable
//! tier is a directory of base64-encoded payload files that survives
//! restarts. Both tiers have explicit capacities, the cache is passed to the
//! voice manager as a value rather than reached through ambient state, and
//! durable writes are best-effort: a failed write is logged, counted, and
//! never surfaced into the speak path.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use tracing::{debug, warn};

/// Cache key for one synthesized utterance. Different providers render
/// different audio for the same text, so both parts matter.
pub fn cache_key(provider: &str, text: &str) -> String {
    format!("{provider}__{text}")
}

/// Counters for the status endpoint and for tests observing evictions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub memory_entries: usize,
    pub memory_evictions: u64,
    pub disk_entries: usize,
    pub persist_failures: u64,
}

/// Session-lifetime LRU tier.
struct MemoryTier {
    capacity: usize,
    entries: HashMap<String, Vec<u8>>,
    // Front is least recently used
    order: VecDeque<String>,
    evictions: u64,
}

impl MemoryTier {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            evictions: 0,
        }
    }

    fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let value = self.entries.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    fn insert(&mut self, key: String, value: Vec<u8>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.contains_key(&key) {
            self.entries.insert(key.clone(), value);
            self.touch(&key);
            return;
        }
        while self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                self.evictions += 1;
            } else {
                break;
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let k = self.order.remove(pos).unwrap();
            self.order.push_back(k);
        }
    }
}

/// Durable tier: one base64 file per key under a cache directory, bounded by
/// an entry budget with oldest-first eviction.
pub struct DiskCache {
    dir: PathBuf,
    capacity: usize,
    persist_failures: AtomicU64,
}

impl DiskCache {
    pub fn new(dir: PathBuf, capacity: usize) -> Self {
        Self {
            dir,
            capacity,
            persist_failures: AtomicU64::new(0),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.dir.join(format!("{:016x}.b64", hasher.finish()))
    }

    /// Read a payload back. Absence is a normal miss.
    pub fn load(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        let encoded = fs::read_to_string(&path).ok()?;
        match BASE64.decode(encoded.trim()) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Discarding corrupt cache entry {}: {e}", path.display());
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// Best-effort write. Failures are counted, never propagated.
    pub fn store(&self, key: &str, audio: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        if let Err(e) = self.try_store(key, audio) {
            self.persist_failures.fetch_add(1, Ordering::Relaxed);
            warn!("Failed to persist audio cache entry: {e}");
        }
    }

    fn try_store(&self, key: &str, audio: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.evict_to_fit()?;
        let path = self.entry_path(key);
        fs::write(&path, BASE64.encode(audio))?;
        debug!("Persisted audio cache entry to {}", path.display());
        Ok(())
    }

    /// Remove oldest entries until one slot is free.
    fn evict_to_fit(&self) -> std::io::Result<()> {
        let mut entries: Vec<(PathBuf, std::time::SystemTime)> = fs::read_dir(&self.dir)?
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "b64") {
                    let modified = entry.metadata().ok()?.modified().ok()?;
                    Some((path, modified))
                } else {
                    None
                }
            })
            .collect();

        if entries.len() < self.capacity {
            return Ok(());
        }
        entries.sort_by_key(|(_, modified)| *modified);
        let excess = entries.len() + 1 - self.capacity;
        for (path, _) in entries.into_iter().take(excess) {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        fs::read_dir(&self.dir)
            .map(|dir| {
                dir.flatten()
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "b64"))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }
}

/// The cache handed to the voice manager.
pub struct AudioCache {
    memory: Mutex<MemoryTier>,
    disk: Option<DiskCache>,
}

impl AudioCache {
    /// Memory-only cache with the given LRU capacity.
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory: Mutex::new(MemoryTier::new(memory_capacity)),
            disk: None,
        }
    }

    /// Attach a durable tier.
    pub fn with_disk(mut self, disk: DiskCache) -> Self {
        self.disk = Some(disk);
        self
    }

    /// Memory tier first, then the durable tier; durable hits are promoted
    /// into memory for the rest of the session.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        if let Some(hit) = self.memory.lock().unwrap().get(key) {
            return Some(hit);
        }
        let bytes = self.disk.as_ref()?.load(key)?;
        self.memory.lock().unwrap().insert(key.to_string(), bytes.clone());
        Some(bytes)
    }

    /// Store into the memory tier only; callers persist separately so the
    /// speak path never waits on disk.
    pub fn insert_memory(&self, key: &str, audio: Vec<u8>) {
        self.memory.lock().unwrap().insert(key.to_string(), audio);
    }

    /// Best-effort durable write (blocking file I/O).
    pub fn persist(&self, key: &str, audio: &[u8]) {
        if let Some(disk) = &self.disk {
            disk.store(key, audio);
        }
    }

    pub fn stats(&self) -> CacheStats {
        let memory = self.memory.lock().unwrap();
        CacheStats {
            memory_entries: memory.entries.len(),
            memory_evictions: memory.evictions,
            disk_entries: self.disk.as_ref().map(DiskCache::entry_count).unwrap_or(0),
            persist_failures: self
                .disk
                .as_ref()
                .map(DiskCache::persist_failures)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lru_evicts_least_recently_used_first() {
        let cache = AudioCache::new(2);
        cache.insert_memory("a", vec![1]);
        cache.insert_memory("b", vec![2]);
        // touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get("a"), Some(vec![1]));
        cache.insert_memory("c", vec![3]);

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(vec![1]));
        assert_eq!(cache.get("c"), Some(vec![3]));
        assert_eq!(cache.stats().memory_evictions, 1);
    }

    #[test]
    fn reinserting_a_key_does_not_evict() {
        let cache = AudioCache::new(2);
        cache.insert_memory("a", vec![1]);
        cache.insert_memory("a", vec![9]);
        cache.insert_memory("b", vec![2]);
        assert_eq!(cache.get("a"), Some(vec![9]));
        assert_eq!(cache.stats().memory_evictions, 0);
    }

    #[test]
    fn disk_tier_round_trips_binary_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AudioCache::new(4).with_disk(DiskCache::new(dir.path().to_path_buf(), 8));
        let key = cache_key("azure", "こんにちは");
        cache.persist(&key, &[0xff, 0x00, 0x7f]);

        // A fresh cache over the same directory sees the entry
        let reopened = AudioCache::new(4).with_disk(DiskCache::new(dir.path().to_path_buf(), 8));
        assert_eq!(reopened.get(&key), Some(vec![0xff, 0x00, 0x7f]));
    }

    #[test]
    fn disk_tier_evicts_oldest_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let disk = DiskCache::new(dir.path().to_path_buf(), 2);
        disk.store("first", &[1]);
        std::thread::sleep(std::time::Duration::from_millis(20));
        disk.store("second", &[2]);
        std::thread::sleep(std::time::Duration::from_millis(20));
        disk.store("third", &[3]);

        assert_eq!(disk.entry_count(), 2);
        assert_eq!(disk.load("first"), None);
        assert_eq!(disk.load("third"), Some(vec![3]));
    }

    #[test]
    fn persist_failure_is_counted_not_raised() {
        // A file where the cache directory should be makes every write fail
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("not-a-dir");
        fs::write(&blocked, b"occupied").unwrap();

        let disk = DiskCache::new(blocked, 8);
        disk.store("key", &[1, 2, 3]);
        assert_eq!(disk.persist_failures(), 1);
        assert_eq!(disk.load("key"), None);
    }

    #[test]
    fn absent_key_is_a_normal_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AudioCache::new(4).with_disk(DiskCache::new(dir.path().to_path_buf(), 8));
        assert_eq!(cache.get(&cache_key("elevenlabs", "never spoken")), None);
    }
}
