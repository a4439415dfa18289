//! Configuration management for kanjimatch-rs.
//!
//! Loads config from YAML files in standard locations. Which speech
//! providers join the chain is decided once, here, from explicit
//! configuration: a provider section without credentials is simply absent
//! from the chain, never a runtime error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub voice_id: String,
    pub model: String,
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".into(),
            model: "eleven_multilingual_v2".into(),
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

impl ElevenLabsConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.voice_id.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    pub api_key: String,
    pub region: String,
    pub voice_name: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: "eastus".into(),
            voice_name: "ja-JP-NanamiNeural".into(),
        }
    }
}

impl AzureConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.region.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    pub api_key: String,
    pub voice_name: String,
    pub speaking_rate: f32,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice_name: "ja-JP-Neural2-A".into(),
            speaking_rate: 0.9,
        }
    }
}

impl GoogleConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// On-device fallback engine. Always last in the chain, never skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub command: String,
    pub voice: String,
    pub words_per_minute: u32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            command: "espeak-ng".into(),
            voice: "ja".into(),
            words_per_minute: 140,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub memory_entries: usize,
    pub disk_entries: usize,
    /// Durable tier directory. Empty means `~/.kanjimatch-audio-cache`.
    pub dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            memory_entries: 128,
            disk_entries: 512,
            dir: String::new(),
        }
    }
}

impl CacheConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".kanjimatch-audio-cache")
        } else {
            PathBuf::from(&self.dir)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    /// Cycle start date (`YYYY-MM-DD`). Empty means the service start day.
    pub cycle_start: String,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            cycle_start: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 8772 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub elevenlabs: ElevenLabsConfig,
    pub azure: AzureConfig,
    pub google: GoogleConfig,
    pub fallback: FallbackConfig,
    pub cache: CacheConfig,
    pub daily: DailyConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./config.yaml
    /// 2. ~/.config/kanjimatch/config.yaml
    /// 3. /etc/kanjimatch/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("config.yaml")),
                dirs::home_dir().map(|h| h.join(".config/kanjimatch/config.yaml")),
                Some(PathBuf::from("/etc/kanjimatch/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }
}
