use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chunker::ENTIRE_DOCUMENT;
use crate::error::{Result, TocChunkError};

/// Default directory name for tocchunk settings.
const TOCCHUNK_DIR: &str = ".tocchunk";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Project-level configuration resolved from a root directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory the configuration belongs to.
    pub project_root: PathBuf,
    /// Path to the `.tocchunk/` directory.
    pub config_dir: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: Settings,
}

/// User-configurable settings from .tocchunk/config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chunking: ChunkingSettings,
    pub transcription: TranscriptionSettings,
    pub output: OutputSettings,
}

/// Outline chunking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    /// Title of the single chunk produced for documents without bookmarks.
    pub fallback_title: String,
    /// Log a warning when pages before the first bookmark are dropped.
    pub warn_on_leading_gap: bool,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            fallback_title: ENTIRE_DOCUMENT.into(),
            warn_on_leading_gap: true,
        }
    }
}

/// Recording and confidence-gate settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    /// Capture sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channels per captured frame.
    pub channels: u16,
    /// Language hint passed to the model.
    pub language: String,
    /// Prompt that primes the model's decoder.
    pub initial_prompt: Option<String>,
    /// Reject when the mean segment `avg_logprob` falls below this.
    pub min_avg_logprob: f64,
    /// Reject when the mean segment `no_speech_prob` rises above this.
    pub max_no_speech_prob: f64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            channels: 1,
            language: "en".into(),
            initial_prompt: Some("The text is in English.".into()),
            min_avg_logprob: -3.0,
            max_no_speech_prob: 0.5,
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: "minified" (default) or "pretty".
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "minified".into(),
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_dir = project_root.join(TOCCHUNK_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            config_dir,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| TocChunkError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from config.toml if it exists and parses.
    fn load_settings(config_path: &Path) -> Option<Settings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Save current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| TocChunkError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn pretty_output(&self) -> bool {
        self.settings.output.format == "pretty"
    }
}
