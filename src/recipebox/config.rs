use crate::error::{RecipeboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CHAT_WELCOME: &str =
    "Hello! I'm your recipe assistant. Ask me about pasta, chicken, desserts or substitutions.";

/// Configuration for recipebox, stored as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeboxConfig {
    /// Start every session with the sample recipe collection
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Lower bound of the simulated chat reply delay
    #[serde(default = "default_latency_min")]
    pub chat_latency_min_ms: u64,

    /// Upper bound of the simulated chat reply delay
    #[serde(default = "default_latency_max")]
    pub chat_latency_max_ms: u64,

    /// First message the assistant shows
    #[serde(default = "default_chat_welcome")]
    pub chat_welcome: String,

    /// How many ingredients the list view shows before "...and N more"
    #[serde(default = "default_ingredient_preview")]
    pub list_ingredient_preview: usize,
}

fn default_seed() -> bool {
    true
}

fn default_latency_min() -> u64 {
    1000
}

fn default_latency_max() -> u64 {
    3000
}

fn default_chat_welcome() -> String {
    DEFAULT_CHAT_WELCOME.to_string()
}

fn default_ingredient_preview() -> usize {
    3
}

impl Default for RecipeboxConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            chat_latency_min_ms: default_latency_min(),
            chat_latency_max_ms: default_latency_max(),
            chat_welcome: default_chat_welcome(),
            list_ingredient_preview: default_ingredient_preview(),
        }
    }
}

impl RecipeboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(RecipeboxError::Io)?;
        let config: RecipeboxConfig =
            serde_json::from_str(&content).map_err(RecipeboxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.save_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Save config to an explicit file, creating its parent directories
    pub fn save_file<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RecipeboxError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(RecipeboxError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeboxError::Io)?;
        Ok(())
    }

    /// The chat delay bounds, swapped if configured backwards
    pub fn chat_latency(&self) -> (Duration, Duration) {
        let (lo, hi) = if self.chat_latency_min_ms <= self.chat_latency_max_ms {
            (self.chat_latency_min_ms, self.chat_latency_max_ms)
        } else {
            (self.chat_latency_max_ms, self.chat_latency_min_ms)
        };
        (Duration::from_millis(lo), Duration::from_millis(hi))
    }
}
