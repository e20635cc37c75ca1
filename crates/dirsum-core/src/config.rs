//! Configuration handling for dirsum.json

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    Result, DEFAULT_API_BASE, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_P, SUMMARY_CHAR_LIMIT,
};

/// Configuration stored in dirsum.json
///
/// The API key is never stored here; it comes from the command line or the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Completion model ID
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint base URL; requests go to `{api_base}/{model}:generateContent`
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum generated tokens per request
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Characters of content sent for each summary
    #[serde(default = "default_summary_char_limit")]
    pub summary_char_limit: usize,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_top_p() -> f32 {
    DEFAULT_TOP_P
}

fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

fn default_summary_char_limit() -> usize {
    SUMMARY_CHAR_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
            summary_char_limit: default_summary_char_limit(),
        }
    }
}

impl Config {
    /// Load config from a JSON file, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
