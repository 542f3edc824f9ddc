//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/chirp-insight/) and project (.chirp-insight/)
//! level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{limits, network, render};
use crate::types::{InsightError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Completion provider settings
    pub llm: LlmConfig,

    /// Publishing gate settings
    pub moderation: ModerationConfig,

    /// ASCII-art rendering settings
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            moderation: ModerationConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.llm.timeout_secs == 0 {
            return Err(InsightError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.llm.provider.as_str(), "openai" | "ollama") {
            return Err(InsightError::Config(format!(
                "Unknown provider: {}. Supported: openai, ollama",
                self.llm.provider
            )));
        }

        if !(0.0..=1.0).contains(&self.moderation.spam_reject_threshold) {
            return Err(InsightError::Config(format!(
                "moderation.spam_reject_threshold must be between 0.0 and 1.0, got {}",
                self.moderation.spam_reject_threshold
            )));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: "openai" (any OpenAI-compatible endpoint) or "ollama"
    pub provider: String,

    /// Model name
    pub model: String,

    /// Endpoint base URL; provider default when unset
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_base: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Moderation Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Spam confidence above which a post is rejected
    pub spam_reject_threshold: f64,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            spam_reject_threshold: limits::SPAM_REJECT_THRESHOLD,
        }
    }
}

// =============================================================================
// Render Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory receiving the text and PNG artifacts
    pub output_dir: PathBuf,

    /// TrueType fonts tried in order before the built-in bitmap font
    pub font_candidates: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(render::DEFAULT_OUTPUT_DIR),
            font_candidates: vec![
                PathBuf::from("consola.ttf"),
                PathBuf::from("cour.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSansMono.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf"),
                PathBuf::from("/System/Library/Fonts/Supplemental/Courier New.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\consola.ttf"),
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
