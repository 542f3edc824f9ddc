//! CLI Common Utilities
//!
//! Shared initialization and input handling for CLI commands.

use std::io::Read;
use std::path::Path;

use crate::config::{Config, ConfigLoader};
use crate::insight::ContentIntelligence;
use crate::render::AsciiArtPipeline;
use crate::types::{InsightError, Result};

/// Provider settings given on the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct LlmOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
}

impl LlmOverrides {
    fn apply(self, config: &mut Config) {
        if let Some(provider) = self.provider {
            config.llm.provider = provider;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
    }
}

/// Command execution context
///
/// Loads configuration once and builds the service every insight command
/// runs against.
#[derive(Clone)]
pub struct CommandContext {
    /// Effective configuration
    pub config: Config,
    /// Content-intelligence service bound to the configured provider
    pub service: ContentIntelligence,
}

impl CommandContext {
    /// Load config (defaults → global → project → env → CLI) and connect
    pub fn load(overrides: LlmOverrides) -> Result<Self> {
        let mut config = ConfigLoader::load()?;
        overrides.apply(&mut config);
        config.validate()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let service = ContentIntelligence::from_config(&config)?;
        Ok(Self { config, service })
    }

    /// ASCII-art pipeline sharing the service's gateway
    pub fn ascii_pipeline(&self) -> AsciiArtPipeline {
        AsciiArtPipeline::new(self.service.gateway().clone(), &self.config.render)
    }
}

/// Text from the argument, or stdin when absent or `-`
pub fn read_input(arg: Option<String>) -> Result<String> {
    let text = match arg {
        Some(text) if text != "-" => text,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(InsightError::Config("No input text provided".to_string()));
    }
    Ok(text)
}

/// Non-blank lines from `file`, or stdin when absent
pub fn read_lines(file: Option<&Path>) -> Result<Vec<String>> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_provider_and_model() {
        let mut config = Config::default();
        LlmOverrides {
            provider: Some("ollama".to_string()),
            model: Some("mistral".to_string()),
        }
        .apply(&mut config);

        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.model, "mistral");
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = Config::default();
        LlmOverrides::default().apply(&mut config);
        assert_eq!(config.llm.provider, "openai");
    }

    #[test]
    fn test_read_input_trims_argument() {
        assert_eq!(read_input(Some("  hi there \n".into())).unwrap(), "hi there");
    }

    #[test]
    fn test_read_lines_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.txt");
        std::fs::write(&path, "first post\n\n  \nsecond post\r\n").unwrap();

        let lines = read_lines(Some(&path)).unwrap();
        assert_eq!(lines, vec!["first post", "second post"]);
    }
}
