//! ASCII-Art Rendering Pipeline
//!
//! Two stages:
//! 1. **Generation**: ask the gateway for ASCII art
//! 2. **Rasterization**: draw the art onto a dark canvas and persist the
//!    raw text and PNG side by side
//!
//! Nothing is written unless stage 1 produced text. Stage 2 writes both
//! files or neither.

mod artifact;
mod font;
mod raster;

pub use artifact::{ArtifactPaths, ArtifactWriter, next_token};
pub use font::{FontChain, FontStrategy, LoadedFont};
pub use raster::{canvas_size, encode_png, rasterize, split_lines};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::ai::CompletionGateway;
use crate::config::RenderConfig;
use crate::constants::{fallback, render};
use crate::insight::prompts;
use crate::types::{AsciiArtArtifact, Result};

/// Generates and persists ASCII-art images
#[derive(Clone)]
pub struct AsciiArtPipeline {
    gateway: Arc<dyn CompletionGateway>,
    fonts: FontChain,
    output_dir: PathBuf,
}

impl AsciiArtPipeline {
    pub fn new(gateway: Arc<dyn CompletionGateway>, config: &RenderConfig) -> Self {
        Self {
            gateway,
            fonts: FontChain::new(&config.font_candidates),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Replace the font chain
    pub fn with_fonts(mut self, fonts: FontChain) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate art for `description` into the configured directory
    pub async fn generate(&self, description: &str) -> AsciiArtArtifact {
        self.generate_into(description, &self.output_dir).await
    }

    /// Generate art for `description` into `dir` (created if absent)
    pub async fn generate_into(&self, description: &str, dir: &Path) -> AsciiArtArtifact {
        let request = prompts::ascii_art(description);
        let Some(art) = self.gateway.complete(&request).await else {
            warn!("ASCII art generation failed for {:?}", description);
            return AsciiArtArtifact::failed(description, fallback::ASCII_ART_FAILED);
        };

        match self.persist(&art, dir) {
            Ok(paths) => {
                info!(
                    "ASCII art saved: {} ({} lines)",
                    paths.raster_path,
                    split_lines(&art).len()
                );
                AsciiArtArtifact {
                    prompt: description.to_string(),
                    raw_text: art,
                    raster_path: paths.raster_path,
                    text_path: paths.text_path,
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!("ASCII art rendering failed: {}", e);
                AsciiArtArtifact {
                    raw_text: art,
                    ..AsciiArtArtifact::failed(description, format!("Image generation error: {}", e))
                }
            }
        }
    }

    fn persist(&self, art: &str, dir: &Path) -> Result<ArtifactPaths> {
        let font = self.fonts.resolve();
        let png = encode_png(&rasterize(art, &font))?;

        ArtifactWriter::new(dir).write_pair(
            next_token(),
            render::TEXT_KIND,
            art.as_bytes(),
            render::RASTER_KIND,
            &png,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::testing::ScriptedGateway;

    const CAT: &str = " /\\_/\\\n( o.o )\n > ^ <";

    fn pipeline(gateway: &Arc<ScriptedGateway>) -> AsciiArtPipeline {
        AsciiArtPipeline::new(gateway.clone(), &RenderConfig::default())
            .with_fonts(FontChain::builtin())
    }

    #[tokio::test]
    async fn test_gateway_absent_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("uploads");
        let gateway = ScriptedGateway::offline();

        let artifact = pipeline(&gateway).generate_into("a cat", &out).await;

        assert!(!artifact.success);
        assert_eq!(artifact.error.as_deref(), Some("Failed to generate ASCII art"));
        assert!(artifact.raster_path.is_empty());
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_success_writes_pair() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("uploads");
        let gateway = ScriptedGateway::replying(CAT);

        let artifact = pipeline(&gateway).generate_into("a cat", &out).await;

        assert!(artifact.success, "{:?}", artifact.error);
        assert_eq!(artifact.prompt, "a cat");
        assert_eq!(artifact.raw_text, CAT);
        assert!(artifact.raster_path.starts_with("uploads/ai_generated_"));
        assert!(artifact.text_path.starts_with("uploads/ascii_art_"));

        let text_file = root.path().join(&artifact.text_path);
        assert_eq!(std::fs::read_to_string(text_file).unwrap(), CAT);

        let png = image::open(root.path().join(&artifact.raster_path)).unwrap();
        assert_eq!(png.width(), 7 * 7 + 40);
        assert_eq!(png.height(), 3 * 14 + 40);
    }

    #[tokio::test]
    async fn test_request_budget() {
        let root = tempfile::tempdir().unwrap();
        let gateway = ScriptedGateway::offline();
        pipeline(&gateway).generate_into("a fox", root.path()).await;

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].temperature(), 0.9);
        assert_eq!(requests[0].max_tokens(), 1000);
        assert!(requests[0].user_prompt().unwrap().contains("a fox"));
    }

    #[tokio::test]
    async fn test_unwritable_dir_reports_error() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let gateway = ScriptedGateway::replying(CAT);

        let artifact = pipeline(&gateway).generate_into("a cat", &blocker).await;

        assert!(!artifact.success);
        assert!(
            artifact
                .error
                .as_deref()
                .unwrap()
                .starts_with("Image generation error:")
        );
    }
}
