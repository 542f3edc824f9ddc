//! ASCII-art command

use std::path::Path;

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::types::{InsightError, Result};

pub async fn run(ctx: &CommandContext, prompt: &str, out: Option<&Path>) -> Result<()> {
    let pipeline = ctx.ascii_pipeline();
    let dir = out.unwrap_or(pipeline.output_dir());
    let artifact = pipeline.generate_into(prompt, dir).await;

    let output = Output::new();
    if !artifact.success {
        let message = artifact.error.clone().unwrap_or_default();
        output.json(&artifact)?;
        return Err(InsightError::Render(message));
    }

    println!("{}", artifact.raw_text);
    output.success(&format!("Saved {}", artifact.raster_path));
    output.json(&artifact)
}
