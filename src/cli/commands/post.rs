//! Single-post commands
//!
//! Each command runs one content-intelligence operation over a post given
//! as an argument (or on stdin) and prints the result as JSON.

use serde_json::json;

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::types::{Result, SpamContext};

pub async fn moderate(ctx: &CommandContext, content: &str) -> Result<()> {
    let verdict = ctx.service.moderate_content(content).await;
    Output::new().json(&verdict)
}

pub async fn spam(ctx: &CommandContext, content: &str, post_count: Option<u32>) -> Result<()> {
    let context = post_count.map(SpamContext::with_post_count).unwrap_or_default();
    let verdict = ctx.service.detect_spam(content, context).await;
    Output::new().json(&verdict)
}

pub async fn sentiment(ctx: &CommandContext, content: &str) -> Result<()> {
    let result = ctx.service.analyze_sentiment(content).await;
    Output::new().json(&result)
}

pub async fn hashtags(ctx: &CommandContext, content: &str, count: usize) -> Result<()> {
    let tags = ctx.service.suggest_hashtags(content, count).await;
    Output::new().json(&tags)
}

pub async fn replies(ctx: &CommandContext, content: &str, count: usize) -> Result<()> {
    let replies = ctx.service.generate_reply_suggestions(content, count).await;
    Output::new().json(&replies)
}

pub async fn enhance(ctx: &CommandContext, content: &str) -> Result<()> {
    let enhanced = ctx.service.enhance_content(content).await;
    Output::new().json(&enhanced)
}

/// Publishing gate, then post analysis when the post is allowed
pub async fn screen(ctx: &CommandContext, content: &str, post_count: Option<u32>) -> Result<()> {
    let context = post_count.map(SpamContext::with_post_count).unwrap_or_default();
    let decision = ctx.service.screen_post(content, context).await;

    let output = Output::new();
    let Some(message) = decision.message() else {
        let analysis = ctx.service.analyze_post(content).await;
        return output.json(&json!({ "decision": decision, "analysis": analysis }));
    };

    output.error(&message);
    output.json(&json!({ "decision": decision }))
}
