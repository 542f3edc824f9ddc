//! Multi-post commands: trending topics and conversation summaries.

use std::path::Path;
use tracing::warn;

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, read_lines};
use crate::types::{ConversationTurn, Result};

/// Trending topics over one post per line
pub async fn trends(ctx: &CommandContext, file: Option<&Path>, count: usize) -> Result<()> {
    let posts = read_lines(file)?;
    let topics = ctx.service.generate_trending_topics(&posts, count).await;
    Output::new().json(&topics)
}

/// Summary of a `speaker: text` transcript
pub async fn summarize(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let turns = parse_transcript(&read_lines(file)?);
    let summary = ctx.service.summarize_conversation(&turns).await;
    Output::new().json(&summary)
}

fn parse_transcript(lines: &[String]) -> Vec<ConversationTurn> {
    lines
        .iter()
        .filter_map(|line| {
            let turn = ConversationTurn::parse_line(line);
            if turn.is_none() {
                warn!("Skipping transcript line without speaker: {:?}", line);
            }
            turn
        })
        .collect()
}
