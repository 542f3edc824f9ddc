//! Prompt templates for every feature operation.

use crate::ai::{CompletionRequest, PromptBuilder};
use crate::constants::budget;
use crate::types::ConversationTurn;

/// System instructions
pub mod system {
    pub const MODERATION: &str =
        "You are a content moderation assistant. Respond only with valid JSON.";
    pub const SPAM: &str = "You are a spam detection assistant. Respond only with valid JSON.";
    pub const SENTIMENT: &str =
        "You are a sentiment analysis assistant. Respond only with valid JSON.";
    pub const HASHTAGS: &str =
        "You are a social media expert specializing in hashtag recommendations.";
    pub const REPLIES: &str =
        "You are a helpful assistant that generates engaging social media replies.";
    pub const TRENDING: &str =
        "You are a trend analysis assistant. Respond only with valid JSON array.";
    pub const SUMMARY: &str = "You are a helpful assistant that summarizes conversations.";
    pub const ENHANCE: &str =
        "You are a social media writing coach. Respond only with valid JSON.";
    pub const ASCII_ART: &str = "You are a creative AI artist that generates detailed ASCII art. Create beautiful, detailed ASCII art based on the user's description. Use standard ASCII characters to create recognizable images.";
}

const JSON_ONLY: &str = "Respond ONLY in JSON format:";

pub fn moderation(content: &str) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .checklist(
            "Analyze the following text for inappropriate content. Check for:",
            &[
                "Hate speech, harassment, or bullying",
                "Violence or graphic content",
                "Sexual or adult content",
                "Spam or misleading information",
                "Personal attacks or threats",
            ],
        )
        .labeled("Text to analyze", content)
        .json_format(
            JSON_ONLY,
            r#"
{
    "is_safe": true/false,
    "reason": "brief explanation if not safe, empty string if safe",
    "categories": ["list", "of", "violations"] or []
}"#,
        )
        .build();

    CompletionRequest::instructed(system::MODERATION, prompt, budget::MODERATION)
}

pub fn spam(content: &str, post_count: Option<u32>) -> CompletionRequest {
    let mut builder = PromptBuilder::new()
        .instruction("Analyze if this content is spam or suspicious:")
        .quoted(content);
    if let Some(count) = post_count {
        builder = builder.hint(&format!("User has posted {} times today.", count));
    }

    let prompt = builder
        .checklist(
            "Check for:",
            &[
                "Excessive links or promotional content",
                "Repetitive messages",
                "Suspicious URLs",
                "Get-rich-quick schemes",
                "Phishing attempts",
                "Too many hashtags (spam indicator)",
            ],
        )
        .json_format(
            JSON_ONLY,
            r#"
{
    "is_spam": true/false,
    "confidence": number between 0 and 1,
    "reason": "brief explanation"
}"#,
        )
        .build();

    CompletionRequest::instructed(system::SPAM, prompt, budget::SPAM)
}

pub fn sentiment(content: &str) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction("Analyze the sentiment and emotions in this text:")
        .quoted(content)
        .json_format(
            JSON_ONLY,
            r#"
{
    "sentiment": "positive" or "negative" or "neutral",
    "score": number between -1 (very negative) and 1 (very positive),
    "emotions": ["list", "of", "primary", "emotions"]
}"#,
        )
        .custom("Common emotions: joy, sadness, anger, fear, surprise, love, excitement, frustration, hope")
        .build();

    CompletionRequest::instructed(system::SENTIMENT, prompt, budget::SENTIMENT)
}

pub fn hashtags(content: &str, count: usize) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction(&format!(
            "Generate {} relevant hashtags for this social media post:",
            count
        ))
        .quoted(content)
        .requirements(&[
            "Make them relevant to the content",
            "Keep them concise (1-2 words)",
            "Mix popular and specific tags",
            "Return ONLY hashtags, one per line",
            "Do NOT include the # symbol",
        ])
        .custom("Example format:\nTechnology\nInnovation\nAI")
        .build();

    CompletionRequest::instructed(system::HASHTAGS, prompt, budget::HASHTAGS)
}

pub fn replies(content: &str, count: usize) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction(&format!(
            "Generate {} brief, engaging reply suggestions (max 100 characters each) for this social media post:",
            count
        ))
        .quoted(content)
        .requirements(&[
            "Keep replies natural and conversational",
            "Match the tone of the original post",
            "Make them diverse (supportive, question, funny/light)",
            "Keep under 100 characters each",
        ])
        .custom(&format!(
            "Respond with ONLY the suggestions, one per line, numbered 1-{}.",
            count
        ))
        .build();

    CompletionRequest::instructed(system::REPLIES, prompt, budget::REPLIES)
}

/// `posts` must already be capped by the caller
pub fn trending(posts: &[&str], count: usize) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction(&format!(
            "Analyze these social media posts and identify the top {} trending topics or themes:",
            count
        ))
        .block(&posts.join("\n"))
        .json_format(
            "Respond ONLY in JSON format as an array:",
            r#"
[
    {"topic": "topic name", "relevance": 0.95},
    {"topic": "topic name", "relevance": 0.87}
]"#,
        )
        .custom("Relevance should be between 0 and 1.")
        .build();

    CompletionRequest::instructed(system::TRENDING, prompt, budget::TRENDING)
}

/// `turns` must already be capped by the caller
pub fn summary(turns: &[ConversationTurn]) -> CompletionRequest {
    let transcript = turns
        .iter()
        .map(|t| format!("{}: {}", t.speaker, t.text))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = PromptBuilder::new()
        .instruction("Summarize this conversation in 1-2 sentences:")
        .block(&transcript)
        .custom("Keep the summary concise and capture the main points.")
        .build();

    CompletionRequest::instructed(system::SUMMARY, prompt, budget::SUMMARY)
}

pub fn enhance(content: &str) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction(
            "Improve this social media post to make it more engaging while keeping the original message:",
        )
        .labeled("Original", content)
        .requirements(&[
            "Keep it under 280 characters",
            "Maintain the original tone and message",
            "Make it more engaging and clear",
            "Fix any grammar issues",
        ])
        .json_format(
            "Respond in JSON format:",
            r#"
{
    "improved_content": "the improved version",
    "suggestions": ["tip1", "tip2", "tip3"]
}"#,
        )
        .build();

    CompletionRequest::instructed(system::ENHANCE, prompt, budget::ENHANCE)
}

pub fn ascii_art(description: &str) -> CompletionRequest {
    let prompt = PromptBuilder::new()
        .instruction(&format!("Create detailed ASCII art for: {}", description))
        .custom("Make it visually appealing and recognizable. Use at least 15-20 lines to make it detailed.")
        .build();

    CompletionRequest::instructed(system::ASCII_ART, prompt, budget::ASCII_ART)
}
