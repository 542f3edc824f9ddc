use super::{ContentIntelligence, prompts};
use crate::ai::{BracketKind, extract_structure};
use crate::types::{Sentiment, SentimentResult, json_f64, json_string, json_string_array};

impl ContentIntelligence {
    /// Classify polarity and detect emotions
    pub async fn analyze_sentiment(&self, content: &str) -> SentimentResult {
        self.run_decoded(
            "sentiment",
            prompts::sentiment(content),
            decode_sentiment,
            SentimentResult::neutral,
        )
        .await
    }
}

pub(super) fn decode_sentiment(text: &str) -> Option<SentimentResult> {
    let value = extract_structure(text, BracketKind::Object)?;
    let sentiment: Sentiment = json_string(&value, "sentiment")?.parse().ok()?;

    Some(SentimentResult::new(
        sentiment,
        json_f64(&value, "score").unwrap_or(0.0),
        json_string_array(&value, "emotions"),
    ))
}
