use serde_json::Value;

use super::{ContentIntelligence, prompts};
use crate::ai::{BracketKind, extract_structure};
use crate::constants::limits::MAX_TRENDING_POSTS;
use crate::types::{TrendingTopic, json_f64, json_string};

impl ContentIntelligence {
    /// Identify up to `count` trending topics across recent posts
    ///
    /// Only the first 50 posts are sent to the model.
    pub async fn generate_trending_topics<S: AsRef<str>>(
        &self,
        posts: &[S],
        count: usize,
    ) -> Vec<TrendingTopic> {
        if posts.is_empty() || count == 0 {
            return Vec::new();
        }

        let window: Vec<&str> = posts
            .iter()
            .take(MAX_TRENDING_POSTS)
            .map(AsRef::as_ref)
            .collect();

        self.run_decoded(
            "trending",
            prompts::trending(&window, count),
            |text| decode_topics(text, count),
            Vec::new,
        )
        .await
    }
}

pub(super) fn decode_topics(text: &str, count: usize) -> Option<Vec<TrendingTopic>> {
    let value = extract_structure(text, BracketKind::Array)?;
    let entries = value.as_array()?;

    Some(
        entries
            .iter()
            .filter_map(decode_topic)
            .take(count)
            .collect(),
    )
}

fn decode_topic(entry: &Value) -> Option<TrendingTopic> {
    let topic = json_string(entry, "topic")?;
    if topic.trim().is_empty() {
        return None;
    }
    Some(TrendingTopic::new(
        topic,
        json_f64(entry, "relevance").unwrap_or(0.0),
    ))
}
