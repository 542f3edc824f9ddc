use super::{ContentIntelligence, prompts};
use crate::constants::{fallback, limits::MAX_SUMMARY_TURNS};
use crate::types::ConversationTurn;

impl ContentIntelligence {
    /// Summarize a conversation in one or two sentences
    ///
    /// Only the most recent 20 turns are considered. The result is never
    /// empty.
    pub async fn summarize_conversation(&self, turns: &[ConversationTurn]) -> String {
        if turns.is_empty() {
            return fallback::SUMMARY_EMPTY.to_string();
        }

        let recent = &turns[turns.len().saturating_sub(MAX_SUMMARY_TURNS)..];

        self.run_decoded(
            "summary",
            prompts::summary(recent),
            |text| Some(text.to_string()),
            || fallback::SUMMARY_UNAVAILABLE.to_string(),
        )
        .await
    }
}
