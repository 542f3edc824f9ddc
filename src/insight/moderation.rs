use serde_json::Value;

use super::{ContentIntelligence, prompts};
use crate::ai::{BracketKind, extract_structure};
use crate::types::{ModerationVerdict, json_bool, json_string_array, json_string_or};

impl ContentIntelligence {
    /// Check a post against community guidelines
    ///
    /// Fails open: any gateway or parse failure allows the post.
    pub async fn moderate_content(&self, content: &str) -> ModerationVerdict {
        self.run_decoded(
            "moderation",
            prompts::moderation(content),
            decode_moderation,
            ModerationVerdict::allow,
        )
        .await
    }
}

pub(super) fn decode_moderation(text: &str) -> Option<ModerationVerdict> {
    let value: Value = extract_structure(text, BracketKind::Object)?;
    let is_safe = json_bool(&value, "is_safe")?;

    Some(ModerationVerdict::new(
        is_safe,
        json_string_or(&value, "reason", ""),
        json_string_array(&value, "categories"),
    ))
}
