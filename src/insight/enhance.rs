use super::{ContentIntelligence, prompts};
use crate::ai::{BracketKind, extract_structure};
use crate::types::{EnhancedContent, json_string, json_string_array};

impl ContentIntelligence {
    /// Rewrite a post to be more engaging, with improvement tips
    ///
    /// Falls back to the original text with no tips.
    pub async fn enhance_content(&self, content: &str) -> EnhancedContent {
        self.run_decoded(
            "enhance",
            prompts::enhance(content),
            decode_enhanced,
            || EnhancedContent::unchanged(content),
        )
        .await
    }
}

pub(super) fn decode_enhanced(text: &str) -> Option<EnhancedContent> {
    let value = extract_structure(text, BracketKind::Object)?;
    let improved = json_string(&value, "improved_content")?;
    let improved = improved.trim();
    if improved.is_empty() {
        return None;
    }

    let suggestions = json_string_array(&value, "suggestions")
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Some(EnhancedContent {
        improved_content: improved.to_string(),
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::testing::*;

    #[test]
    fn test_decode_enhanced() {
        let enhanced = decode_enhanced(
            r#"{"improved_content": "Just shipped v2! 🚀", "suggestions": ["Add an emoji", " "]}"#,
        )
        .unwrap();
        assert_eq!(enhanced.improved_content, "Just shipped v2! 🚀");
        assert_eq!(enhanced.suggestions, vec!["Add an emoji"]);
    }

    #[test]
    fn test_decode_requires_content() {
        assert!(decode_enhanced(r#"{"improved_content": "  ", "suggestions": []}"#).is_none());
        assert!(decode_enhanced(r#"{"suggestions": ["x"]}"#).is_none());
    }

    #[tokio::test]
    async fn test_offline_returns_original() {
        let gateway = ScriptedGateway::offline();
        let enhanced = service(&gateway).enhance_content("shipped v2").await;
        assert_eq!(enhanced, EnhancedContent::unchanged("shipped v2"));
    }
}
