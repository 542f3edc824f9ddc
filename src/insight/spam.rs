use super::{ContentIntelligence, prompts};
use crate::ai::{BracketKind, extract_structure};
use crate::types::{SpamContext, SpamVerdict, json_bool, json_f64, json_string_or};

impl ContentIntelligence {
    /// Score a post for spam, optionally using the author's posting rate
    ///
    /// Fails open to `not_spam` with zero confidence.
    pub async fn detect_spam(&self, content: &str, context: SpamContext) -> SpamVerdict {
        self.run_decoded(
            "spam",
            prompts::spam(content, context.post_count),
            decode_spam,
            SpamVerdict::not_spam,
        )
        .await
    }
}

pub(super) fn decode_spam(text: &str) -> Option<SpamVerdict> {
    let value = extract_structure(text, BracketKind::Object)?;
    let is_spam = json_bool(&value, "is_spam")?;

    Some(SpamVerdict::new(
        is_spam,
        json_f64(&value, "confidence").unwrap_or(0.0),
        json_string_or(&value, "reason", ""),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::testing::*;

    #[test]
    fn test_decode_clamps_confidence() {
        let high = decode_spam(r#"{"is_spam": true, "confidence": 1.7, "reason": "links"}"#).unwrap();
        assert_eq!(high.confidence, 1.0);

        let low = decode_spam(r#"{"is_spam": false, "confidence": -3}"#).unwrap();
        assert_eq!(low.confidence, 0.0);
        assert!(low.reason.is_empty());
    }

    #[test]
    fn test_decode_string_confidence() {
        let verdict = decode_spam(r#"{"is_spam": true, "confidence": "0.85"}"#).unwrap();
        assert_eq!(verdict.confidence, 0.85);
    }

    #[test]
    fn test_decode_missing_flag() {
        assert!(decode_spam(r#"{"confidence": 0.9}"#).is_none());
    }

    #[tokio::test]
    async fn test_offline_is_not_spam() {
        let gateway = ScriptedGateway::offline();
        let verdict = service(&gateway)
            .detect_spam("BUY NOW", SpamContext::default())
            .await;
        assert_eq!(verdict, SpamVerdict::not_spam());
    }

    #[tokio::test]
    async fn test_post_count_reaches_prompt() {
        let gateway = ScriptedGateway::replying(
            r#"Analysis: {"is_spam": true, "confidence": 0.92, "reason": "Promotional links"}"#,
        );
        let verdict = service(&gateway)
            .detect_spam("Click here!!!", SpamContext::with_post_count(40))
            .await;

        assert!(verdict.is_spam);
        assert_eq!(verdict.confidence, 0.92);
        assert!(gateway.last_prompt().contains("User has posted 40 times today."));
    }
}
