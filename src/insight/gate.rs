//! Publishing gate: moderation then spam, plus post-publish analysis.

use tracing::info;

use super::ContentIntelligence;
use crate::constants::limits::DEFAULT_HASHTAGS;
use crate::types::{PostAnalysis, PublishDecision, SpamContext};

impl ContentIntelligence {
    /// Decide whether a post may be published
    ///
    /// Moderation runs first; spam detection only runs on posts that pass
    /// it. A spam verdict rejects only when its confidence is strictly above
    /// the configured threshold. Both checks fail open.
    pub async fn screen_post(&self, content: &str, context: SpamContext) -> PublishDecision {
        let moderation = self.moderate_content(content).await;
        if !moderation.is_safe {
            info!("Post rejected by moderation: {}", moderation.reason);
            return PublishDecision::RejectedByModeration {
                reason: moderation.reason,
                categories: moderation.categories,
            };
        }

        let spam = self.detect_spam(content, context).await;
        if spam.is_spam && spam.confidence > self.spam_reject_threshold {
            info!(
                "Post rejected as spam (confidence {:.2}): {}",
                spam.confidence, spam.reason
            );
            return PublishDecision::RejectedAsSpam {
                reason: spam.reason,
                confidence: spam.confidence,
            };
        }

        PublishDecision::Allow
    }

    /// Sentiment and hashtags for a published post, fetched concurrently
    pub async fn analyze_post(&self, content: &str) -> PostAnalysis {
        let (sentiment, hashtags) = tokio::join!(
            self.analyze_sentiment(content),
            self.suggest_hashtags(content, DEFAULT_HASHTAGS)
        );
        PostAnalysis {
            sentiment,
            hashtags,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::insight::testing::*;
    use crate::types::{Sentiment, SpamContext};

    const SAFE: &str = r#"{"is_safe": true, "reason": "", "categories": []}"#;

    #[tokio::test]
    async fn test_moderation_rejects_before_spam() {
        let gateway = ScriptedGateway::new(&[Some(
            r#"{"is_safe": false, "reason": "Harassment", "categories": ["harassment"]}"#,
        )]);
        let decision = service(&gateway)
            .screen_post("you are awful", SpamContext::default())
            .await;

        assert!(!decision.is_allowed());
        assert_eq!(decision.message().unwrap(), "Content moderation: Harassment");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_spam_threshold_is_strict() {
        let at_threshold = ScriptedGateway::new(&[
            Some(SAFE),
            Some(r#"{"is_spam": true, "confidence": 0.7, "reason": "maybe"}"#),
        ]);
        let decision = service(&at_threshold)
            .screen_post("deal", SpamContext::default())
            .await;
        assert!(decision.is_allowed());

        let above = ScriptedGateway::new(&[
            Some(SAFE),
            Some(r#"{"is_spam": true, "confidence": 0.71, "reason": "Phishing"}"#),
        ]);
        let decision = service(&above)
            .screen_post("deal", SpamContext::default())
            .await;
        assert_eq!(decision.message().unwrap(), "Spam detected: Phishing");
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let gateway = ScriptedGateway::new(&[
            Some(SAFE),
            Some(r#"{"is_spam": true, "confidence": 0.5, "reason": "ads"}"#),
        ]);
        let decision = service(&gateway)
            .with_spam_threshold(0.4)
            .screen_post("deal", SpamContext::default())
            .await;
        assert!(!decision.is_allowed());
    }

    #[tokio::test]
    async fn test_outage_allows() {
        let gateway = ScriptedGateway::offline();
        let decision = service(&gateway)
            .screen_post("anything", SpamContext::with_post_count(3))
            .await;
        assert!(decision.is_allowed());
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_analyze_post_runs_both() {
        let gateway = ScriptedGateway::offline();
        let analysis = service(&gateway).analyze_post("hello").await;
        assert_eq!(analysis.sentiment.sentiment, Sentiment::Neutral);
        assert!(analysis.hashtags.is_empty());
        assert_eq!(gateway.calls(), 2);
    }
}
