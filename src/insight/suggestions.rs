//! Hashtag and reply suggestions.

use super::{ContentIntelligence, prompts};
use crate::ai::{parse_hashtags, parse_list};
use crate::constants::limits::{MAX_HASHTAG_CHARS, MAX_REPLY_CHARS};

impl ContentIntelligence {
    /// Suggest up to `count` hashtags, without the `#`, e.g. `MachineLearning`
    pub async fn suggest_hashtags(&self, content: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        self.run_decoded(
            "hashtags",
            prompts::hashtags(content, count),
            |text| Some(parse_hashtags(text, count, MAX_HASHTAG_CHARS)),
            Vec::new,
        )
        .await
    }

    /// Suggest up to `count` short replies to a post
    pub async fn generate_reply_suggestions(&self, content: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        self.run_decoded(
            "replies",
            prompts::replies(content, count),
            |text| Some(parse_list(text, count, MAX_REPLY_CHARS)),
            Vec::new,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::insight::testing::*;

    #[tokio::test]
    async fn test_hashtags_tokenized() {
        let gateway = ScriptedGateway::replying("1. machine learning\n2. #Rust\n3. open source\n");
        let tags = service(&gateway).suggest_hashtags("post", 5).await;
        assert_eq!(tags, vec!["MachineLearning", "Rust", "OpenSource"]);
    }

    #[tokio::test]
    async fn test_hashtags_capped() {
        let gateway = ScriptedGateway::replying("a\nb\nc\nd\ne\nf");
        let tags = service(&gateway).suggest_hashtags("post", 2).await;
        assert_eq!(tags, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_zero_count_skips_gateway() {
        let gateway = ScriptedGateway::replying("unused");
        let svc = service(&gateway);
        assert!(svc.suggest_hashtags("post", 0).await.is_empty());
        assert!(svc.generate_reply_suggestions("post", 0).await.is_empty());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_replies_parsed() {
        let gateway = ScriptedGateway::replying("1. Great post!\n2) \"Nice one\"\n3. ");
        let replies = service(&gateway)
            .generate_reply_suggestions("look at this", 3)
            .await;
        assert_eq!(replies, vec!["Great post!", "Nice one"]);
    }

    #[tokio::test]
    async fn test_replies_drop_long_lines() {
        let long = "y".repeat(151);
        let gateway = ScriptedGateway::replying(&format!("1. {}\n2. ok", long));
        let replies = service(&gateway).generate_reply_suggestions("x", 3).await;
        assert_eq!(replies, vec!["ok"]);
    }

    #[tokio::test]
    async fn test_offline_is_empty() {
        let gateway = ScriptedGateway::new(&[None, None]);
        let svc = service(&gateway);
        assert!(svc.suggest_hashtags("x", 5).await.is_empty());
        assert!(svc.generate_reply_suggestions("x", 3).await.is_empty());
    }
}
