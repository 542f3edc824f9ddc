//! Typed results of the content-intelligence operations.
//!
//! Every type here is total: each has a fail-open default that satisfies its
//! field constraints, and numeric fields are clamped into range on
//! construction. All types serialize with serde so the collaborator layer can
//! cache them as text and read them back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::utils::{clamp_unit, clamp_signed_unit, dedupe_labels};

// =============================================================================
// Moderation
// =============================================================================

/// Reason used when the model flags content without explaining why
pub const DEFAULT_FLAG_REASON: &str = "Inappropriate content detected";

/// Verdict of a moderation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ModerationFields")]
pub struct ModerationVerdict {
    pub is_safe: bool,
    /// Empty iff `is_safe`
    pub reason: String,
    /// Violation tags in the order the model reported them
    pub categories: Vec<String>,
}

impl ModerationVerdict {
    /// Permissive verdict returned whenever moderation cannot run
    pub fn allow() -> Self {
        Self {
            is_safe: true,
            reason: String::new(),
            categories: Vec::new(),
        }
    }

    /// Build a verdict, enforcing the reason/safety pairing
    pub fn new(is_safe: bool, reason: impl Into<String>, categories: Vec<String>) -> Self {
        let reason = reason.into().trim().to_string();
        let reason = match (is_safe, reason.is_empty()) {
            (true, _) => String::new(),
            (false, true) => DEFAULT_FLAG_REASON.to_string(),
            (false, false) => reason,
        };
        Self {
            is_safe,
            reason,
            categories: dedupe_labels(categories),
        }
    }
}

impl Default for ModerationVerdict {
    fn default() -> Self {
        Self::allow()
    }
}

#[derive(Deserialize)]
struct ModerationFields {
    is_safe: bool,
    reason: String,
    categories: Vec<String>,
}

impl From<ModerationFields> for ModerationVerdict {
    fn from(f: ModerationFields) -> Self {
        Self::new(f.is_safe, f.reason, f.categories)
    }
}

// =============================================================================
// Spam
// =============================================================================

/// Verdict of a spam check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpamFields")]
pub struct SpamVerdict {
    pub is_spam: bool,
    /// Always within [0, 1]
    pub confidence: f64,
    pub reason: String,
}

impl SpamVerdict {
    pub fn not_spam() -> Self {
        Self {
            is_spam: false,
            confidence: 0.0,
            reason: String::new(),
        }
    }

    pub fn new(is_spam: bool, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            is_spam,
            confidence: clamp_unit(confidence),
            reason: reason.into().trim().to_string(),
        }
    }
}

impl Default for SpamVerdict {
    fn default() -> Self {
        Self::not_spam()
    }
}

#[derive(Deserialize)]
struct SpamFields {
    is_spam: bool,
    confidence: f64,
    reason: String,
}

impl From<SpamFields> for SpamVerdict {
    fn from(f: SpamFields) -> Self {
        Self::new(f.is_spam, f.confidence, f.reason)
    }
}

// =============================================================================
// Sentiment
// =============================================================================

/// Overall polarity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!(
                "Unknown sentiment: {}. Valid values: positive, negative, neutral",
                s
            )),
        }
    }
}

/// Sentiment and emotion analysis of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "SentimentFields")]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Always within [-1, 1]
    pub score: f64,
    pub emotions: Vec<String>,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn new(sentiment: Sentiment, score: f64, emotions: Vec<String>) -> Self {
        Self {
            sentiment,
            score: clamp_signed_unit(score),
            emotions: dedupe_labels(emotions),
        }
    }
}

#[derive(Deserialize)]
struct SentimentFields {
    sentiment: Sentiment,
    score: f64,
    emotions: Vec<String>,
}

impl From<SentimentFields> for SentimentResult {
    fn from(f: SentimentFields) -> Self {
        Self::new(f.sentiment, f.score, f.emotions)
    }
}

// =============================================================================
// Trending Topics
// =============================================================================

/// A topic detected across recent posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TopicFields")]
pub struct TrendingTopic {
    pub topic: String,
    /// Always within [0, 1]
    pub relevance: f64,
}

impl TrendingTopic {
    pub fn new(topic: impl Into<String>, relevance: f64) -> Self {
        Self {
            topic: topic.into().trim().to_string(),
            relevance: clamp_unit(relevance),
        }
    }
}

#[derive(Deserialize)]
struct TopicFields {
    topic: String,
    relevance: f64,
}

impl From<TopicFields> for TrendingTopic {
    fn from(f: TopicFields) -> Self {
        Self::new(f.topic, f.relevance)
    }
}

// =============================================================================
// Conversation
// =============================================================================

/// One message of a direct conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: String,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Parse a `speaker: text` line
    pub fn parse_line(line: &str) -> Option<Self> {
        let (speaker, text) = line.split_once(':')?;
        let speaker = speaker.trim();
        let text = text.trim();
        if speaker.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self::new(speaker, text))
    }
}

/// Auxiliary signals for spam scoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamContext {
    /// Number of posts the author published today
    pub post_count: Option<u32>,
}

impl SpamContext {
    pub fn with_post_count(post_count: u32) -> Self {
        Self {
            post_count: Some(post_count),
        }
    }
}

// =============================================================================
// Content Enhancement
// =============================================================================

/// A rewritten, more engaging version of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedContent {
    pub improved_content: String,
    pub suggestions: Vec<String>,
}

impl EnhancedContent {
    /// Fallback that leaves the post untouched
    pub fn unchanged(original: &str) -> Self {
        Self {
            improved_content: original.to_string(),
            suggestions: Vec::new(),
        }
    }
}

// =============================================================================
// Publishing Gate
// =============================================================================

/// Whether a post may be published
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum PublishDecision {
    Allow,
    RejectedByModeration {
        reason: String,
        categories: Vec<String>,
    },
    RejectedAsSpam {
        reason: String,
        confidence: f64,
    },
}

impl PublishDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PublishDecision::Allow)
    }

    /// Message suitable for showing to the author
    pub fn message(&self) -> Option<String> {
        match self {
            PublishDecision::Allow => None,
            PublishDecision::RejectedByModeration { reason, .. } => {
                Some(format!("Content moderation: {}", reason))
            }
            PublishDecision::RejectedAsSpam { reason, .. } => {
                let reason = if reason.is_empty() {
                    "Suspicious content"
                } else {
                    reason.as_str()
                };
                Some(format!("Spam detected: {}", reason))
            }
        }
    }
}

/// Analysis stored alongside a published post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PostAnalysis {
    pub sentiment: SentimentResult,
    pub hashtags: Vec<String>,
}

// =============================================================================
// ASCII Art
// =============================================================================

/// Outcome of the ASCII-art rendering pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AsciiArtArtifact {
    /// Description the art was generated from
    pub prompt: String,
    /// Model-authored art (empty on failure)
    pub raw_text: String,
    /// Directory-qualified path of the PNG (empty on failure)
    pub raster_path: String,
    /// Directory-qualified path of the raw text file (empty on failure)
    pub text_path: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AsciiArtArtifact {
    pub fn failed(prompt: &str, error: impl Into<String>) -> Self {
        Self {
            prompt: prompt.to_string(),
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_reason_pairing() {
        let safe = ModerationVerdict::new(true, "looks fine", vec![]);
        assert!(safe.reason.is_empty());

        let flagged = ModerationVerdict::new(false, "  ", vec!["hate".into()]);
        assert_eq!(flagged.reason, DEFAULT_FLAG_REASON);
        assert_eq!(flagged.categories, vec!["hate"]);
    }

    #[test]
    fn test_numeric_fields_clamped() {
        assert_eq!(SpamVerdict::new(true, 1.7, "x").confidence, 1.0);
        assert_eq!(SpamVerdict::new(true, -0.2, "x").confidence, 0.0);
        assert_eq!(SentimentResult::new(Sentiment::Negative, -3.0, vec![]).score, -1.0);
        assert_eq!(TrendingTopic::new("rust", 95.0).relevance, 1.0);
    }

    #[test]
    fn test_deserialize_enforces_ranges() {
        let spam: SpamVerdict =
            serde_json::from_str(r#"{"is_spam": true, "confidence": 5.0, "reason": "x"}"#).unwrap();
        assert_eq!(spam.confidence, 1.0);

        let sentiment: SentimentResult =
            serde_json::from_str(r#"{"sentiment": "negative", "score": -7.5, "emotions": []}"#)
                .unwrap();
        assert_eq!(sentiment.score, -1.0);

        let topic: TrendingTopic =
            serde_json::from_str(r#"{"topic": " rust ", "relevance": 42}"#).unwrap();
        assert_eq!(topic, TrendingTopic::new("rust", 1.0));
    }

    #[test]
    fn test_deserialize_enforces_reason_pairing() {
        let verdict: ModerationVerdict = serde_json::from_str(
            r#"{"is_safe": false, "reason": "", "categories": ["hate", "Hate"]}"#,
        )
        .unwrap();
        assert_eq!(verdict.reason, DEFAULT_FLAG_REASON);
        assert_eq!(verdict.categories, vec!["hate"]);
    }

    #[test]
    fn test_sentiment_parse() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!(" NEUTRAL ".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert!("ecstatic".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let result = SentimentResult::new(Sentiment::Positive, 0.8, vec!["joy".into()]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""sentiment":"positive""#));

        let back: SentimentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_conversation_turn_parse_line() {
        let turn = ConversationTurn::parse_line("alice: see you at 5").unwrap();
        assert_eq!(turn.speaker, "alice");
        assert_eq!(turn.text, "see you at 5");
        assert!(ConversationTurn::parse_line("no separator").is_none());
        assert!(ConversationTurn::parse_line("bob:   ").is_none());
    }

    #[test]
    fn test_publish_decision_messages() {
        assert!(PublishDecision::Allow.message().is_none());
        let spam = PublishDecision::RejectedAsSpam {
            reason: String::new(),
            confidence: 0.9,
        };
        assert_eq!(spam.message().unwrap(), "Spam detected: Suspicious content");
        assert!(!spam.is_allowed());
    }

    #[test]
    fn test_publish_decision_tagged_serialization() {
        let decision = PublishDecision::RejectedByModeration {
            reason: "harassment".into(),
            categories: vec!["bullying".into()],
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "rejected_by_moderation");
        let back: PublishDecision = serde_json::from_value(json).unwrap();
        assert_eq!(back, decision);
    }
}
