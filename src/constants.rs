//! Global Constants
//!
//! Centralized constants for prompt budgets, input caps and rendering.
//! All magic numbers should be defined here with documentation.

/// Sampling budget for a single completion call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Budget {
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Per-operation completion budgets
///
/// Classification runs cold and short; generation runs warmer with more room.
pub mod budget {
    use super::Budget;

    pub const MODERATION: Budget = Budget::new(0.3, 200);
    pub const SPAM: Budget = Budget::new(0.2, 200);
    pub const SENTIMENT: Budget = Budget::new(0.3, 200);
    pub const HASHTAGS: Budget = Budget::new(0.7, 150);
    pub const REPLIES: Budget = Budget::new(0.8, 300);
    pub const TRENDING: Budget = Budget::new(0.5, 300);
    pub const SUMMARY: Budget = Budget::new(0.5, 150);
    pub const ENHANCE: Budget = Budget::new(0.7, 400);
    pub const ASCII_ART: Budget = Budget::new(0.9, 1000);
}

/// Input and output caps for feature operations
pub mod limits {
    /// Recent posts embedded in a trending-topics prompt
    pub const MAX_TRENDING_POSTS: usize = 50;

    /// Conversation turns embedded in a summary prompt (most recent kept)
    pub const MAX_SUMMARY_TURNS: usize = 20;

    /// Longest accepted reply suggestion (characters)
    pub const MAX_REPLY_CHARS: usize = 150;

    /// Longest accepted hashtag line before tokenizing (characters)
    pub const MAX_HASHTAG_CHARS: usize = 30;

    /// Default number of hashtags suggested
    pub const DEFAULT_HASHTAGS: usize = 5;

    /// Default number of reply suggestions
    pub const DEFAULT_REPLIES: usize = 3;

    /// Default number of trending topics
    pub const DEFAULT_TRENDING: usize = 5;

    /// Spam confidence above which the publishing gate rejects a post
    pub const SPAM_REJECT_THRESHOLD: f64 = 0.7;
}

/// Fixed fallback sentences
pub mod fallback {
    pub const SUMMARY_UNAVAILABLE: &str = "Unable to generate summary.";
    pub const SUMMARY_EMPTY: &str = "No messages to summarize.";
    pub const ASCII_ART_FAILED: &str = "Failed to generate ASCII art";
}

/// ASCII-art raster geometry
pub mod render {
    /// Monospace cell width (pixels)
    pub const CHAR_WIDTH: u32 = 7;

    /// Monospace cell height and line cadence (pixels)
    pub const CHAR_HEIGHT: u32 = 14;

    /// Margin on every side of the canvas (pixels)
    pub const MARGIN: u32 = 20;

    /// Glyph size for TrueType fonts (pixels)
    pub const FONT_SIZE: f32 = 12.0;

    /// Canvas background (#1a1a1a)
    pub const BACKGROUND: [u8; 3] = [0x1a, 0x1a, 0x1a];

    /// Glyph color (#00ff88)
    pub const FOREGROUND: [u8; 3] = [0x00, 0xff, 0x88];

    /// Default artifact directory
    pub const DEFAULT_OUTPUT_DIR: &str = "static/uploads";

    /// Artifact filename prefixes
    pub const TEXT_KIND: &str = "ascii_art";
    pub const RASTER_KIND: &str = "ai_generated";
}

/// HTTP/Network constants
pub mod network {
    /// Default completion request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
}
