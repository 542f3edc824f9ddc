//! chirp-insight - Content Intelligence for Social Posts
//!
//! LLM-backed analysis of short social-media posts: moderation, spam
//! scoring, sentiment, hashtag and reply suggestions, trending topics,
//! conversation summaries, and ASCII-art image generation.
//!
//! Every feature operation is fail-open: a provider outage or an
//! unparseable model reply yields a fixed permissive default instead of an
//! error.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chirp_insight::{ConfigLoader, ContentIntelligence, SpamContext};
//!
//! let config = ConfigLoader::load()?;
//! let service = ContentIntelligence::from_config(&config)?;
//!
//! let decision = service.screen_post("Check out my garden!", SpamContext::default()).await;
//! if decision.is_allowed() {
//!     let analysis = service.analyze_post("Check out my garden!").await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: completion providers, gateway, prompt builder, output decoding
//! - [`insight`]: feature operations and the publishing gate
//! - [`render`]: ASCII-art generation and rasterization
//! - [`config`]: layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod insight;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig, ModerationConfig, RenderConfig};

// Error Types
pub use types::error::{ErrorCategory, InsightError, Result};

// Result Types
pub use types::{
    AsciiArtArtifact, ConversationTurn, EnhancedContent, ModerationVerdict, PostAnalysis,
    PublishDecision, Sentiment, SentimentResult, SpamContext, SpamVerdict, TrendingTopic,
};

// =============================================================================
// Service Re-exports
// =============================================================================

pub use insight::{ContentIntelligence, PromptObserver};
pub use render::{AsciiArtPipeline, FontChain, FontStrategy};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    CompletionGateway, CompletionProvider, CompletionRequest, ProviderConfig, ProviderGateway,
    SharedProvider, create_provider,
};
