//! AI Integration Layer
//!
//! Completion providers, the fail-soft gateway in front of them, prompt
//! construction, and tolerant decoding of model output.

pub mod gateway;
pub mod prompt;
pub mod provider;
pub mod request;
pub mod timeout;
pub mod validation;

pub use gateway::{CompletionGateway, GatewayStats, ProviderGateway};
pub use prompt::{PromptBuilder, PromptSection};
pub use provider::{
    CompletionProvider, CompletionResponse, OllamaProvider, OpenAiProvider, ProviderConfig,
    ResponseTiming, SharedProvider, TokenUsage, create_provider,
};
pub use request::{ChatMessage, CompletionRequest, Role};
pub use timeout::{default_completion_timeout, with_timeout};
pub use validation::{
    BracketKind, extract_structure, parse_hashtags, parse_list, to_hashtag_token,
};
