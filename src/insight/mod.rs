//! Content Intelligence Service
//!
//! Feature operations over social-post text. Every operation follows the
//! same pipeline:
//!
//! 1. Build the prompt (`prompts`)
//! 2. Call the gateway (absent on any transport failure)
//! 3. Decode with the structured extractor or list parser
//! 4. Fall back to the operation's fixed default on any miss
//!
//! Operations return plain values, never `Result`: a provider outage yields
//! the permissive default (fail-open).

mod enhance;
mod gate;
mod moderation;
pub mod prompts;
mod sentiment;
mod spam;
mod suggestions;
mod summary;
mod trending;

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::ai::{
    CompletionGateway, CompletionRequest, ProviderConfig, ProviderGateway, create_provider,
};
use crate::config::Config;
use crate::constants::limits;
use crate::types::{Result, preview};

/// Callback invoked with every request the service builds
pub type PromptObserver = Arc<dyn Fn(&CompletionRequest) + Send + Sync>;

/// Entry point for all content-intelligence operations
///
/// Cheap to share: wrap in `Arc` and call from any task.
#[derive(Clone)]
pub struct ContentIntelligence {
    gateway: Arc<dyn CompletionGateway>,
    observer: Option<PromptObserver>,
    spam_reject_threshold: f64,
}

impl std::fmt::Debug for ContentIntelligence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentIntelligence")
            .field("observer", &self.observer.is_some())
            .field("spam_reject_threshold", &self.spam_reject_threshold)
            .finish()
    }
}

impl ContentIntelligence {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            observer: None,
            spam_reject_threshold: limits::SPAM_REJECT_THRESHOLD,
        }
    }

    /// Build the production service from configuration
    ///
    /// Fails when the provider is unknown or its credential is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = create_provider(&ProviderConfig::from(&config.llm))?;
        info!(
            "Using {} provider (model: {})",
            provider.name(),
            provider.model()
        );

        let gateway = ProviderGateway::with_timeout(
            provider,
            Duration::from_secs(config.llm.timeout_secs),
        );

        Ok(Self::new(Arc::new(gateway))
            .with_spam_threshold(config.moderation.spam_reject_threshold))
    }

    /// Observe every outgoing request before it reaches the gateway
    pub fn with_prompt_observer(
        mut self,
        observer: impl Fn(&CompletionRequest) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Spam confidence above which `screen_post` rejects
    pub fn with_spam_threshold(mut self, threshold: f64) -> Self {
        self.spam_reject_threshold = threshold;
        self
    }

    pub fn spam_reject_threshold(&self) -> f64 {
        self.spam_reject_threshold
    }

    pub fn gateway(&self) -> &Arc<dyn CompletionGateway> {
        &self.gateway
    }

    /// Send one request through the gateway
    pub(crate) async fn ask(&self, operation: &str, request: CompletionRequest) -> Option<String> {
        if let Some(observer) = &self.observer {
            observer(&request);
        }

        debug!(
            "{}: requesting completion (temperature: {}, max_tokens: {})",
            operation,
            request.temperature(),
            request.max_tokens()
        );

        let response = self.gateway.complete(&request).await;
        match &response {
            Some(text) => debug!("{}: response {:?}", operation, preview(text, 120)),
            None => warn!("{}: no completion, using default", operation),
        }
        response
    }

    /// Ask, decode, and fall back to `fallback` on either failure
    pub(crate) async fn run_decoded<T>(
        &self,
        operation: &str,
        request: CompletionRequest,
        decode: impl FnOnce(&str) -> Option<T>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        let Some(text) = self.ask(operation, request).await else {
            return fallback();
        };

        match decode(&text) {
            Some(value) => value,
            None => {
                warn!(
                    "{}: fallback due to unparseable response: {:?}",
                    operation,
                    preview(&text, 200)
                );
                fallback()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted gateway for unit tests

    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned responses in order and records every request
    #[derive(Default)]
    pub struct ScriptedGateway {
        responses: Mutex<VecDeque<Option<String>>>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGateway {
        pub fn new(responses: &[Option<&str>]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(
                    responses.iter().map(|r| r.map(str::to_string)).collect(),
                ),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn replying(text: &str) -> Arc<Self> {
            Self::new(&[Some(text)])
        }

        pub fn offline() -> Arc<Self> {
            Self::new(&[])
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_prompt(&self) -> String {
            self.requests
                .lock()
                .unwrap()
                .last()
                .and_then(|r| r.user_prompt().map(str::to_string))
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl CompletionGateway for ScriptedGateway {
        async fn complete(&self, request: &CompletionRequest) -> Option<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses.lock().unwrap().pop_front().flatten()
        }
    }

    pub fn service(gateway: &Arc<ScriptedGateway>) -> ContentIntelligence {
        ContentIntelligence::new(gateway.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_observer_sees_requests() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let gateway = ScriptedGateway::replying("ok");
        let service = service(&gateway).with_prompt_observer(move |req| {
            sink.lock().unwrap().push(req.max_tokens());
        });

        service
            .ask("probe", CompletionRequest::instructed("s", "u", crate::constants::budget::SUMMARY))
            .await;
        assert_eq!(*seen.lock().unwrap(), vec![150]);
    }

    #[tokio::test]
    async fn test_run_decoded_fallbacks() {
        let gateway = ScriptedGateway::new(&[None, Some("garbage"), Some("42")]);
        let service = service(&gateway);
        let request = || CompletionRequest::instructed("s", "u", crate::constants::budget::SPAM);
        let decode = |t: &str| t.parse::<i32>().ok();

        assert_eq!(service.run_decoded("t", request(), decode, || -1).await, -1);
        assert_eq!(service.run_decoded("t", request(), decode, || -1).await, -1);
        assert_eq!(service.run_decoded("t", request(), decode, || -1).await, 42);
        assert_eq!(gateway.calls(), 3);
    }

    #[test]
    fn test_from_config_rejects_unknown_provider() {
        let mut config = Config::default();
        config.llm.provider = "carrier-pigeon".to_string();
        assert!(ContentIntelligence::from_config(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_default_threshold() {
        let service = ContentIntelligence::new(ScriptedGateway::offline());
        assert_eq!(service.spam_reject_threshold(), 0.7);
    }
}
