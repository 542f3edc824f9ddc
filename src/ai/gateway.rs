//! Completion Gateway
//!
//! The single choke point between feature code and a completion provider.
//! A gateway call never fails: transport errors, provider rejections,
//! timeouts and empty completions all come back as `None`.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

use super::provider::SharedProvider;
use super::request::CompletionRequest;
use super::timeout::{default_completion_timeout, with_timeout};
use crate::types::ErrorClassifier;

/// Text-in, text-or-nothing completion boundary
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue exactly one outbound call; `None` on any failure
    async fn complete(&self, request: &CompletionRequest) -> Option<String>;
}

/// Point-in-time gateway counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewayStats {
    pub calls: u64,
    pub successes: u64,
    pub failures: u64,
}

/// Production gateway over a [`CompletionProvider`](super::provider::CompletionProvider)
pub struct ProviderGateway {
    provider: SharedProvider,
    timeout: Duration,
    calls: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
}

impl ProviderGateway {
    pub fn new(provider: SharedProvider) -> Self {
        Self::with_timeout(provider, default_completion_timeout())
    }

    pub fn with_timeout(provider: SharedProvider, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            calls: AtomicU64::new(0),
            successes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn stats(&self) -> GatewayStats {
        GatewayStats {
            calls: self.calls.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    fn record_failure(&self) -> Option<String> {
        self.failures.fetch_add(1, Ordering::Relaxed);
        None
    }
}

#[async_trait]
impl CompletionGateway for ProviderGateway {
    async fn complete(&self, request: &CompletionRequest) -> Option<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let provider = self.provider.name();

        let result = with_timeout(
            self.timeout,
            self.provider.complete(request),
            "completion request",
        )
        .await;

        match result {
            Ok(response) => {
                let text = response.content.trim();
                if text.is_empty() {
                    warn!("[{}] Completion was empty", provider);
                    return self.record_failure();
                }
                debug!(
                    "[{}] Completion received: {} chars, {} tokens, {}ms",
                    provider,
                    text.len(),
                    response.usage.total(),
                    response.timing.total_ms
                );
                self.successes.fetch_add(1, Ordering::Relaxed);
                Some(text.to_string())
            }
            Err(e) => {
                let classified = ErrorClassifier::classify_insight_error(&e, provider);
                warn!(
                    "[{}] Completion failed ({}): {}",
                    provider, classified.category, classified.message
                );
                self.record_failure()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::{CompletionProvider, CompletionResponse};
    use crate::constants::Budget;
    use crate::types::{ErrorClassifier, Result};
    use std::sync::Arc;

    enum Behavior {
        Reply(&'static str),
        Fail(u16),
        Hang,
    }

    struct StubProvider(Behavior);

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse> {
            match self.0 {
                Behavior::Reply(text) => Ok(CompletionResponse::content_only(text)),
                Behavior::Fail(status) => Err(ErrorClassifier::classify_http_status(
                    status,
                    "upstream said no",
                    "stub",
                )
                .into()),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok(CompletionResponse::content_only("too late"))
                }
            }
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn gateway(behavior: Behavior) -> ProviderGateway {
        ProviderGateway::with_timeout(
            Arc::new(StubProvider(behavior)),
            Duration::from_millis(50),
        )
    }

    fn request() -> CompletionRequest {
        CompletionRequest::instructed("sys", "hi", Budget::new(0.5, 10))
    }

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let gw = gateway(Behavior::Reply("  hello there \n"));
        assert_eq!(gw.complete(&request()).await.as_deref(), Some("hello there"));
        assert_eq!(
            gw.stats(),
            GatewayStats {
                calls: 1,
                successes: 1,
                failures: 0
            }
        );
    }

    #[tokio::test]
    async fn test_blank_completion_is_absent() {
        let gw = gateway(Behavior::Reply("   \n\t"));
        assert!(gw.complete(&request()).await.is_none());
        assert_eq!(gw.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_provider_errors_are_absent() {
        for status in [401, 429, 500, 400] {
            let gw = gateway(Behavior::Fail(status));
            assert!(gw.complete(&request()).await.is_none());
        }
    }

    #[tokio::test]
    async fn test_timeout_is_absent() {
        let gw = gateway(Behavior::Hang);
        assert!(gw.complete(&request()).await.is_none());
        assert_eq!(gw.stats().calls, 1);
        assert_eq!(gw.stats().failures, 1);
    }

    #[test]
    fn test_provider_identity() {
        let gw = gateway(Behavior::Reply("x"));
        assert_eq!(gw.provider_name(), "stub");
        assert_eq!(gw.model(), "stub-model");
    }
}
