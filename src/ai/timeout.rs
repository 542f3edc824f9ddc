//! Timeout helpers for completion calls
//!
//! ```ignore
//! let text = with_timeout(
//!     Duration::from_secs(60),
//!     async { provider.complete(&request).await },
//!     "completion",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::constants::network as net_constants;
use crate::types::{InsightError, Result};

/// Default deadline for one completion call
pub fn default_completion_timeout() -> Duration {
    Duration::from_secs(net_constants::DEFAULT_TIMEOUT_SECS)
}

/// Execute an async operation with a timeout
///
/// Returns [`InsightError::Timeout`] if the operation doesn't complete within
/// the specified duration. The inner future is dropped (cancelled) on expiry.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(InsightError::timeout(operation_name, timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_completion_timeout() {
        assert_eq!(default_completion_timeout().as_secs(), 60);
    }

    #[tokio::test]
    async fn test_with_timeout_success() {
        let result = with_timeout(
            Duration::from_secs(1),
            async { Ok::<_, InsightError>(42) },
            "test operation",
        )
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result = with_timeout(
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, InsightError>(42)
            },
            "slow operation",
        )
        .await;
        assert!(matches!(result.unwrap_err(), InsightError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_inner_error() {
        let result: Result<()> = with_timeout(
            Duration::from_secs(1),
            async { Err(InsightError::Config("bad".into())) },
            "failing operation",
        )
        .await;
        assert!(result.unwrap_err().is_config());
    }
}
