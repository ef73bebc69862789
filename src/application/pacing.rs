use std::time::Duration;

use crate::domain::{CancelToken, Cancelled};

/// Suspension points of a generation run. Both calls return
/// `Err(Cancelled)` when the token is cancelled before or while waiting.
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn delay(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled>;

    async fn yield_once(&self, cancel: &CancelToken) -> Result<(), Cancelled>;
}

/// Pacer backed by the tokio timer; needs a running tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn delay(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled> {
        cancel.check()?;
        tokio::select! {
            _ = tokio::time::sleep(duration) => cancel.check(),
            _ = cancel.cancelled() => Err(Cancelled),
        }
    }

    async fn yield_once(&self, cancel: &CancelToken) -> Result<(), Cancelled> {
        cancel.check()?;
        tokio::task::yield_now().await;
        cancel.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delay_waits() {
        let start = Instant::now();
        TokioPacer
            .delay(Duration::from_millis(20), &CancelToken::new())
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_delay_cut_short_by_cancel() {
        let cancel = CancelToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let start = Instant::now();
        let result = TokioPacer.delay(Duration::from_secs(30), &cancel).await;
        assert_eq!(result, Err(Cancelled));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_yield_observes_cancel() {
        let cancel = CancelToken::new();
        assert_eq!(TokioPacer.yield_once(&cancel).await, Ok(()));

        cancel.cancel();
        assert_eq!(TokioPacer.yield_once(&cancel).await, Err(Cancelled));
    }
}
