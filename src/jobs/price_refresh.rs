use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay used in production to simulate a live price lookup
pub const REFRESH_DELAY: Duration = Duration::from_secs(2);

/// Errors a refresh task can report
///
/// The simulated lookup never fails, but the variant keeps the channel
/// contract honest for when a real price integration lands.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Price lookup failed for {ticker}: {reason}")]
    LookupFailed { ticker: String, reason: String },
}

/// Outcome of a background refresh task, delivered on the completion channel
#[derive(Debug)]
pub enum RefreshEvent {
    Completed { ticker: String },
    Failed { ticker: String, error: RefreshError },
}

/// Spawns detached price-refresh tasks after a stock is added
///
/// Each task logs a start marker, sleeps for the configured delay to
/// simulate a network call, logs a completion marker, and reports on the
/// completion channel. It never writes back to storage. The triggering
/// request does not await the task.
pub struct PriceRefresher {
    delay: Duration,
    completion_tx: mpsc::UnboundedSender<RefreshEvent>,
}

impl PriceRefresher {
    /// Create a refresher and the receiving end of its completion channel
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<RefreshEvent>) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        (
            Self {
                delay,
                completion_tx,
            },
            completion_rx,
        )
    }

    /// Launch a detached refresh task for a ticker
    ///
    /// Returns the join handle for callers that want to observe the task,
    /// but nothing in the request path awaits it.
    pub fn spawn(&self, ticker: String) -> JoinHandle<()> {
        let delay = self.delay;
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            tracing::info!("Background: started fetching live price for {}", ticker);

            // Simulate a network call that takes time
            tokio::time::sleep(delay).await;

            tracing::info!("Background: finished fetching live price for {}", ticker);

            // Receiver may already be gone during shutdown; nothing to do then
            let _ = completion_tx.send(RefreshEvent::Completed { ticker });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refresh_reports_completion_for_ticker() {
        let (refresher, mut events) = PriceRefresher::new(Duration::from_millis(5));

        refresher.spawn("AAPL".to_string());

        match events.recv().await {
            Some(RefreshEvent::Completed { ticker }) => assert_eq!(ticker, "AAPL"),
            other => panic!("expected completion event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_does_not_block_the_caller() {
        let (refresher, _events) = PriceRefresher::new(Duration::from_secs(60));

        let started = std::time::Instant::now();
        refresher.spawn("SLOW".to_string());

        // spawn returns immediately even though the task sleeps for a minute
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_multiple_refreshes_all_complete() {
        let (refresher, mut events) = PriceRefresher::new(Duration::from_millis(1));

        for ticker in ["AAPL", "MSFT", "GOOG"] {
            refresher.spawn(ticker.to_string());
        }

        let mut completed = Vec::new();
        for _ in 0..3 {
            match events.recv().await {
                Some(RefreshEvent::Completed { ticker }) => completed.push(ticker),
                other => panic!("expected completion event, got {:?}", other),
            }
        }

        completed.sort();
        assert_eq!(completed, vec!["AAPL", "GOOG", "MSFT"]);
    }
}
