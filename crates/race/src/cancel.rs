//! Cooperative cancellation shared by the three drivers of a race.
//!
//! Drivers poll the race's [`CancellationToken`] before every step and before
//! and after every pacing wait. Observing it unwinds the driver through
//! `Err(Cancelled)` and `?`; nothing is thrown and nothing is partially rolled back.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Marker returned by a driver that stopped because its race was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

#[inline]
pub fn check(token: &CancellationToken) -> Result<(), Cancelled> {
    if token.is_cancelled() {
        Err(Cancelled)
    } else {
        Ok(())
    }
}

/// Suspends for `wait` unless `token` fires first.
///
/// A zero wait still yields once so sibling drivers get a turn.
pub async fn pause(wait: Duration, token: &CancellationToken) -> Result<(), Cancelled> {
    check(token)?;
    if wait.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::select! {
            biased;
            _ = token.cancelled() => return Err(Cancelled),
            _ = tokio::time::sleep(wait) => {}
        }
    }
    check(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pause_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();
        assert_eq!(pause(Duration::from_millis(250), &token).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_returns_early_on_cancel() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let start = tokio::time::Instant::now();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });
        assert_eq!(pause(Duration::from_secs(60), &token).await, Err(Cancelled));
        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn pause_refuses_an_already_cancelled_token() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(pause(Duration::ZERO, &token).await, Err(Cancelled));
        assert_eq!(check(&token), Err(Cancelled));
    }
}
