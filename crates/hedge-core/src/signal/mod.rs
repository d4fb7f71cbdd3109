//! One-shot cancellation signal shared by every worker of a race.
//!
//! The signal starts "not cancelled" and moves to "cancelled" exactly once.
//! Any number of callers may race on [`CancelSignal::trigger`]; only the one whose
//! compare-and-set succeeds owns the transition and sees `true`.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::trace;

#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    fired: AtomicBool,
    token: CancellationToken,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the signal to "cancelled".
    ///
    /// Returns `true` only for the single caller that performed the transition.
    /// Later or concurrent calls are no-ops and return `false`.
    pub fn trigger(&self) -> bool {
        let won = self
            .inner
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            trace!(target: "hedge.core.signal", "cancellation signal fired");
            self.inner.token.cancel();
        }
        won
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.token.is_cancelled()
    }

    /// Future that resolves once the signal has fired (immediately if it already has).
    #[inline]
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.inner.token.cancelled()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn starts_not_cancelled() {
        let signal = CancelSignal::new();
        assert!(!signal.is_cancelled());
    }

    #[test]
    fn second_trigger_is_noop() {
        let signal = CancelSignal::new();
        assert!(signal.trigger());
        assert!(!signal.trigger());
        assert!(signal.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let signal = CancelSignal::new();
        let other = signal.clone();
        assert!(other.trigger());
        assert!(signal.is_cancelled());
        assert!(!signal.trigger());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_triggers_have_single_owner() {
        let signal = CancelSignal::new();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let signal = signal.clone();
                tokio::spawn(async move { signal.trigger() })
            })
            .collect();

        let mut owners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                owners += 1;
            }
        }
        assert_eq!(owners, 1);
        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_future_wakes_waiter() {
        let signal = CancelSignal::new();
        let waiter = {
            let signal = signal.clone();
            tokio::spawn(async move { signal.cancelled().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        signal.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should observe cancellation")
            .unwrap();
    }
}
