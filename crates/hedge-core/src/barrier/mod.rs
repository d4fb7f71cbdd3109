//! Counting completion barrier.
//!
//! The driver creates a barrier for `N` participants, hands out one [`Arrival`] per
//! participant and awaits [`CompletionBarrier::wait`]. An arrival is recorded when
//! its guard is dropped, so unwinding or aborted participants still count.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tokio::sync::Notify;

#[derive(Clone, Debug)]
pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    total: usize,
    arrived: AtomicUsize,
    notify: Notify,
}

impl Inner {
    fn arrive(&self) {
        let arrived = self.arrived.fetch_add(1, Ordering::AcqRel) + 1;
        if arrived >= self.total {
            self.notify.notify_waiters();
        }
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.arrived.load(Ordering::Acquire) >= self.total
    }
}

impl CompletionBarrier {
    pub fn new(total: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                total,
                arrived: AtomicUsize::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Guard for one participant. Exactly `total` guards should be issued.
    pub fn arrival(&self) -> Arrival {
        Arrival {
            inner: Arc::clone(&self.inner),
        }
    }

    #[inline]
    pub fn arrived(&self) -> usize {
        self.inner.arrived.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    /// Block until every participant has arrived.
    ///
    /// Returns immediately for a barrier of zero participants.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking so an arrival between the check and the await is not lost.
            notified.as_mut().enable();

            if self.inner.is_complete() {
                return;
            }
            notified.await;
        }
    }
}

/// Arrival token of one participant; arrives on drop.
#[derive(Debug)]
pub struct Arrival {
    inner: Arc<Inner>,
}

impl Arrival {
    /// Arrive now instead of at scope end.
    pub fn arrive(self) {
        drop(self);
    }
}

impl Drop for Arrival {
    fn drop(&mut self) {
        self.inner.arrive();
    }
}
