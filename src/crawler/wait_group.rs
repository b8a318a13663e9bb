use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

struct Inner {
    /// Number of outstanding units of work
    count: AtomicUsize,
    zero: Notify,
}

/// Counts outstanding traversal tasks and lets the crawl wait for all of them,
/// including the ones spawned while waiting.
///
/// Call [`WaitGroup::add`] before spawning and move the returned guard into the
/// task. The count drops when the guard does.
#[derive(Clone)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

/// One registered unit of work. Dropping it marks the unit as done.
pub struct WorkGuard {
    inner: Arc<Inner>,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                count: AtomicUsize::new(0),
                zero: Notify::new(),
            }),
        }
    }

    pub fn add(&self) -> WorkGuard {
        self.inner.count.fetch_add(1, Ordering::SeqCst);
        WorkGuard { inner: Arc::clone(&self.inner) }
    }

    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Resolves once the count is zero.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.zero.notified();
            tokio::pin!(notified);
            // register before reading the count so a concurrent drop to zero can't be missed
            notified.as_mut().enable();

            if self.count() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Default for WaitGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WorkGuard {
    fn drop(&mut self) {
        if self.inner.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.zero.notify_waiters();
        }
    }
}
