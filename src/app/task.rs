// ABOUTME: Cancellable background work owned by the app state
// Dropping a PendingTask aborts the tokio task behind it

use futures_util::FutureExt;
use std::future::Future;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

pub struct PendingTask<T> {
    label: &'static str,
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> PendingTask<T> {
    pub fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        debug!("Spawning background task: {}", label);
        Self {
            label,
            handle: tokio::spawn(future),
        }
    }
}

impl<T> PendingTask<T> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Non-blocking check for the task result. Call at most once after it
    /// returns Some; the task is spent afterwards.
    pub fn poll(&mut self) -> Option<Result<T, JoinError>> {
        if !self.handle.is_finished() {
            return None;
        }
        (&mut self.handle).now_or_never()
    }
}

impl<T> Drop for PendingTask<T> {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Cancelling background task: {}", self.label);
            self.handle.abort();
        }
    }
}
