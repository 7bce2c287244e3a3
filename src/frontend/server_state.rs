use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Server-wide state: the shutdown flag checked by the accept loops and a
/// counter of in-flight requests.
#[derive(Clone, Default)]
pub struct ServerState {
    shutdown: Arc<AtomicBool>,
    pending_requests: Arc<AtomicUsize>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the server is shutting down
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Signals that the server should start shutting down
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    pub fn increment_pending(&self) {
        self.pending_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn decrement_pending(&self) {
        self.pending_requests.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn pending_requests_count(&self) -> usize {
        self.pending_requests.load(Ordering::Relaxed)
    }
}
