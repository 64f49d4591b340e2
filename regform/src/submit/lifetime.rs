use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag tied to the lifetime of one form instance.
///
/// Clones observe the same state. Once cancelled a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct LifetimeToken {
    cancelled: Arc<AtomicBool>,
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
