use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting admission control: at most `capacity` holders at a time.
///
/// Clones share the same slots. A [`GatePermit`] returns its slot when
/// dropped, so a slot is released on every exit path of the holder.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    slots: Arc<Semaphore>,
}

impl ConcurrencyGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Blocks the calling task until a slot is free.
    pub async fn acquire(&self) -> GatePermit {
        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .expect("gate semaphore is never closed");
        GatePermit { _permit: permit }
    }

    #[cfg(test)]
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}

#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}
