use std::sync::atomic::{AtomicU64, Ordering};

use crate::Clock;

/// Issues clock-derived ids that strictly increase within a process.
#[derive(Debug)]
pub(crate) struct IdSource {
    clock: Clock,
    last_issued: AtomicU64,
}

impl IdSource {
    /// `floor` is treated as already issued.
    pub(crate) fn new(clock: Clock, floor: u64) -> Self {
        Self {
            clock,
            last_issued: AtomicU64::new(floor),
        }
    }

    /// Clock milliseconds, bumped past the last issued id when needed.
    pub(crate) fn next(&self) -> u64 {
        let now = self.clock.now_millis();
        let mut last = self.last_issued.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last_issued.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Record an id seen elsewhere so it is never issued again.
    pub(crate) fn observe(&self, id: u64) {
        self.last_issued.fetch_max(id, Ordering::AcqRel);
    }
}
