//! Deferred cache sweeping.
//!
//! Every cache access arms a one-shot timer (unless one is already pending).
//! When it fires, the factory drops entries that are neither recently used
//! nor held by a caller. Hosts either poll [`IconFactory::run_due_sweep`]
//! from their own event loop or spawn [`run_sweeper`] on a tokio `LocalSet`.

use std::cell::RefCell;
use std::rc::Weak;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use super::cache::IconFactory;
use super::loader::PixbufLoader;

/// Delay between the first cache access and the sweep it schedules.
pub const DEFAULT_SWEEP_DELAY: Duration = Duration::from_secs(10);

/// One-shot, idempotently armed sweep timer.
#[derive(Debug)]
pub struct SweepTimer {
    delay: Duration,
    deadline: Option<Instant>,
    scheduled: Arc<Notify>,
}

impl Default for SweepTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_DELAY)
    }
}

impl SweepTimer {
    /// Create a disarmed timer.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            scheduled: Arc::new(Notify::new()),
        }
    }

    /// Delay applied when arming.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer unless it is already pending.
    ///
    /// Returns `true` if this call armed it.
    pub fn schedule(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.delay);
        self.scheduled.notify_one();
        true
    }

    /// When the pending sweep is due.
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a pending sweep is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarm the timer.
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn notifier(&self) -> Arc<Notify> {
        Arc::clone(&self.scheduled)
    }
}

impl Drop for SweepTimer {
    fn drop(&mut self) {
        // Wake a parked sweeper so it notices the factory is gone.
        self.scheduled.notify_one();
    }
}

/// Drive the factory's sweeps from a tokio `LocalSet`.
///
/// Holds only a weak reference and returns once the host drops the factory.
pub async fn run_sweeper<L: PixbufLoader>(factory: Weak<RefCell<IconFactory<L>>>) {
    let Some(scheduled) = factory.upgrade().map(|f| {
        let notifier = f.borrow().sweep_notifier();
        notifier
    }) else {
        return;
    };

    loop {
        let deadline = match factory.upgrade() {
            Some(f) => {
                let deadline = f.borrow().sweep_deadline();
                deadline
            }
            None => break,
        };

        match deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                let Some(f) = factory.upgrade() else {
                    break;
                };
                let removed = f.borrow_mut().run_due_sweep(Instant::now());
                if let Some(removed) = removed {
                    tracing::debug!("Icon cache sweep removed {removed} entries");
                }
            }
            None => scheduled.notified().await,
        }
    }

    tracing::debug!("Icon factory dropped, sweeper exiting");
}
