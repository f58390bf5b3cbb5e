// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers behind a trait seam.
//!
//! The store never talks to a timer facility directly; it asks a [`Scheduler`]
//! for "invoke this callback after N milliseconds" and keeps the returned
//! [`TimerHandle`] so every removal path can cancel the pending expiry.
//!
//! Two implementations are provided: [`TokioScheduler`] for running
//! applications, and [`ManualScheduler`], a virtual clock driven by
//! [`ManualScheduler::advance`] for deterministic tests and single-threaded
//! hosts.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

/// Cancellation handle for a scheduled callback.
///
/// Cancelling after the callback has already run is a harmless no-op, as is
/// cancelling twice.
pub trait TimerHandle: Send {
    fn cancel(&self);
}

/// A facility that runs a callback once after a delay.
pub trait Scheduler: Send + Sync {
    /// Schedules `callback` to run once after `delay`.
    ///
    /// The returned handle cancels the callback if it has not fired yet.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> Box<dyn TimerHandle>;
}

// ============================================================================
// Tokio-backed scheduler
// ============================================================================

/// Scheduler backed by spawned Tokio tasks.
///
/// Each scheduled callback becomes a task that sleeps for the delay and then
/// runs the callback; cancellation aborts the task. [`Scheduler::schedule`]
/// must be called from within a Tokio runtime context.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

struct TokioTimerHandle {
    abort: tokio::task::AbortHandle,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        self.abort.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send>,
    ) -> Box<dyn TimerHandle> {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Box::new(TokioTimerHandle {
            abort: task.abort_handle(),
        })
    }
}

// ============================================================================
// Manually driven scheduler
// ============================================================================

/// Scheduler with a virtual clock, advanced explicitly by the caller.
///
/// Nothing fires until [`ManualScheduler::advance`] moves the clock past a
/// callback's deadline, which makes timer behavior fully deterministic.
/// Cloning yields another handle to the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_token: u64,
    entries: Vec<ManualEntry>,
}

struct ManualEntry {
    token: u64,
    due: Duration,
    callback: Box<dyn FnOnce() + Send>,
}

struct ManualTimerHandle {
    token: u64,
    inner: Weak<Mutex<ManualInner>>,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            lock_recovering(&inner).entries.retain(|e| e.token != self.token);
        }
    }
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        lock_recovering(&self.inner).now
    }

    /// Returns the number of armed (not yet fired, not cancelled) callbacks.
    #[must_use]
    pub fn pending(&self) -> usize {
        lock_recovering(&self.inner).entries.len()
    }

    /// Moves the virtual clock forward and fires every callback whose
    /// deadline has been reached, in deadline order.
    ///
    /// Callbacks run outside the scheduler's internal lock, so they may
    /// schedule or cancel further timers.
    pub fn advance(&self, delta: Duration) {
        {
            let mut inner = lock_recovering(&self.inner);
            inner.now += delta;
        }

        // Callbacks may arm new timers that are already due; keep draining
        // until the clock has caught up with every deadline.
        loop {
            let due = {
                let mut inner = lock_recovering(&self.inner);
                let now = inner.now;
                let mut due: Vec<ManualEntry> = Vec::new();
                let mut i = 0;
                while i < inner.entries.len() {
                    if inner.entries[i].due <= now {
                        due.push(inner.entries.remove(i));
                    } else {
                        i += 1;
                    }
                }
                due.sort_by_key(|e| (e.due, e.token));
                due
            };

            if due.is_empty() {
                break;
            }
            for entry in due {
                (entry.callback)();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send>,
    ) -> Box<dyn TimerHandle> {
        let mut inner = lock_recovering(&self.inner);
        let token = inner.next_token;
        inner.next_token += 1;
        let due = inner.now + delay;
        inner.entries.push(ManualEntry {
            token,
            due,
            callback,
        });
        Box::new(ManualTimerHandle {
            token,
            inner: Arc::downgrade(&self.inner),
        })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock_recovering(&self.inner);
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.entries.len())
            .finish()
    }
}

/// Locks the scheduler state, recovering from poisoning (there is no error
/// path to surface it through).
fn lock_recovering(inner: &Mutex<ManualInner>) -> MutexGuard<'_, ManualInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
