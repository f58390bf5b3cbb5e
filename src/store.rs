// SPDX-License-Identifier: MPL-2.0
//! Notification store: the single source of truth for active toasts.
//!
//! The store owns a bounded, insertion-ordered queue of notifications,
//! allocates their ids, and arms one cancellable expiry timer per entry.
//! Every removal path (manual dismiss, capacity eviction, clear-all, the
//! expiry itself) cancels or consumes the entry's timer, so an expiry fires
//! at most once and a stale callback can at worst hit an idempotent no-op.

use crate::config::Config;
use crate::notification::{Notification, NotificationId, ToastSpec};
use crate::scheduler::{Scheduler, TimerHandle};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to the notification store.
///
/// Cheap to clone; all clones share the same queue. One store instance is
/// constructed at application start and injected into whatever raises or
/// dismisses notifications — there is no global singleton.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<Mutex<Inner>>,
    scheduler: Arc<dyn Scheduler>,
}

struct Inner {
    /// Active notifications, oldest first (strict insertion order).
    queue: VecDeque<Notification>,
    /// Pending expiry timers, one per auto-expiring notification.
    timers: HashMap<NotificationId, Box<dyn TimerHandle>>,
    /// Next id to allocate. Strictly increasing, never reused.
    next_id: u64,
    max_notifications: usize,
}

impl NotificationStore {
    /// Creates a store that holds at most `max_notifications` entries.
    ///
    /// A bound of zero is treated as one; a store that can hold nothing
    /// would silently drop every notification.
    #[must_use]
    pub fn new(max_notifications: usize, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                queue: VecDeque::new(),
                timers: HashMap::new(),
                next_id: 0,
                max_notifications: max_notifications.max(1),
            })),
            scheduler,
        }
    }

    /// Creates a store sized from a [`Config`].
    #[must_use]
    pub fn from_config(config: &Config, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(config.max_notifications, scheduler)
    }

    /// Adds a notification built from `spec` and returns its id.
    ///
    /// Missing spec fields fall back to defaults. If the queue would exceed
    /// its bound, the oldest entries are evicted first — including persistent
    /// ones — and their pending timers are cancelled. If the resulting
    /// duration is non-zero, a one-shot timer is armed that removes the entry
    /// when it fires.
    ///
    /// Always succeeds; there are no error conditions.
    pub fn add(&self, spec: ToastSpec) -> NotificationId {
        let mut evicted: Vec<Box<dyn TimerHandle>> = Vec::new();
        let id;
        {
            let mut inner = lock_recovering(&self.inner);
            id = NotificationId::from_raw(inner.next_id);
            inner.next_id += 1;

            let notification = spec.into_notification(id);
            let duration = notification.duration();
            inner.queue.push_back(notification);

            while inner.queue.len() > inner.max_notifications {
                if let Some(oldest) = inner.queue.pop_front() {
                    if let Some(handle) = inner.timers.remove(&oldest.id()) {
                        evicted.push(handle);
                    }
                }
            }

            if !duration.is_zero() {
                let weak = Arc::downgrade(&self.inner);
                let handle = self.scheduler.schedule(
                    duration,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            // Expiry consumes its own timer entry; no cancel needed.
                            let _ = lock_recovering(&inner).remove_entry(id);
                        }
                    }),
                );
                inner.timers.insert(id, handle);
            }
        }

        // Cancel outside the queue lock.
        for handle in evicted {
            handle.cancel();
        }
        id
    }

    /// Removes the notification with `id`, cancelling its pending timer.
    ///
    /// Returns `true` if the notification was found and removed. An unknown
    /// or already-removed id is a silent no-op: a timer firing and a user
    /// click may race to dismiss the same entry, and both must be safe.
    pub fn remove(&self, id: NotificationId) -> bool {
        let (found, handle) = lock_recovering(&self.inner).remove_entry(id);
        if let Some(handle) = handle {
            handle.cancel();
        }
        found
    }

    /// Removes every active notification and cancels every pending timer.
    pub fn clear_all(&self) {
        let handles: Vec<Box<dyn TimerHandle>> = {
            let mut inner = lock_recovering(&self.inner);
            inner.queue.clear();
            inner.timers.drain().map(|(_, handle)| handle).collect()
        };
        for handle in handles {
            handle.cancel();
        }
    }

    /// Returns a snapshot of the active notifications, oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        lock_recovering(&self.inner).queue.iter().cloned().collect()
    }

    /// Runs the action callback of the identified notification, if it has one.
    ///
    /// Returns `true` if an action was invoked. Does not dismiss the
    /// notification; the presentation layer dismisses separately if desired.
    pub fn invoke_action(&self, id: NotificationId) -> bool {
        let action = lock_recovering(&self.inner)
            .queue
            .iter()
            .find(|n| n.id() == id)
            .and_then(|n| n.action().cloned());

        // Run the callback outside the lock: it may call back into the store.
        match action {
            Some(action) => {
                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        lock_recovering(&self.inner).queue.len()
    }

    /// Returns whether no notifications are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock_recovering(&self.inner).queue.is_empty()
    }

    /// Returns the capacity bound.
    #[must_use]
    pub fn max_notifications(&self) -> usize {
        lock_recovering(&self.inner).max_notifications
    }
}

impl Inner {
    /// Removes a queue entry and takes its timer handle, if either exists.
    fn remove_entry(&mut self, id: NotificationId) -> (bool, Option<Box<dyn TimerHandle>>) {
        let handle = self.timers.remove(&id);
        let found = if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            true
        } else {
            false
        };
        (found, handle)
    }
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock_recovering(&self.inner);
        f.debug_struct("NotificationStore")
            .field("active", &inner.queue.len())
            .field("max_notifications", &inner.max_notifications)
            .finish()
    }
}

/// Locks the store state, recovering from poisoning (store operations have
/// no error path to surface it through).
fn lock_recovering(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
