// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Severity` enum, the
//! optional follow-up `Action`, and `ToastSpec`, the partial request accepted
//! by the store's `add` operation.

use crate::config::defaults::{DEFAULT_DURATION_MS, ERROR_DURATION_MS};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are allocated by the store from a strictly increasing counter and are
/// never reused, even after the notification is removed. A stale timer or a
/// redundant dismiss can therefore never hit the wrong entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value, for diagnostics.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines the default display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Error requiring attention (shown longer than the other severities).
    Error,
    /// Warning that doesn't block operation.
    Warning,
    /// Informational message.
    #[default]
    Info,
}

impl Severity {
    /// Returns the default display duration for this severity.
    ///
    /// Errors are shown longer (7s vs 5s) so users have time to read them
    /// before they expire. This is a deliberate product decision.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Error => Duration::from_millis(ERROR_DURATION_MS),
            Severity::Success | Severity::Warning | Severity::Info => {
                Duration::from_millis(DEFAULT_DURATION_MS)
            }
        }
    }
}

/// A single user-triggerable follow-up attached to a notification.
///
/// Invoking the action does not dismiss the notification by itself; the
/// presentation layer decides whether to dismiss afterwards.
#[derive(Clone)]
pub struct Action {
    label: String,
    on_invoke: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Creates an action with the given button label and callback.
    pub fn new(label: impl Into<String>, on_invoke: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            on_invoke: Arc::new(on_invoke),
        }
    }

    /// Returns the label shown on the action affordance.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.on_invoke)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A notification to be displayed to the user.
///
/// Logically immutable after construction: the store only ever removes it.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: Option<String>,
    /// `Duration::ZERO` means "persist until explicitly dismissed".
    duration: Duration,
    dismissible: bool,
    action: Option<Action>,
    created_at: Instant,
}

impl Notification {
    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the optional short heading.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the optional body text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the time until auto-expiry; `Duration::ZERO` means persistent.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this notification never auto-expires.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns whether a user-initiated close affordance should be offered.
    #[must_use]
    pub fn dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns the optional follow-up action.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the remaining lifetime as a percentage in `0.0..=100.0`.
    ///
    /// Drives the expiry-progress indicator: `max(0, 100 - elapsed/duration*100)`.
    /// Persistent notifications always report `100.0`.
    #[must_use]
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 100.0;
        }
        let elapsed = self.age().as_secs_f32();
        let total = self.duration.as_secs_f32();
        (100.0 - elapsed / total * 100.0).max(0.0)
    }
}

/// Partial specification accepted by the store's `add` operation.
///
/// Every field is optional; unset fields fall back to defaults (severity
/// `Info`, duration 5000ms, dismissible). Malformed input cannot be
/// expressed: there is no validation that rejects a spec.
#[derive(Debug, Clone, Default)]
pub struct ToastSpec {
    pub severity: Severity,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<Action>,
}

impl ToastSpec {
    pub(crate) fn into_notification(self, id: NotificationId) -> Notification {
        Notification {
            id,
            severity: self.severity,
            title: self.title,
            message: self.message,
            duration: self
                .duration
                .unwrap_or(Duration::from_millis(DEFAULT_DURATION_MS)),
            dismissible: self.dismissible.unwrap_or(true),
            action: self.action,
            created_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn error_severity_displays_longer() {
        assert_eq!(
            Severity::Error.default_duration(),
            Duration::from_millis(7000)
        );
        assert_eq!(
            Severity::Success.default_duration(),
            Duration::from_millis(5000)
        );
        assert!(Severity::Error.default_duration() > Severity::Warning.default_duration());
    }

    #[test]
    fn empty_spec_falls_back_to_defaults() {
        let notification = ToastSpec::default().into_notification(NotificationId::from_raw(0));

        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.duration(), Duration::from_millis(5000));
        assert!(notification.dismissible());
        assert!(notification.title().is_none());
        assert!(notification.message().is_none());
        assert!(notification.action().is_none());
    }

    #[test]
    fn zero_duration_means_persistent() {
        let spec = ToastSpec {
            duration: Some(Duration::ZERO),
            ..ToastSpec::default()
        };
        let notification = spec.into_notification(NotificationId::from_raw(1));

        assert!(notification.is_persistent());
        assert_eq!(notification.remaining_percent(), 100.0);
    }

    #[test]
    fn remaining_percent_never_goes_negative() {
        let spec = ToastSpec {
            duration: Some(Duration::from_nanos(1)),
            ..ToastSpec::default()
        };
        let notification = spec.into_notification(NotificationId::from_raw(2));

        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(notification.remaining_percent(), 0.0);
    }

    #[test]
    fn fresh_notification_reports_nearly_full_remaining() {
        let spec = ToastSpec {
            duration: Some(Duration::from_secs(3600)),
            ..ToastSpec::default()
        };
        let notification = spec.into_notification(NotificationId::from_raw(3));

        assert!(notification.remaining_percent() > 99.0);
    }

    #[test]
    fn action_invoke_runs_callback_without_consuming_it() {
        static FIRED: AtomicBool = AtomicBool::new(false);
        let action = Action::new("Retry", || {
            FIRED.store(true, Ordering::SeqCst);
        });

        assert_eq!(action.label(), "Retry");
        action.invoke();
        assert!(FIRED.load(Ordering::SeqCst));

        // A clone shares the same callback.
        FIRED.store(false, Ordering::SeqCst);
        action.clone().invoke();
        assert!(FIRED.load(Ordering::SeqCst));
    }

    #[test]
    fn notification_id_display_is_stable() {
        assert_eq!(NotificationId::from_raw(42).to_string(), "#42");
    }
}
