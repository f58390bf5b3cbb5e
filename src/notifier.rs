// SPDX-License-Identifier: MPL-2.0
//! Typed convenience surface over the notification store.
//!
//! Application code raises toasts through the [`Notifier`] facade instead of
//! assembling [`ToastSpec`]s by hand: each by-severity helper fills in the
//! severity and its default duration, and merges caller overrides on top.

use crate::notification::{Action, NotificationId, Severity, ToastSpec};
use crate::store::NotificationStore;
use std::time::Duration;

/// Caller-supplied overrides for a facade helper.
///
/// Any field left `None` keeps the severity-specific default. `message` is
/// honored only when the helper's positional message argument is absent —
/// the explicit argument always wins over an options value of the same name.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<Action>,
}

/// By-severity entry points for raising notifications.
#[derive(Debug, Clone)]
pub struct Notifier {
    store: NotificationStore,
}

impl Notifier {
    /// Wraps a store handle.
    #[must_use]
    pub fn new(store: NotificationStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store handle.
    #[must_use]
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Reports a success (displayed 5s by default).
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.success_with(message, Options::default())
    }

    /// Reports a success with overrides.
    pub fn success_with(&self, message: impl Into<String>, options: Options) -> NotificationId {
        self.push(Severity::Success, message, options)
    }

    /// Reports an error (displayed 7s by default — longer than the other
    /// severities, so users have time to read it).
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.error_with(message, Options::default())
    }

    /// Reports an error with overrides.
    pub fn error_with(&self, message: impl Into<String>, options: Options) -> NotificationId {
        self.push(Severity::Error, message, options)
    }

    /// Reports a warning (displayed 5s by default).
    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.warning_with(message, Options::default())
    }

    /// Reports a warning with overrides.
    pub fn warning_with(&self, message: impl Into<String>, options: Options) -> NotificationId {
        self.push(Severity::Warning, message, options)
    }

    /// Reports an informational message (displayed 5s by default).
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.info_with(message, Options::default())
    }

    /// Reports an informational message with overrides.
    pub fn info_with(&self, message: impl Into<String>, options: Options) -> NotificationId {
        self.push(Severity::Info, message, options)
    }

    /// Dismisses a notification; idempotent, like the store's `remove`.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.store.remove(id)
    }

    /// Removes every active notification.
    pub fn clear_all(&self) {
        self.store.clear_all();
    }

    fn push(
        &self,
        severity: Severity,
        message: impl Into<String>,
        options: Options,
    ) -> NotificationId {
        // The positional message argument wins over `Options::message`.
        let message = message.into();
        self.store.add(ToastSpec {
            severity,
            title: options.title,
            message: Some(message),
            duration: Some(
                options
                    .duration
                    .unwrap_or_else(|| severity.default_duration()),
            ),
            dismissible: options.dismissible,
            action: options.action,
        })
    }
}
