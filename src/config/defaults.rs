// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the toast subsystem.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: queue bound for simultaneously active notifications
//! - **Durations**: per-severity auto-expiry defaults

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of simultaneously active notifications.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 5;

/// Smallest usable capacity bound (a zero-capacity store is clamped to this).
pub const MIN_MAX_NOTIFICATIONS: usize = 1;

// ==========================================================================
// Duration Defaults (milliseconds)
// ==========================================================================

/// Default display duration for success, warning, and info notifications.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Default display duration for error notifications. Errors are shown
/// longer than the other severities so users have time to read them.
pub const ERROR_DURATION_MS: u64 = 7_000;

/// Duration value meaning "persist until explicitly dismissed".
pub const PERSISTENT_DURATION_MS: u64 = 0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
    assert!(MIN_MAX_NOTIFICATIONS >= 1);

    assert!(DEFAULT_DURATION_MS > PERSISTENT_DURATION_MS);
    assert!(ERROR_DURATION_MS > DEFAULT_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_NOTIFICATIONS, 5);
        assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
    }

    #[test]
    fn duration_defaults_are_valid() {
        assert_eq!(DEFAULT_DURATION_MS, 5_000);
        assert_eq!(ERROR_DURATION_MS, 7_000);
        assert!(ERROR_DURATION_MS > DEFAULT_DURATION_MS);
    }

    #[test]
    fn persistent_duration_is_zero() {
        assert_eq!(PERSISTENT_DURATION_MS, 0);
    }
}
