// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` is a transient-notification (toast) subsystem for Iced applications.
//!
//! It keeps a bounded, insertion-ordered queue of active notifications, assigns each
//! one a unique id, auto-expires entries on independent cancellable timers, and ships
//! an optional widget layer for rendering the queue as a stack of toast cards.
//!
//! The store is an explicitly constructed, cheap-to-clone handle rather than a global
//! singleton: wire one instance at application start and hand clones to whatever
//! needs to raise or dismiss notifications.

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod config;
pub mod error;
pub mod notification;
pub mod notifier;
pub mod scheduler;
pub mod store;
pub mod ui;
