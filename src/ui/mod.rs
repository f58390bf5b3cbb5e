// SPDX-License-Identifier: MPL-2.0
//! Widget layer for rendering the notification queue.
//!
//! This module is the presentation side of the subsystem: it turns the
//! store's snapshot into a stack of toast cards at a configured screen
//! anchor, and routes the widgets' messages (dismiss, action) back into
//! store operations. Everything behavioral lives in the store; the widgets
//! only read [`crate::store::NotificationStore::list`] and emit messages.

mod toast;

pub use toast::{handle_message, Message, Toast};
