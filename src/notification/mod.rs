//! Notification module

mod queue;

pub use queue::{Notification, NotificationQueue, NotificationStyle, Severity, MAX_VISIBLE};
