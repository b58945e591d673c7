//! Notification queue
//!
//! Transient, severity-tagged messages stacked in the UI. At most
//! [`MAX_VISIBLE`] entries are shown at once; pushing beyond the cap evicts
//! the oldest entry first. Entries auto-expire after [`DISPLAY_DURATION`].

use ratatui::style::Color;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of simultaneously visible notifications
pub const MAX_VISIBLE: usize = 3;

/// How long an entry stays visible before auto-dismissing
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Severity of a notification - determines its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Style for this severity
    pub fn style(self) -> NotificationStyle {
        match self {
            Severity::Success => NotificationStyle {
                fg: Color::Black,
                bg: Color::Green,
                border: Color::LightGreen,
            },
            Severity::Error => NotificationStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone, Copy)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, severity and timing
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: &str, severity: Severity) -> Self {
        Self {
            message: message.to_string(),
            severity,
            created_at: Instant::now(),
            duration: DISPLAY_DURATION,
        }
    }

    /// Check if the display duration has elapsed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Ordered queue of visible notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a notification, evicting the oldest when the cap is exceeded
    pub fn push(&mut self, message: &str, severity: Severity) {
        if self.entries.len() == MAX_VISIBLE {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification::new(message, severity));
    }

    /// Drop entries whose display duration has elapsed
    pub fn evict_expired(&mut self) {
        self.entries.retain(|n| !n.is_expired());
    }

    /// Currently visible entries, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shorten the remaining display time of every entry (test-only)
    #[cfg(test)]
    pub fn set_durations(&mut self, duration: Duration) {
        for entry in &mut self.entries {
            entry.duration = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn messages(queue: &NotificationQueue) -> Vec<&str> {
        queue.visible().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn test_push_and_visible() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push("Saved", Severity::Success);
        assert_eq!(queue.len(), 1);
        assert_eq!(messages(&queue), vec!["Saved"]);
    }

    #[test]
    fn test_severity_styles() {
        let success = Severity::Success.style();
        assert_eq!(success.bg, Color::Green);
        let error = Severity::Error.style();
        assert_eq!(error.bg, Color::Red);
        assert_eq!(error.fg, Color::White);
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut queue = NotificationQueue::new();
        queue.push("one", Severity::Success);
        queue.push("two", Severity::Success);
        queue.push("three", Severity::Success);
        queue.push("four", Severity::Error);

        assert_eq!(queue.len(), MAX_VISIBLE);
        assert_eq!(messages(&queue), vec!["two", "three", "four"]);
    }

    #[test]
    fn test_never_more_than_cap_visible() {
        let mut queue = NotificationQueue::new();
        for i in 0..10 {
            queue.push(&format!("n{i}"), Severity::Success);
            assert!(queue.len() <= MAX_VISIBLE);
        }
        assert_eq!(messages(&queue), vec!["n7", "n8", "n9"]);
    }

    #[test]
    fn test_notification_expiration() {
        let mut notif = Notification::new("expiring", Severity::Success);
        notif.duration = Duration::from_millis(10);
        assert!(!notif.is_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(notif.is_expired());
    }

    #[test]
    fn test_evict_expired_removes_only_expired() {
        let mut queue = NotificationQueue::new();
        queue.push("old", Severity::Success);
        queue.set_durations(Duration::from_millis(10));
        queue.push("fresh", Severity::Error);

        thread::sleep(Duration::from_millis(20));
        queue.evict_expired();

        assert_eq!(messages(&queue), vec!["fresh"]);
    }

    #[test]
    fn test_evict_expired_on_empty_queue() {
        let mut queue = NotificationQueue::new();
        queue.evict_expired(); // should not panic
        assert!(queue.is_empty());
    }

    #[test]
    fn test_entries_keep_default_duration() {
        let mut queue = NotificationQueue::new();
        queue.push("n", Severity::Success);
        let entry = queue.visible().next().unwrap();
        assert_eq!(entry.duration, DISPLAY_DURATION);
        assert!(!entry.is_expired());
    }
}
