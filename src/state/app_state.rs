//! Application state definitions

use crate::notification::NotificationQueue;
use crate::state::ContactForm;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Editable contact form
    pub form: ContactForm,
    /// Transient notification overlay
    pub notifications: NotificationQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            notifications: NotificationQueue::new(),
        }
    }
}
