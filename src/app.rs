//! Application state and core logic

use crate::backend::{BackendClientTrait, HttpBackendClient};
use crate::config::TuiConfig;
use crate::notification::Severity;
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Notification shown after a successful submission
const SUBMIT_SUCCESS_MSG: &str = "Form submitted successfully!";

/// Notification shown after a failed submission
const SUBMIT_ERROR_MSG: &str = "Error submitting form. Please try again.";

/// Main application struct
pub struct App<C: BackendClientTrait> {
    /// Current application state
    pub state: AppState,
    /// Client for endpoint communication
    backend: C,
    /// Whether the app should quit
    quit: bool,
}

impl App<HttpBackendClient> {
    /// Create a new App instance wired to the HTTP backend
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        Ok(Self::with_client(HttpBackendClient::new(&config)))
    }
}

impl<C: BackendClientTrait> App<C> {
    /// Create an App with the given backend client
    pub fn with_client(backend: C) -> Self {
        Self {
            state: AppState::new(),
            backend,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The endpoint URL the form submits to
    pub fn endpoint(&self) -> &str {
        self.backend.endpoint()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter submits from any focus position, like Enter inside a
            // browser form input
            KeyCode::Enter => self.submit_form().await,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Char(c) => self
                .state
                .form
                .input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the current form snapshot to the endpoint.
    ///
    /// Exactly one request per call, awaited before any further input is
    /// processed. On success the response body is logged and the fields
    /// reset; on any failure the fields are kept so the user can retry
    /// without re-entering data.
    pub async fn submit_form(&mut self) {
        let snapshot = self.state.form.data().clone();

        match self.backend.submit(&snapshot).await {
            Ok(body) => {
                tracing::debug!(response = %body, "submission accepted");
                self.state
                    .notifications
                    .push(SUBMIT_SUCCESS_MSG, Severity::Success);
                self.state.form.reset();
            }
            Err(err) => {
                tracing::error!(error = %err, "submission failed");
                self.state
                    .notifications
                    .push(SUBMIT_ERROR_MSG, Severity::Error);
            }
        }
    }
}
