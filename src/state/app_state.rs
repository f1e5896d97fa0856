//! Application state

use super::forms::ContactForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The contact form being filled in
    pub form: ContactForm,
    /// Submission errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// Confirmation shown after a successful submission
    pub notice: Option<String>,
    /// One-line message in the status bar, cleared on the next key press
    pub status_message: Option<String>,
}

impl AppState {
    /// Queue an error message for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Whether a modal dialog is showing
    pub fn has_dialog(&self) -> bool {
        self.has_errors() || self.notice.is_some()
    }

    /// Dismiss whichever dialog is on top (errors first)
    pub fn dismiss_dialog(&mut self) {
        if self.has_errors() {
            self.dismiss_error();
        } else {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_dialog() {
        let state = AppState::default();
        assert!(!state.has_dialog());
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());

        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_dialog_prefers_errors() {
        let mut state = AppState::default();
        state.notice = Some("Thanks".to_string());
        state.push_error("oops".to_string());

        state.dismiss_dialog();
        assert!(!state.has_errors());
        assert!(state.has_dialog());

        state.dismiss_dialog();
        assert!(!state.has_dialog());
    }
}
