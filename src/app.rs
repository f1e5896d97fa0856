//! Application state and core logic

use crate::intake::IntakeClientTrait;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, Form};
use crate::submit::{apply_outcome, SubmitError, SubmitOutcome, Submitter};
use crate::validation::validate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type SubmitResult = Result<SubmitOutcome, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Shared submitter; attempts run on spawned tasks
    submitter: Arc<Submitter>,
    /// Channel that delivers finished attempts back to the event loop
    outcome_tx: UnboundedSender<SubmitResult>,
    outcome_rx: UnboundedReceiver<SubmitResult>,
    /// Attempts spawned but not yet delivered
    pending_submissions: usize,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn IntakeClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            submitter: Arc::new(Submitter::new(client)),
            outcome_tx,
            outcome_rx,
            pending_submissions: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is outstanding
    pub fn is_sending(&self) -> bool {
        self.pending_submissions > 0 || self.submitter.is_in_flight()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Dialogs are modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return;
        }

        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &mut self.state.form;
        let on_submit = form.is_submit_focused();
        let active = form.active_field();
        let on_checkbox = active.is_some_and(|f| f.is_checkbox());
        let on_multiline = active.is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl || key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.request_submit()
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter if on_submit => self.request_submit(),
            KeyCode::Enter if on_checkbox => form.toggle_checkbox(),
            KeyCode::Enter if on_multiline => form.input_char('\n'),
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(' ') if on_submit => self.request_submit(),
            KeyCode::Char(' ') if on_checkbox => form.toggle_checkbox(),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Validate the current field values and, if they pass, send them on a
    /// background task
    fn request_submit(&mut self) {
        if self.is_sending() {
            self.state.status_message = Some("A submission is already in progress".to_string());
            return;
        }

        let errors = validate(&self.state.form.fields);
        if !errors.is_empty() {
            self.apply_submit_result(Ok(SubmitOutcome::Invalid(errors)));
            return;
        }

        let submitter = Arc::clone(&self.submitter);
        let fields = self.state.form.fields.clone();
        let tx = self.outcome_tx.clone();
        self.pending_submissions += 1;

        tokio::spawn(async move {
            let result = submitter.submit(&fields).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(result);
        });
    }

    /// Apply every submission that has finished since the last call
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.outcome_rx.try_recv() {
            self.pending_submissions = self.pending_submissions.saturating_sub(1);
            self.apply_submit_result(result);
        }
    }

    /// Update the form and dialogs from a finished attempt
    pub fn apply_submit_result(&mut self, result: SubmitResult) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.state.status_message = Some(err.to_string());
                return;
            }
        };

        tracing::debug!(success = outcome.is_success(), "submission finished");
        apply_outcome(&mut self.state.form, &outcome);

        match (&outcome, outcome.user_message()) {
            (SubmitOutcome::Invalid(errors), _) => {
                if let Some(first) = errors.fields().next() {
                    self.state.form.focus(first);
                }
                self.state.status_message =
                    Some("Please correct the highlighted fields".to_string());
            }
            (SubmitOutcome::Succeeded, Some(message)) => self.state.notice = Some(message),
            (_, Some(message)) => self.state.push_error(message),
            (_, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{IntakeResponse, MockIntakeClientTrait, TransportError};
    use crate::state::{ContactFields, FieldName, SUBMIT_INDEX};
    use crate::submit::{NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE};
    use crate::validation::{EMAIL_INVALID, PRIVACY_REQUIRED};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn idle_app() -> App {
        let mut client = MockIntakeClientTrait::new();
        client.expect_post_lead().never();
        App::new(Arc::new(client))
    }

    fn app_responding(result: Result<IntakeResponse, TransportError>) -> App {
        let mut client = MockIntakeClientTrait::new();
        client
            .expect_post_lead()
            .times(1)
            .returning(move |_| result.clone());
        App::new(Arc::new(client))
    }

    /// Fill every field through the keyboard, ending on the Submit button
    fn fill_form(app: &mut App) {
        for value in [
            "Ada",
            "Lovelace",
            "ada@analytical.io",
            "Analytical Engines",
            "Head of Legal",
        ] {
            type_str(app, value);
            app.handle_key(key(KeyCode::Enter));
        }
        type_str(app, "Hello");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Tab));
    }

    async fn wait_for_submission(app: &mut App) {
        let result = app.outcome_rx.recv().await.unwrap();
        app.pending_submissions -= 1;
        app.apply_submit_result(result);
    }

    #[test]
    fn test_should_quit_initially_false() {
        assert!(!idle_app().should_quit());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = idle_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
        assert_eq!(app.state.form.fields, ContactFields::default());
    }

    #[test]
    fn test_typing_fills_fields_in_order() {
        let mut app = idle_app();
        fill_form(&mut app);

        let fields = &app.state.form.fields;
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.last_name, "Lovelace");
        assert_eq!(fields.business_email, "ada@analytical.io");
        assert_eq!(fields.company, "Analytical Engines");
        assert_eq!(fields.job_title, "Head of Legal");
        assert_eq!(fields.message, "Hello");
        assert!(fields.privacy_accepted);
        assert_eq!(app.state.form.active_field_index, SUBMIT_INDEX);
    }

    #[test]
    fn test_enter_in_message_adds_newline() {
        let mut app = idle_app();
        app.state.form.focus(FieldName::Message);
        type_str(&mut app, "a");
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "b");
        assert_eq!(app.state.form.fields.message, "a\nb");
    }

    #[test]
    fn test_space_in_text_field_is_text() {
        let mut app = idle_app();
        type_str(&mut app, "Ada Mary");
        assert_eq!(app.state.form.fields.first_name, "Ada Mary");
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut app = idle_app();
        type_str(&mut app, "Adaa");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state.form.fields.first_name, "Ada");
    }

    #[test]
    fn test_up_and_down_move_focus() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.state.form.active_field(), Some(FieldName::LastName));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert!(app.state.form.is_submit_focused());
    }

    #[test]
    fn test_dialog_swallows_keys_until_dismissed() {
        let mut app = idle_app();
        app.state.push_error("oops".to_string());

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.state.form.fields.first_name, "");
        assert!(app.state.has_errors());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.state.has_errors());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_submit_success_resets_form_and_shows_notice() {
        let mut app = app_responding(Ok(IntakeResponse {
            status: 200,
            body: None,
        }));
        fill_form(&mut app);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_sending());
        wait_for_submission(&mut app).await;

        assert!(!app.is_sending());
        assert_eq!(app.state.form.fields, ContactFields::default());
        assert!(app.state.form.errors.is_empty());
        assert_eq!(app.state.notice.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_rejection_keeps_values_and_queues_error() {
        let mut app = app_responding(Ok(IntakeResponse {
            status: 500,
            body: Some("boom".to_string()),
        }));
        fill_form(&mut app);
        let before = app.state.form.fields.clone();

        app.handle_key(ctrl('s'));
        wait_for_submission(&mut app).await;

        assert_eq!(app.state.form.fields, before);
        assert_eq!(
            app.state.current_error(),
            Some("There was an error submitting your form (500). Please try again.")
        );
        assert!(app.state.notice.is_none());
    }

    #[tokio::test]
    async fn test_submit_network_failure_keeps_values() {
        let mut app = app_responding(Err(TransportError::Unreachable(
            "connection refused".to_string(),
        )));
        fill_form(&mut app);
        let before = app.state.form.fields.clone();

        app.handle_key(ctrl('s'));
        wait_for_submission(&mut app).await;

        assert_eq!(app.state.form.fields, before);
        assert_eq!(app.state.current_error(), Some(NETWORK_ERROR_MESSAGE));
    }

    #[test]
    fn test_invalid_submit_shows_inline_errors_and_focuses_first() {
        let mut app = idle_app();
        fill_form(&mut app);
        app.state.form.focus(FieldName::BusinessEmail);
        for _ in 0.."ada@analytical.io".len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_str(&mut app, "not-an-email");
        app.state.form.focus(FieldName::PrivacyAccepted);
        app.handle_key(key(KeyCode::Char(' ')));

        app.handle_key(ctrl('s'));

        assert!(!app.is_sending());
        let errors = &app.state.form.errors;
        assert_eq!(errors.get(FieldName::BusinessEmail), Some(EMAIL_INVALID));
        assert_eq!(errors.get(FieldName::PrivacyAccepted), Some(PRIVACY_REQUIRED));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            app.state.form.active_field(),
            Some(FieldName::BusinessEmail)
        );
        assert!(!app.state.has_dialog());
    }

    #[test]
    fn test_editing_after_failed_submit_clears_only_that_error() {
        let mut app = idle_app();
        app.handle_key(ctrl('s'));
        assert_eq!(app.state.form.errors.len(), FieldName::ALL.len());

        type_str(&mut app, "A");

        assert!(!app.state.form.errors.contains(FieldName::FirstName));
        assert_eq!(app.state.form.errors.len(), FieldName::ALL.len() - 1);
    }

    #[test]
    fn test_typing_right_after_invalid_submit_keeps_the_edit_clean() {
        let mut app = idle_app();
        app.handle_key(ctrl('s'));
        assert!(!app.is_sending());

        type_str(&mut app, "Ada");
        app.poll_submissions();

        assert_eq!(app.state.form.fields.first_name, "Ada");
        assert_eq!(app.state.form.errors.get(FieldName::FirstName), None);
        assert!(app.state.form.errors.contains(FieldName::LastName));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_refused() {
        let mut app = app_responding(Ok(IntakeResponse {
            status: 200,
            body: None,
        }));
        fill_form(&mut app);

        app.handle_key(ctrl('s'));
        app.handle_key(ctrl('s'));

        assert_eq!(
            app.state.status_message.as_deref(),
            Some("A submission is already in progress")
        );
        wait_for_submission(&mut app).await;
        assert_eq!(app.pending_submissions, 0);
    }

    #[test]
    fn test_refused_attempt_is_reported_in_status_bar() {
        let mut app = idle_app();
        app.apply_submit_result(Err(SubmitError::AlreadyInFlight));
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("a submission is already in progress")
        );
        assert!(!app.state.has_dialog());
    }
}
