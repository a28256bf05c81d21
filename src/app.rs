//! Application state and core logic

use crate::config::SignupConfig;
use crate::state::{FieldKind, Form, SignupForm, SubmitError, ValidationRules};
use crate::submit::{AlertSubmitHandler, SubmitHandler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Main application struct
pub struct App {
    /// Signup form state owned by this session
    pub form: SignupForm,
    /// Handler receiving valid submissions
    handler: Arc<dyn SubmitHandler>,
    /// Result of the in-flight submission, if any
    pending_submission: Option<oneshot::Receiver<Result<String>>>,
    /// Serialized values shown after a completed submission
    pub alert_message: Option<String>,
    /// Error shown in a modal dialog
    pub error_message: Option<String>,
    /// Transient message in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &SignupConfig) -> Self {
        let handler = AlertSubmitHandler::new(config.submit_delay());
        Self::with_handler(config.validation_rules(), Arc::new(handler))
    }

    /// Create an App with a specific validation ruleset and submit handler
    pub fn with_handler(rules: ValidationRules, handler: Arc<dyn SubmitHandler>) -> Self {
        Self {
            form: SignupForm::new(rules),
            handler,
            pending_submission: None,
            alert_message: None,
            error_message: None,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the app to quit
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Check whether a submission is waiting on the handler
    pub fn is_submission_pending(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Dialogs are modal
        if self.error_message.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.error_message = None;
            }
            return;
        }
        if self.alert_message.is_some() {
            self.handle_alert_key(key);
            return;
        }

        self.status_message = None;
        self.handle_form_key(key);
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.alert_message = None,
            KeyCode::Char('c') => {
                let Some(text) = self.alert_message.clone() else {
                    return;
                };
                match copy_to_clipboard(&text) {
                    Ok(()) => self.status_message = Some("Copied to clipboard".to_string()),
                    Err(err) => {
                        tracing::warn!("Clipboard copy failed: {err:#}");
                        self.error_message = Some(format!("Failed to copy: {err}"));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let active_kind = self.form.active_form_field().map(|f| f.kind);
        let on_submit_row = self.form.is_submit_row_active();

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Esc => self.quit(),
            KeyCode::Right if matches!(active_kind, Some(FieldKind::Select { .. })) => {
                self.form.select_next_job_type()
            }
            KeyCode::Left if matches!(active_kind, Some(FieldKind::Select { .. })) => {
                self.form.select_prev_job_type()
            }
            KeyCode::Char(' ') => {
                if !self.form.toggle_active() {
                    self.form.input_char(' ');
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)
            }
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
    }

    /// Validate the form and, if it passes, hand the values to the submit handler
    pub fn submit(&mut self) {
        let values = match self.form.begin_submit() {
            Ok(values) => values,
            Err(SubmitError::InProgress) => {
                tracing::debug!("Submit ignored: already submitting");
                return;
            }
            Err(err @ SubmitError::Invalid(_)) => {
                tracing::debug!("Submit blocked: {err}");
                self.status_message = Some(err.to_string());
                return;
            }
        };

        tracing::info!("Submitting signup (attempt {})", self.form.submit_count);
        let handler = Arc::clone(&self.handler);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = handler.submit(values).await;
            // Receiver is gone only if the app already exited
            let _ = tx.send(result);
        });
        self.pending_submission = Some(rx);
    }

    /// Check whether the in-flight submission has completed
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending_submission.as_mut() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Err(TryRecvError::Empty) => return,
            Ok(outcome) => outcome,
            Err(TryRecvError::Closed) => Err(anyhow::anyhow!("submission task ended unexpectedly")),
        };

        self.pending_submission = None;
        self.form.finish_submit();

        match outcome {
            Ok(message) => {
                tracing::info!("Signup submission completed");
                self.alert_message = Some(message);
            }
            Err(err) => {
                tracing::warn!("Signup submission failed: {err:#}");
                self.error_message = Some(format!("Submission failed: {err}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
impl App {
    /// App whose handler must never be called
    pub fn for_tests() -> Self {
        Self::with_handler(
            ValidationRules::default(),
            Arc::new(crate::submit::MockSubmitHandler::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FormValues, JobType};
    use crate::submit::MockSubmitHandler;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn valid_values(job_type: JobType) -> FormValues {
        FormValues {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            accepted_terms: true,
            job_type: Some(job_type),
        }
    }

    fn fill(app: &mut App, values: &FormValues) {
        app.form.set_text(FieldName::FirstName, values.first_name.clone());
        app.form.set_text(FieldName::LastName, values.last_name.clone());
        app.form.set_text(FieldName::Email, values.email.clone());
        app.form.set_job_type(values.job_type);
        if app.form.values.accepted_terms != values.accepted_terms {
            app.form.toggle_terms();
        }
    }

    async fn wait_for_submission(app: &mut App) {
        while app.is_submission_pending() {
            tokio::time::sleep(Duration::from_millis(1)).await;
            app.poll_submission();
        }
    }

    fn app_with_mock(mock: MockSubmitHandler) -> App {
        App::with_handler(ValidationRules::default(), Arc::new(mock))
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fill_form_with_keys() {
            let mut app = App::for_tests();
            type_text(&mut app, "Jane");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "Doe");
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "jane@example.com");
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char(' ')));

            assert_eq!(app.form.values, valid_values(JobType::Development));
        }

        #[test]
        fn test_space_in_text_field_is_input() {
            let mut app = App::for_tests();
            type_text(&mut app, "Mary Ann");
            assert_eq!(app.form.values.first_name, "Mary Ann");
        }

        #[test]
        fn test_left_cycles_select_backwards() {
            let mut app = App::for_tests();
            app.form.set_active_field(3);
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.form.values.job_type, Some(JobType::Other));
        }

        #[test]
        fn test_backspace_edits_text() {
            let mut app = App::for_tests();
            type_text(&mut app, "Jo");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.values.first_name, "J");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = App::for_tests();
            app.handle_key(ctrl('a'));
            assert!(app.form.values.first_name.is_empty());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = App::for_tests();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_tab_marks_left_field_touched() {
            let mut app = App::for_tests();
            app.handle_key(key(KeyCode::Tab));
            assert!(app.form.is_touched(FieldName::FirstName));
            assert!(!app.form.is_touched(FieldName::LastName));
        }
    }

    mod dialogs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = App::for_tests();
            app.error_message = Some("boom".to_string());
            type_text(&mut app, "abc");
            assert!(app.form.values.first_name.is_empty());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.error_message.is_none());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_alert_dismissed_with_enter() {
            let mut app = App::for_tests();
            app.alert_message = Some("{}".to_string());
            app.handle_key(key(KeyCode::Enter));
            assert!(app.alert_message.is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_submit_never_reaches_handler() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit().never();
            let mut app = app_with_mock(mock);

            app.handle_key(ctrl('s'));

            assert!(!app.is_submission_pending());
            assert_eq!(
                app.status_message.as_deref(),
                Some("4 field(s) need attention")
            );
        }

        #[test]
        fn test_long_first_name_blocks_submit() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit().never();
            let mut app = app_with_mock(mock);
            fill(&mut app, &valid_values(JobType::Other));
            app.form.set_text(FieldName::FirstName, "a".repeat(16));

            app.submit();

            assert!(!app.form.is_submitting());
            assert_eq!(
                app.form
                    .visible_error(FieldName::FirstName)
                    .map(|e| e.to_string()),
                Some("First name must be less than 15 characters".to_string())
            );
        }

        #[tokio::test]
        async fn test_valid_submit_passes_exact_values_to_handler() {
            for job_type in JobType::ALL {
                let expected = valid_values(job_type);
                let check = expected.clone();
                let mut mock = MockSubmitHandler::new();
                mock.expect_submit()
                    .withf(move |values| *values == check)
                    .times(1)
                    .returning(|values| Ok(format!("submitted {}", values.email)));
                let mut app = app_with_mock(mock);
                fill(&mut app, &expected);

                app.submit();
                assert!(app.form.is_submitting());
                wait_for_submission(&mut app).await;

                assert!(!app.form.is_submitting());
                assert_eq!(
                    app.alert_message.as_deref(),
                    Some("submitted jane@example.com")
                );
            }
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_submits() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok("ok".to_string()));
            let mut app = app_with_mock(mock);
            fill(&mut app, &valid_values(JobType::Designer));
            app.form.set_active_field(5);

            app.handle_key(key(KeyCode::Enter));
            wait_for_submission(&mut app).await;

            assert_eq!(app.alert_message.as_deref(), Some("ok"));
        }

        #[tokio::test]
        async fn test_resubmit_while_pending_calls_handler_once() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok("ok".to_string()));
            let mut app = app_with_mock(mock);
            fill(&mut app, &valid_values(JobType::Product));

            app.submit();
            app.submit();
            assert_eq!(app.form.submit_count, 1);
            wait_for_submission(&mut app).await;
        }

        #[tokio::test]
        async fn test_handler_error_opens_error_dialog() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("offline")));
            let mut app = app_with_mock(mock);
            fill(&mut app, &valid_values(JobType::Designer));

            app.submit();
            wait_for_submission(&mut app).await;

            assert!(!app.form.is_submitting());
            assert!(app.alert_message.is_none());
            assert_eq!(
                app.error_message.as_deref(),
                Some("Submission failed: offline")
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_submit_disabled_until_delay_elapses() {
            let handler = AlertSubmitHandler::new(Duration::from_millis(400));
            let mut app = App::with_handler(ValidationRules::default(), Arc::new(handler));
            fill(&mut app, &valid_values(JobType::Designer));

            app.submit();
            assert!(app.form.is_submitting());

            tokio::time::sleep(Duration::from_millis(399)).await;
            app.poll_submission();
            assert!(app.form.is_submitting());
            assert!(app.alert_message.is_none());

            app.submit();
            assert_eq!(app.form.submit_count, 1);

            tokio::time::sleep(Duration::from_millis(2)).await;
            app.poll_submission();
            assert!(!app.form.is_submitting());
            assert!(!app.is_submission_pending());

            let alert = app.alert_message.clone().unwrap();
            assert!(alert.contains("\"firstName\": \"Jane\""));
            assert!(alert.contains("\"jobType\": \"designer\""));

            app.handle_key(key(KeyCode::Enter));
            app.submit();
            assert!(app.form.is_submitting());
            assert_eq!(app.form.submit_count, 2);
        }
    }
}
