//! Application state and core logic

use crate::auth::{authenticate, AuthError, IdentityProvider};
use crate::config::TuiConfig;
use crate::picker;
use crate::state::{
    AppState, AuthFocus, AuthForm, AuthState, BuilderEditor, BuilderFocus, BuilderState, Form,
    View,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type AuthResult = Result<(), AuthError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Identity provider used by the sign-in screen
    provider: Arc<dyn IdentityProvider>,
    /// Result channel of the in-flight auth request
    pending_auth: Option<oneshot::Receiver<AuthResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, provider: Arc<dyn IdentityProvider>) -> Self {
        let form = match config.last_email.clone() {
            Some(email) => AuthForm::with_email(email),
            None => AuthForm::new(),
        };
        let state = AppState::new(
            AuthState::new(form),
            BuilderState::new(config.validation_policy()),
        );

        Self {
            state,
            provider,
            pending_auth: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Whether an auth request is outstanding
    pub fn is_waiting(&self) -> bool {
        self.pending_auth.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Notice dialog is modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        self.state.status_message = None;

        match self.state.current_view {
            View::Auth => self.handle_auth_key(key),
            View::FormBuilder => self.handle_builder_key(key),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.auth.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.focus == AuthFocus::Toggle {
                    self.state.auth.toggle_mode();
                } else {
                    self.submit_auth();
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = form.active_input_mut() {
                    input.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = form.active_input_mut() {
                    input.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Start the auth request for the current mode.
    ///
    /// The screen enters `Submitting` before the request is spawned, so a
    /// second submit is dropped until the result arrives.
    pub fn submit_auth(&mut self) {
        let Some((mode, credentials)) = self.state.auth.begin_submit() else {
            tracing::debug!("Submit ignored, request already in flight");
            return;
        };

        tracing::info!(mode = mode.label(), "Submitting credentials");

        let provider = Arc::clone(&self.provider);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = authenticate(provider.as_ref(), mode, &credentials).await;
            let _ = tx.send(result);
        });
        self.pending_auth = Some(rx);
    }

    /// Apply the auth result if it has arrived
    pub fn poll_auth(&mut self) {
        let Some(rx) = self.pending_auth.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(AuthError::Interrupted),
        };
        self.pending_auth = None;
        self.complete_auth(result);
    }

    fn complete_auth(&mut self, result: AuthResult) {
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Authentication failed");
        }

        if let Some(notice) = self.state.auth.complete(result) {
            tracing::info!("Authentication succeeded");
            self.state.show_notice(notice);
            self.state.navigate(View::FormBuilder);
        }
    }

    fn handle_builder_key(&mut self, key: KeyEvent) {
        if self.state.builder.is_dragging() {
            self.handle_drag_key(key);
            return;
        }
        if self.state.builder.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.state.builder.next_field(),
            KeyCode::BackTab => self.state.builder.prev_field(),
            _ => match self.state.builder.focus {
                BuilderFocus::Prompt => self.handle_prompt_key(key),
                BuilderFocus::KindButtons => self.handle_kind_key(key),
                BuilderFocus::Questions => self.handle_questions_key(key),
            },
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let builder = &mut self.state.builder;
        match key.code {
            KeyCode::Enter => builder.focus = BuilderFocus::KindButtons,
            KeyCode::Backspace => {
                builder.composer.pending_prompt_mut().pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                builder.composer.pending_prompt_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_kind_key(&mut self, key: KeyEvent) {
        let builder = &mut self.state.builder;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => builder.prev_kind(),
            KeyCode::Right | KeyCode::Char('l') => builder.next_kind(),
            KeyCode::Up => builder.focus = BuilderFocus::Prompt,
            KeyCode::Down => builder.focus = BuilderFocus::Questions,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if builder.add_selected_kind() {
                    builder.focus = BuilderFocus::Prompt;
                }
            }
            _ => {}
        }
    }

    fn handle_questions_key(&mut self, key: KeyEvent) {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let builder = &mut self.state.builder;
        match key.code {
            KeyCode::Up if alt => {
                builder.nudge_selected(true);
            }
            KeyCode::Down if alt => {
                builder.nudge_selected(false);
            }
            KeyCode::Up | KeyCode::Char('k') => builder.select_prev_question(),
            KeyCode::Down | KeyCode::Char('j') => builder.select_next_question(),
            KeyCode::Char(' ') => {
                builder.begin_drag();
            }
            KeyCode::Char('o') => {
                if !builder.open_option_editor() {
                    self.state.status_message =
                        Some("Only MCQ and checkbox questions have options".to_string());
                }
            }
            KeyCode::Char('f') => {
                if !builder.open_file_picker() {
                    self.state.status_message =
                        Some("Only file upload questions accept files".to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_drag_key(&mut self, key: KeyEvent) {
        let builder = &mut self.state.builder;
        let len = builder.composer.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(drag) = builder.drag.as_mut() {
                    drag.move_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(drag) = builder.drag.as_mut() {
                    drag.move_down(len);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                builder.drop_drag();
            }
            KeyCode::Esc => builder.cancel_drag(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let builder = &mut self.state.builder;
        match key.code {
            KeyCode::Esc => builder.close_editor(),
            KeyCode::Enter => match &builder.editor {
                Some(BuilderEditor::Option { .. }) => {
                    builder.commit_option();
                }
                Some(BuilderEditor::FilePath { input, .. }) => match picker::pick(input.as_text()) {
                    Ok(file) => {
                        builder.commit_file(file);
                    }
                    Err(err) => self.state.status_message = Some(err.to_string()),
                },
                None => {}
            },
            KeyCode::Backspace => {
                if let Some(text) = builder.editor_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = builder.editor_text_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }
}
