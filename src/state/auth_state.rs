//! Sign-in screen state machine

use super::forms::AuthForm;
use crate::auth::{AuthError, AuthMode, Credentials};

/// Request lifecycle of the sign-in screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Idle,
    /// A request for `mode` is in flight
    Submitting { mode: AuthMode },
    /// The last request failed; the message is shown inline
    Error(String),
    /// The last request succeeded and the app has moved on
    Success,
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub mode: AuthMode,
    pub phase: AuthPhase,
    pub form: AuthForm,
}

impl AuthState {
    pub fn new(form: AuthForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, AuthPhase::Submitting { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Loading..."
        } else {
            self.mode.label()
        }
    }

    /// Enter `Submitting` and hand out what to send.
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<(AuthMode, Credentials)> {
        if self.is_submitting() {
            return None;
        }
        self.phase = AuthPhase::Submitting { mode: self.mode };
        Some((self.mode, self.form.credentials()))
    }

    /// Apply the result of the in-flight request.
    ///
    /// Returns the one-time notice to show on success. A result that
    /// arrives while nothing is in flight is ignored.
    pub fn complete(&mut self, result: Result<(), AuthError>) -> Option<&'static str> {
        let AuthPhase::Submitting { mode } = self.phase else {
            return None;
        };

        match result {
            Ok(()) => {
                self.phase = AuthPhase::Success;
                Some(mode.success_notice())
            }
            Err(err) => {
                self.phase = AuthPhase::Error(err.user_message());
                None
            }
        }
    }
}
