//! Application state definitions

use super::auth_state::AuthState;
use super::builder_state::BuilderState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Sign-in / sign-up screen
    #[default]
    Auth,
    FormBuilder,
}

impl View {
    /// Route path of the view
    pub fn route(&self) -> &'static str {
        match self {
            Self::Auth => "/",
            Self::FormBuilder => "/form-builder",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub view_history: Vec<View>,
    pub auth: AuthState,
    pub builder: BuilderState,
    /// One-time notice shown as a dialog until dismissed
    pub notice: Option<String>,
    /// Transient message in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(auth: AuthState, builder: BuilderState) -> Self {
        Self {
            auth,
            builder,
            ..Default::default()
        }
    }

    /// Push the current view to history and switch to `view`
    pub fn navigate(&mut self, view: View) {
        if self.current_view == view {
            return;
        }
        tracing::info!(from = self.current_view.route(), to = view.route(), "Navigate");
        self.view_history.push(self.current_view);
        self.current_view = view;
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(View::Auth.route(), "/");
        assert_eq!(View::FormBuilder.route(), "/form-builder");
    }

    #[test]
    fn test_default_view_is_auth() {
        assert_eq!(AppState::default().current_view, View::Auth);
    }

    #[test]
    fn test_navigate_records_history() {
        let mut state = AppState::default();
        state.navigate(View::FormBuilder);
        assert_eq!(state.current_view, View::FormBuilder);
        assert_eq!(state.view_history, vec![View::Auth]);

        // Navigating to the current view is a no-op
        state.navigate(View::FormBuilder);
        assert_eq!(state.view_history.len(), 1);
    }

    #[test]
    fn test_notice_lifecycle() {
        let mut state = AppState::default();
        assert!(!state.has_notice());
        state.show_notice("Signed in successfully!");
        assert_eq!(state.notice.as_deref(), Some("Signed in successfully!"));
        state.dismiss_notice();
        assert!(!state.has_notice());
    }
}
