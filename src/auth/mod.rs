//! Identity provider access
//!
//! Sign-up and sign-in go through [`IdentityProvider`]; [`GoTrueClient`] is
//! the HTTP implementation used by the app.

mod client;
mod error;
mod traits;

use std::fmt;

pub use client::GoTrueClient;
pub use error::AuthError;
pub use traits::IdentityProvider;

#[cfg(test)]
pub use error::GENERIC_AUTH_ERROR;
#[cfg(test)]
pub use traits::MockIdentityProvider;

/// Whether the user is signing in or creating an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Screen title and submit button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Label of the button that switches to the other mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign Up",
            Self::SignUp => "Already have an account? Sign In",
        }
    }

    /// One-time notice shown after a successful request
    pub fn success_notice(&self) -> &'static str {
        match self {
            Self::SignIn => "Signed in successfully!",
            Self::SignUp => "Check your email for confirmation!",
        }
    }
}

/// Email and password as entered
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Run the provider call that matches `mode`
pub async fn authenticate(
    provider: &dyn IdentityProvider,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    match mode {
        AuthMode::SignIn => {
            provider
                .sign_in_with_password(&credentials.email, &credentials.password)
                .await
        }
        AuthMode::SignUp => {
            provider
                .sign_up(&credentials.email, &credentials.password)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_mode_toggle_round_trip() {
        let mode = AuthMode::default();
        assert_eq!(mode, AuthMode::SignIn);
        assert_eq!(mode.toggle(), AuthMode::SignUp);
        assert_eq!(mode.toggle().toggle(), AuthMode::SignIn);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::SignIn.label(), "Sign In");
        assert_eq!(AuthMode::SignUp.label(), "Sign Up");
        assert_eq!(AuthMode::SignIn.toggle_label(), "Need an account? Sign Up");
        assert_eq!(
            AuthMode::SignUp.toggle_label(),
            "Already have an account? Sign In"
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("me@example.com", "hunter2");
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("me@example.com"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_sign_in_dispatches_to_password_grant() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_in_with_password()
            .with(eq("me@example.com"), eq("secret"))
            .times(1)
            .returning(|_, _| Ok(()));
        provider.expect_sign_up().never();

        let credentials = Credentials::new("me@example.com", "secret");
        let result = authenticate(&provider, AuthMode::SignIn, &credentials).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sign_up_dispatches_to_sign_up() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_up()
            .times(1)
            .returning(|_, _| Err(AuthError::Provider("User already registered".into())));
        provider.expect_sign_in_with_password().never();

        let credentials = Credentials::new("me@example.com", "secret");
        let err = authenticate(&provider, AuthMode::SignUp, &credentials)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "User already registered");
    }
}
