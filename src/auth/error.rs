//! Identity provider errors

/// Shown for failures that carry no message fit for the user
pub const GENERIC_AUTH_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Shown when the provider cannot be reached
pub const NETWORK_AUTH_ERROR: &str =
    "Unable to reach the authentication service. Check your connection and try again.";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request; the message is meant for the user
    #[error("{0}")]
    Provider(String),

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Identity provider is not configured: {0}")]
    Config(String),

    /// The request task ended without reporting a result
    #[error("Authentication request was interrupted")]
    Interrupted,
}

impl AuthError {
    /// Message rendered inline on the sign-in screen
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(message) => message.clone(),
            Self::Network(_) => NETWORK_AUTH_ERROR.to_string(),
            Self::Config(_) | Self::Interrupted => GENERIC_AUTH_ERROR.to_string(),
        }
    }
}
