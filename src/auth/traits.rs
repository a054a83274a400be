//! Trait abstraction for the identity provider to enable mocking in tests

use super::AuthError;
use async_trait::async_trait;

/// Email/password authentication backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Sign in to an existing account
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<(), AuthError>;
}
