//! Authentication provider contract.

use launchpad_types::AuthResult;
use thiserror::Error;

use super::PROVIDER_TARGET;

/// Errors reported by an authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no authentication service is configured")]
    Unconfigured,
    #[error("authentication rejected: {message}")]
    Rejected { message: String },
    #[error("authentication service unavailable: {message}")]
    Unavailable { message: String },
}

/// Exchanges credentials for an identity and session tokens.
pub trait AuthProvider {
    /// Signs in with a username and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the credentials are rejected or the
    /// service cannot be reached.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
        client_token: &str,
    ) -> Result<AuthResult, AuthError>;

    /// Renews an access token.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the token cannot be refreshed.
    fn refresh(&self, access_token: &str, client_token: &str) -> Result<AuthResult, AuthError>;

    /// Invalidates an access token. Returns whether the service accepted the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the service cannot be reached.
    fn logout(&self, access_token: &str, client_token: &str) -> Result<bool, AuthError>;
}

/// Provider used when no authentication service has been wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAuthProvider;

impl UnconfiguredAuthProvider {
    fn refuse(operation: &'static str) -> AuthError {
        tracing::warn!(
            target: PROVIDER_TARGET,
            provider = "auth",
            operation,
            "authentication requested but no service is configured"
        );
        AuthError::Unconfigured
    }
}

impl AuthProvider for UnconfiguredAuthProvider {
    fn authenticate(
        &self,
        _username: &str,
        _password: &str,
        _client_token: &str,
    ) -> Result<AuthResult, AuthError> {
        Err(Self::refuse("authenticate"))
    }

    fn refresh(&self, _access_token: &str, _client_token: &str) -> Result<AuthResult, AuthError> {
        Err(Self::refuse("refresh"))
    }

    fn logout(&self, _access_token: &str, _client_token: &str) -> Result<bool, AuthError> {
        Err(Self::refuse("logout"))
    }
}
