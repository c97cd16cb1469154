//! Per-connection state shared by command handlers.

use launchpad_types::AuthResult;

use crate::providers::{AuthProvider, LaunchProvider, UpdateProvider};

/// Provider implementations a session hands to command handlers.
#[derive(Clone, Copy)]
pub struct Providers<'p> {
    pub auth: &'p dyn AuthProvider,
    pub launch: &'p dyn LaunchProvider,
    pub update: &'p dyn UpdateProvider,
}

/// State for the single companion connection.
///
/// A session starts unauthenticated. A successful `authenticate` stores the
/// returned identity, replacing any earlier one; a failed attempt leaves the
/// stored identity untouched.
pub struct Session<'p> {
    auth_result: Option<AuthResult>,
    providers: Providers<'p>,
}

impl<'p> Session<'p> {
    #[must_use]
    pub const fn new(providers: Providers<'p>) -> Self {
        Self {
            auth_result: None,
            providers,
        }
    }

    /// Identity from the most recent successful authentication.
    #[must_use]
    pub const fn auth_result(&self) -> Option<&AuthResult> {
        self.auth_result.as_ref()
    }

    /// Stores a new identity and returns the one it replaced.
    pub fn replace_auth_result(&mut self, result: AuthResult) -> Option<AuthResult> {
        self.auth_result.replace(result)
    }

    #[must_use]
    pub const fn auth_provider(&self) -> &'p dyn AuthProvider {
        self.providers.auth
    }

    #[must_use]
    pub const fn launch_provider(&self) -> &'p dyn LaunchProvider {
        self.providers.launch
    }

    #[must_use]
    pub const fn update_provider(&self) -> &'p dyn UpdateProvider {
        self.providers.update
    }
}
