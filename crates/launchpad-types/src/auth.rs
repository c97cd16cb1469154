//! Identity bundle returned by an authentication provider.

use serde::{Deserialize, Serialize};

/// Authenticated identity and token bundle.
///
/// The value is immutable once built. A session replaces it wholesale when a
/// later `authenticate` call succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    username: String,
    uuid: String,
    access_token: String,
    client_token: String,
}

impl AuthResult {
    /// Builds a result from the four identity fields.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        uuid: impl Into<String>,
        access_token: impl Into<String>,
        client_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            uuid: uuid.into(),
            access_token: access_token.into(),
            client_token: client_token.into(),
        }
    }

    /// Display name of the authenticated player.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Unique player identifier.
    #[must_use]
    pub const fn uuid(&self) -> &str {
        self.uuid.as_str()
    }

    /// Session access token.
    #[must_use]
    pub const fn access_token(&self) -> &str {
        self.access_token.as_str()
    }

    /// Token identifying the client installation.
    #[must_use]
    pub const fn client_token(&self) -> &str {
        self.client_token.as_str()
    }
}
