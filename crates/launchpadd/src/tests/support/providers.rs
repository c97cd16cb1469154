//! Provider doubles: `mockall` mocks for unit tests and a thread-safe
//! recording stub for end-to-end scenarios.

use std::sync::Mutex;

use launchpad_types::{AuthResult, LaunchConfig};
use mockall::mock;
use serde_json::{Map, Value};

use crate::providers::{
    AuthError, AuthProvider, LaunchError, LaunchProvider, UpdateError, UpdateProvider,
};

mock! {
    pub Auth {}
    impl AuthProvider for Auth {
        fn authenticate(
            &self,
            username: &str,
            password: &str,
            client_token: &str,
        ) -> Result<AuthResult, AuthError>;
        fn refresh(&self, access_token: &str, client_token: &str) -> Result<AuthResult, AuthError>;
        fn logout(&self, access_token: &str, client_token: &str) -> Result<bool, AuthError>;
    }
}

mock! {
    pub Launch {}
    impl LaunchProvider for Launch {
        fn launch(&self, config: &LaunchConfig, auth: &AuthResult) -> Result<(), LaunchError>;
    }
}

mock! {
    pub Update {}
    impl UpdateProvider for Update {
        fn update(&self, params: &Map<String, Value>) -> Result<(), UpdateError>;
    }
}

/// Password the stub rejects.
pub const WRONG_PASSWORD: &str = "wrong";

/// Launch recorded by [`StubServices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLaunch {
    pub version: String,
    pub username: String,
    pub tweaks: Vec<String>,
}

/// Deterministic implementation of every provider that records launches
/// and updates.
///
/// Authentication succeeds for any password except [`WRONG_PASSWORD`] and
/// issues `uuid-<username>` and `token-<username>`.
#[derive(Debug, Default)]
pub struct StubServices {
    launches: Mutex<Vec<RecordedLaunch>>,
    updates: Mutex<Vec<Map<String, Value>>>,
}

impl StubServices {
    pub fn launches(&self) -> Vec<RecordedLaunch> {
        self.launches.lock().expect("launch log poisoned").clone()
    }

    pub fn updates(&self) -> Vec<Map<String, Value>> {
        self.updates.lock().expect("update log poisoned").clone()
    }
}

impl AuthProvider for StubServices {
    fn authenticate(
        &self,
        username: &str,
        password: &str,
        client_token: &str,
    ) -> Result<AuthResult, AuthError> {
        if password == WRONG_PASSWORD {
            return Err(AuthError::Rejected {
                message: String::from("invalid credentials"),
            });
        }
        Ok(AuthResult::new(
            username,
            format!("uuid-{username}"),
            format!("token-{username}"),
            client_token,
        ))
    }

    fn refresh(&self, access_token: &str, client_token: &str) -> Result<AuthResult, AuthError> {
        Ok(AuthResult::new(
            "refreshed",
            "uuid-refreshed",
            format!("{access_token}-refreshed"),
            client_token,
        ))
    }

    fn logout(&self, _access_token: &str, _client_token: &str) -> Result<bool, AuthError> {
        Ok(true)
    }
}

impl LaunchProvider for StubServices {
    fn launch(&self, config: &LaunchConfig, auth: &AuthResult) -> Result<(), LaunchError> {
        self.launches
            .lock()
            .expect("launch log poisoned")
            .push(RecordedLaunch {
                version: config.version().to_owned(),
                username: auth.username().to_owned(),
                tweaks: config.tweaks().to_vec(),
            });
        Ok(())
    }
}

impl UpdateProvider for StubServices {
    fn update(&self, params: &Map<String, Value>) -> Result<(), UpdateError> {
        self.updates
            .lock()
            .expect("update log poisoned")
            .push(params.clone());
        Ok(())
    }
}
