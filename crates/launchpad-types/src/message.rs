//! Wire documents exchanged over a Launchpad connection.
//!
//! The server opens every connection with a [`Greeting`]. The client then
//! sends [`Request`] documents one at a time and receives exactly one
//! [`Response`] for each, in order:
//!
//! ```json
//! {"status":"ok","version":"0.1.0"}
//! {"command":"update","params":{}}
//! {"success":true}
//! {"command":"bogus","params":{}}
//! {"errorKind":"UnknownCommand","message":"unknown command 'bogus'"}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status string carried by every greeting.
pub const GREETING_STATUS: &str = "ok";

/// First message written by the server once a connection opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Always [`GREETING_STATUS`].
    pub status: String,
    /// Protocol implementation version.
    pub version: String,
}

impl Greeting {
    /// Builds the greeting advertising `version`.
    #[must_use]
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: GREETING_STATUS.to_owned(),
            version: version.into(),
        }
    }
}

/// Command invocation sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Case-sensitive command identifier.
    pub command: String,
    /// Command-specific parameters.
    pub params: Map<String, Value>,
}

/// Classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed frame, missing or mistyped fields.
    ProtocolError,
    /// Identifier not present in the command registry.
    UnknownCommand,
    /// `launch` attempted before a successful `authenticate`.
    NotAuthenticated,
    /// Authentication provider failure.
    AuthError,
    /// Launch provider failure.
    LaunchError,
    /// Update provider failure.
    UpdateError,
}

impl ErrorKind {
    /// Wire representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProtocolError => "ProtocolError",
            Self::UnknownCommand => "UnknownCommand",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::AuthError => "AuthError",
            Self::LaunchError => "LaunchError",
            Self::UpdateError => "UpdateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Structured error body returned in place of a command payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Failure classification.
    pub error_kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Reply to a single request.
///
/// Error payloads are listed first so that deserialising a reply recognises
/// the `{errorKind, message}` shape before falling back to an arbitrary
/// success value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Command failed.
    Error(ErrorPayload),
    /// Command succeeded with the given payload.
    Success(Value),
}

impl Response {
    /// Builds a failed response.
    #[must_use]
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            error_kind: kind,
            message: message.into(),
        })
    }

    /// Generic marker for commands that return no value: `{"success":true}`.
    #[must_use]
    pub fn success_marker() -> Value {
        let mut object = Map::new();
        object.insert("success".to_owned(), Value::Bool(true));
        Value::Object(object)
    }

    /// Returns the error kind when the response is a failure.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Error(payload) => Some(payload.error_kind),
            Self::Success(_) => None,
        }
    }
}
