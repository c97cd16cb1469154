//! Error types for command dispatch failures.
//!
//! Every failure maps to an [`ErrorKind`] so the client receives a structured
//! `{errorKind, message}` response instead of a dropped connection.

use launchpad_types::{ErrorKind, Response};
use thiserror::Error;

use crate::providers::{AuthError, LaunchError, UpdateError};

/// Errors surfaced while parsing or executing a request.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The frame is not a well-formed request, or a parameter is missing or
    /// has the wrong type.
    #[error("{message}")]
    Protocol { message: String },

    /// The command identifier is not registered.
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    /// `launch` was requested before a successful `authenticate`.
    #[error("not authenticated: call 'authenticate' before 'launch'")]
    NotAuthenticated,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

impl CommandError {
    /// Creates a protocol error with the given message.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Wire classification of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Protocol { .. } => ErrorKind::ProtocolError,
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            Self::NotAuthenticated => ErrorKind::NotAuthenticated,
            Self::Auth(_) => ErrorKind::AuthError,
            Self::Launch(_) => ErrorKind::LaunchError,
            Self::Update(_) => ErrorKind::UpdateError,
        }
    }

    /// Builds the error response sent to the client.
    #[must_use]
    pub fn to_response(&self) -> Response {
        Response::error(self.kind(), self.to_string())
    }
}
