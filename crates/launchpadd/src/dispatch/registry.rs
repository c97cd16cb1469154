//! Command registry keyed by exact identifier.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use super::commands::{AuthenticateCommand, LaunchCommand, UpdateCommand};
use super::errors::CommandError;
use crate::session::Session;

/// A command the daemon can execute on behalf of the client.
pub trait Command {
    /// Case-sensitive identifier matched against the request's `command`.
    fn identifier(&self) -> &'static str;

    /// Executes the command and returns the success payload.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing why the command failed.
    fn call(
        &self,
        session: &mut Session<'_>,
        params: &Map<String, Value>,
    ) -> Result<Value, CommandError>;
}

/// Errors raised while assembling a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("command '{identifier}' is already registered")]
    Duplicate { identifier: &'static str },
}

/// Immutable mapping from identifier to command.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Starts an empty registry builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            commands: HashMap::new(),
        }
    }

    /// Registry containing `authenticate`, `launch` and `update`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if two built-ins share an
    /// identifier.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        Ok(Self::builtin_builder()?.build())
    }

    /// Builder pre-populated with the built-in commands, for callers that
    /// register extensions on top.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if two built-ins share an
    /// identifier.
    pub fn builtin_builder() -> Result<RegistryBuilder, RegistryError> {
        Self::builder()
            .register(AuthenticateCommand)?
            .register(LaunchCommand)?
            .register(UpdateCommand)
    }

    /// Looks up a command by exact identifier.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&dyn Command> {
        self.commands.get(identifier).map(|command| &**command)
    }

    /// Registered identifiers in sorted order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&'static str> {
        let mut identifiers: Vec<_> = self.commands.keys().copied().collect();
        identifiers.sort_unstable();
        identifiers
    }
}

/// Accumulates commands before the registry is frozen.
pub struct RegistryBuilder {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl RegistryBuilder {
    /// Adds a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when the identifier is taken.
    pub fn register(mut self, command: impl Command + 'static) -> Result<Self, RegistryError> {
        let identifier = command.identifier();
        if self.commands.contains_key(identifier) {
            return Err(RegistryError::Duplicate { identifier });
        }
        self.commands.insert(identifier, Box::new(command));
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            commands: self.commands,
        }
    }
}
