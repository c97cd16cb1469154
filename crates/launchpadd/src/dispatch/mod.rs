//! Command dispatch for the companion connection.
//!
//! Each inbound frame is parsed into a `{command, params}` request, the
//! command is looked up by exact identifier in the [`CommandRegistry`], and
//! its result is returned as exactly one response:
//!
//! ```json
//! {"command":"authenticate","params":{"username":"u","password":"p","clientToken":"c"}}
//! {"username":"u","uuid":"...","accessToken":"...","clientToken":"c"}
//! {"command":"fly","params":{}}
//! {"errorKind":"UnknownCommand","message":"unknown command 'fly'"}
//! ```

mod commands;
mod dispatcher;
mod errors;
mod params;
mod registry;
mod request;

pub use self::commands::{AuthenticateCommand, LaunchCommand, UpdateCommand};
pub use self::dispatcher::{Dispatcher, encode_response};
pub use self::errors::CommandError;
pub use self::registry::{Command, CommandRegistry, RegistryBuilder, RegistryError};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
