//! Local control-plane daemon for the Launchpad companion.
//!
//! The daemon listens on a loopback socket for a single companion
//! connection, greets it, and then executes JSON commands sent over that
//! connection: `authenticate` signs in through an authentication provider,
//! `launch` starts the game for the authenticated identity, and `update`
//! runs the update routine. When the connection ends the process exits with
//! a code derived from how it closed.
//!
//! The crate is organised around the connection's path through the daemon:
//!
//! - [`bootstrap`](crate::bootstrap_with) loads configuration, installs
//!   telemetry and prepares the socket filesystem.
//! - [`transport`] binds the listener, accepts one connection and frames it
//!   as newline-delimited JSON or WebSocket messages.
//! - [`lifecycle`] walks the connection from `Listening` to `Closed`.
//! - [`dispatch`] parses each frame, looks the command up in the registry
//!   and turns every outcome into exactly one response.
//! - [`providers`] holds the pluggable authentication, launch and update
//!   services that commands call through the [`Session`].

mod bootstrap;
pub mod dispatch;
mod health;
pub mod lifecycle;
mod process;
pub mod providers;
mod session;
mod telemetry;
pub mod transport;

pub use bootstrap::{BootstrapError, ConfigLoader, Daemon, SystemConfigLoader, bootstrap_with};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{StartupError, run_daemon, run_daemon_with, serve_companion};
pub use session::{Providers, Session};
pub use telemetry::TelemetryError;
pub use transport::{EXIT_FAILURE, EXIT_SUCCESS};

#[cfg(test)]
mod tests;
