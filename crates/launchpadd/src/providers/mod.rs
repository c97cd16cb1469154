//! Pluggable services invoked by the built-in commands.
//!
//! Commands never talk to a network or spawn a process directly. They call
//! the providers held by the session, which lets the daemon run with real
//! adapters in production and recording doubles in tests.

mod auth;
mod game;
mod launch;
mod update;

pub use auth::{AuthError, AuthProvider, UnconfiguredAuthProvider};
pub use game::{GameTweak, GameType, game_type_for};
pub use launch::{LaunchError, LaunchProvider, ProcessLaunchProvider};
pub use update::{UnconfiguredUpdateProvider, UpdateError, UpdateProvider};

const PROVIDER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::providers");
