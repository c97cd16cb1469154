//! Shared wire and domain types for the Launchpad control protocol.
//!
//! The daemon (`launchpadd`) and any front-end speaking to it exchange
//! newline- or WebSocket-framed JSON documents. This crate defines those
//! documents together with the immutable values that travel between
//! commands within a session: the [`AuthResult`] produced by
//! `authenticate` and the [`LaunchConfig`] consumed by `launch`.

mod auth;
mod launch;
mod message;

pub use auth::AuthResult;
pub use launch::LaunchConfig;
pub use message::{ErrorKind, ErrorPayload, GREETING_STATUS, Greeting, Request, Response};
