//! Socket transport for the companion connection.
//!
//! The listener binds a loopback TCP port or a Unix socket and accepts a
//! single connection. The accepted stream is wrapped in a [`Channel`] that
//! frames JSON documents either as newline-delimited lines or as WebSocket
//! messages, and reports how the connection ended as a [`CloseCause`].

mod channel;
mod errors;
mod lines;
mod listener;
mod stream;
mod websocket;

use launchpad_config::Framing;

pub use self::channel::{
    COMPANION_CLOSED_REASON, Channel, CloseCause, EXIT_FAILURE, EXIT_SUCCESS,
};
pub use self::errors::{ListenerError, TransportError};
pub use self::lines::{LineChannel, MAX_FRAME_BYTES};
pub use self::listener::SocketListener;
pub use self::stream::ConnectionStream;
pub use self::websocket::WebSocketChannel;

const LISTENER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");

/// Wraps an accepted stream in the channel for the configured framing.
///
/// # Errors
///
/// Returns [`TransportError::Handshake`] when WebSocket framing is selected
/// and the peer fails the opening handshake.
pub fn open_channel(
    stream: ConnectionStream,
    framing: Framing,
) -> Result<Box<dyn Channel>, TransportError> {
    match framing {
        Framing::Lines => Ok(Box::new(LineChannel::new(stream))),
        Framing::WebSocket => Ok(Box::new(WebSocketChannel::accept(stream)?)),
    }
}
