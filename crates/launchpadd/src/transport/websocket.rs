//! WebSocket framing over an accepted stream.

use std::io::{Read, Write};

use tracing::debug;
use tungstenite::protocol::frame::coding::CloseCode;
use tungstenite::protocol::{CloseFrame, WebSocketConfig};
use tungstenite::{Message, WebSocket, error::ProtocolError};

use super::{
    COMPANION_CLOSED_REASON, Channel, CloseCause, LISTENER_TARGET, MAX_FRAME_BYTES,
    TransportError,
};

/// Channel carrying one JSON document per WebSocket data frame.
///
/// Text and binary frames are both delivered as raw payload bytes, so a
/// binary frame that is not valid UTF-8 is answered as a malformed request
/// rather than closing the connection.
pub struct WebSocketChannel<S> {
    socket: WebSocket<S>,
}

impl<S: Read + Write> WebSocketChannel<S> {
    /// Performs the server side of the opening handshake.
    ///
    /// Messages larger than [`MAX_FRAME_BYTES`] are refused.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Handshake`] when the peer does not complete
    /// a valid upgrade.
    pub fn accept(stream: S) -> Result<Self, TransportError> {
        let config = WebSocketConfig::default()
            .max_message_size(Some(MAX_FRAME_BYTES))
            .max_frame_size(Some(MAX_FRAME_BYTES));
        let socket = tungstenite::accept_with_config(stream, Some(config)).map_err(|error| {
            TransportError::Handshake {
                message: error.to_string(),
            }
        })?;
        Ok(Self { socket })
    }

    fn acknowledge_close(&mut self) {
        if let Err(error) = self.socket.flush() {
            debug!(
                target: LISTENER_TARGET,
                error = %error,
                "failed to flush close acknowledgement"
            );
        }
    }
}

impl<S: Read + Write> Channel for WebSocketChannel<S> {
    fn receive(&mut self) -> Result<Vec<u8>, CloseCause> {
        loop {
            match self.socket.read() {
                Ok(Message::Text(text)) => return Ok(text.as_bytes().to_vec()),
                Ok(Message::Binary(bytes)) => return Ok(bytes.to_vec()),
                Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => {}
                Ok(Message::Close(frame)) => {
                    let cause = classify_close(frame.as_ref());
                    self.acknowledge_close();
                    return Err(cause);
                }
                Err(tungstenite::Error::Protocol(ProtocolError::ResetWithoutClosingHandshake)) => {
                    return Err(CloseCause::Abnormal {
                        detail: String::from("connection reset without closing handshake"),
                    });
                }
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    return Err(CloseCause::RemoteClosed);
                }
                Err(error) => return Err(CloseCause::Transport(TransportError::from(error))),
            }
        }
    }

    fn send(&mut self, frame: &str) -> Result<(), TransportError> {
        self.socket.send(Message::text(frame.to_owned()))?;
        Ok(())
    }
}

/// Maps a received close frame onto a [`CloseCause`].
///
/// A close without a payload, or with code 1000 or 1001, is orderly. The
/// companion reason takes precedence over the code.
pub(crate) fn classify_close(frame: Option<&CloseFrame>) -> CloseCause {
    let Some(frame) = frame else {
        return CloseCause::RemoteClosed;
    };
    if &*frame.reason == COMPANION_CLOSED_REASON {
        return CloseCause::CompanionClosed;
    }
    match frame.code {
        CloseCode::Normal | CloseCode::Away => CloseCause::RemoteClosed,
        code => CloseCause::Abnormal {
            detail: format!("close code {} ({})", u16::from(code), &*frame.reason),
        },
    }
}
