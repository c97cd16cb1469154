//! Framed message channel abstraction and connection close classification.

use super::TransportError;

/// Close reason a companion sends when the game it launched has exited.
pub const COMPANION_CLOSED_REASON: &str = "mc_closed";

/// Process exit code for an orderly shutdown.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code for an abnormal shutdown.
pub const EXIT_FAILURE: u8 = 1;

/// Why a connection ended.
#[derive(Debug)]
pub enum CloseCause {
    /// The peer closed the connection in an orderly way.
    RemoteClosed,
    /// The peer signalled that the companion application exited normally.
    CompanionClosed,
    /// The peer closed with an unexpected status or skipped the closing
    /// handshake.
    Abnormal { detail: String },
    /// Reading or writing the connection failed.
    Transport(TransportError),
}

impl CloseCause {
    /// Process exit code for the cause.
    ///
    /// | cause             | code |
    /// |-------------------|------|
    /// | `CompanionClosed` | 0    |
    /// | `RemoteClosed`    | 0    |
    /// | `Abnormal`        | 1    |
    /// | `Transport`       | 1    |
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::RemoteClosed | Self::CompanionClosed => EXIT_SUCCESS,
            Self::Abnormal { .. } | Self::Transport(_) => EXIT_FAILURE,
        }
    }

    /// Short label used in structured logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RemoteClosed => "remote_closed",
            Self::CompanionClosed => "companion_closed",
            Self::Abnormal { .. } => "abnormal",
            Self::Transport(_) => "transport",
        }
    }
}

impl std::fmt::Display for CloseCause {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteClosed => formatter.write_str("remote closed the connection"),
            Self::CompanionClosed => formatter.write_str("companion application closed"),
            Self::Abnormal { detail } => write!(formatter, "abnormal close: {detail}"),
            Self::Transport(error) => write!(formatter, "transport failure: {error}"),
        }
    }
}

/// Bidirectional channel carrying one frame per message.
///
/// Inbound frames are raw bytes; decoding is left to the dispatcher so that
/// undecodable input is answered rather than dropping the connection.
/// `receive` returns `Err` exactly once, carrying the terminal close cause;
/// callers must not receive again afterwards.
pub trait Channel {
    /// Blocks until the next inbound frame arrives or the connection ends.
    ///
    /// # Errors
    ///
    /// Returns the [`CloseCause`] once the connection is finished.
    fn receive(&mut self) -> Result<Vec<u8>, CloseCause>;

    /// Writes one outbound frame.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the frame cannot be written.
    fn send(&mut self, frame: &str) -> Result<(), TransportError>;
}
