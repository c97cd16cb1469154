//! Connection lifecycle: listen, serve one companion, close.
//!
//! The daemon moves through three states and never returns to an earlier
//! one:
//!
//! ```text
//! Listening --accept--> Connected --close--> Closed(exit code)
//! ```
//!
//! While connected, the daemon writes a greeting and then answers each
//! inbound frame with exactly one response, in order.

use std::io;

use launchpad_config::Framing;
use launchpad_types::Greeting;
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::health::HealthReporter;
use crate::session::{Providers, Session};
use crate::transport::{
    Channel, CloseCause, ListenerError, SocketListener, TransportError, open_channel,
};

const LIFECYCLE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::lifecycle");

/// Version advertised in the greeting.
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Daemon lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Listening,
    Connected,
    Closed { exit_code: u8 },
}

/// Drives the single companion connection from accept to close.
pub struct Lifecycle<'a> {
    dispatcher: &'a Dispatcher,
    providers: Providers<'a>,
    reporter: &'a dyn HealthReporter,
    framing: Framing,
    state: LifecycleState,
}

impl<'a> Lifecycle<'a> {
    #[must_use]
    pub const fn new(
        dispatcher: &'a Dispatcher,
        providers: Providers<'a>,
        reporter: &'a dyn HealthReporter,
        framing: Framing,
    ) -> Self {
        Self {
            dispatcher,
            providers,
            reporter,
            framing,
            state: LifecycleState::Listening,
        }
    }

    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Accepts one connection, serves it until it closes and returns why it
    /// closed. The listener stops accepting as soon as the companion connects.
    ///
    /// # Errors
    ///
    /// Returns a [`ListenerError`] when no connection could be accepted; the
    /// state stays [`LifecycleState::Listening`].
    pub fn run(&mut self, listener: SocketListener) -> Result<CloseCause, ListenerError> {
        let stream = listener.accept_one()?;
        let peer = stream.peer();
        self.enter(LifecycleState::Connected);
        self.reporter.connected(&peer);

        let cause = match open_channel(stream, self.framing) {
            Ok(mut channel) => serve(channel.as_mut(), self.dispatcher, self.providers),
            Err(error) => CloseCause::Transport(error),
        };

        self.enter(LifecycleState::Closed {
            exit_code: cause.exit_code(),
        });
        self.reporter.connection_closed(&cause);
        Ok(cause)
    }

    fn enter(&mut self, next: LifecycleState) {
        debug!(
            target: LIFECYCLE_TARGET,
            from = ?self.state,
            to = ?next,
            "lifecycle transition"
        );
        self.state = next;
    }
}

/// Serves an open channel until it closes.
///
/// Sends the greeting, then alternates between receiving a frame and sending
/// its response. The session lives exactly as long as the channel.
pub fn serve(
    channel: &mut dyn Channel,
    dispatcher: &Dispatcher,
    providers: Providers<'_>,
) -> CloseCause {
    if let Err(error) = send_greeting(channel) {
        return CloseCause::Transport(error);
    }
    let mut session = Session::new(providers);
    loop {
        let frame = match channel.receive() {
            Ok(frame) => frame,
            Err(cause) => return cause,
        };
        let response = dispatcher.dispatch_frame(&mut session, &frame);
        if let Err(error) = channel.send(&response) {
            return CloseCause::Transport(error);
        }
    }
}

fn send_greeting(channel: &mut dyn Channel) -> Result<(), TransportError> {
    let greeting = serde_json::to_string(&Greeting::ok(PROTOCOL_VERSION))
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    channel.send(&greeting)
}
