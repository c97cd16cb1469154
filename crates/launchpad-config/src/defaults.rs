use camino::Utf8PathBuf;

use crate::endpoint::SocketEndpoint;
use crate::formats::{Framing, LogFormat};

/// Loopback host the daemon binds by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port; front-ends normally pass their own.
pub const DEFAULT_TCP_PORT: u16 = 6544;

/// Default log filter expression used by the daemon.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log destination, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "launchpadd.log";

/// Default log filter expression used by the daemon.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the daemon.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default log file path.
pub fn default_log_file() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_LOG_FILE)
}

/// Default framing for the accepted connection.
pub fn default_framing() -> Framing {
    Framing::Lines
}

/// Computes the default listening endpoint for the daemon.
pub fn default_socket_endpoint() -> SocketEndpoint {
    SocketEndpoint::tcp(DEFAULT_HOST, DEFAULT_TCP_PORT)
}
