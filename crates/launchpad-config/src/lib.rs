//! Shared configuration for the Launchpad daemon.
//!
//! Values are layered with `ortho_config`: built-in defaults, then an
//! optional TOML file (`--config-path` or `LAUNCHPAD_CONFIG_PATH`), then
//! `LAUNCHPAD_*` environment variables, and finally command-line flags.
//!
//! ```toml
//! listen = { transport = "tcp", host = "127.0.0.1", port = 6544 }
//! framing = "websocket"
//! log_file = "/var/log/launchpadd.log"
//! log_filter = "launchpadd=debug"
//! launcher_program = "/opt/launcher/bin/start-companion"
//! ```

mod defaults;
mod endpoint;
mod formats;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER, DEFAULT_TCP_PORT, default_framing,
    default_log_file, default_log_filter, default_log_filter_string, default_log_format,
    default_socket_endpoint,
};
pub use endpoint::{EndpointError, SocketEndpoint};
pub use formats::{Framing, LogFormat};

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "LAUNCHPAD")]
pub struct Config {
    /// Endpoint accepting the single front-end connection.
    #[ortho_config(default = default_socket_endpoint())]
    pub listen: SocketEndpoint,
    /// Framing applied to the accepted connection.
    #[ortho_config(default = default_framing())]
    pub framing: Framing,
    /// File receiving a copy of every log line.
    #[ortho_config(default = default_log_file())]
    pub log_file: Utf8PathBuf,
    /// `tracing` filter expression.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Log line format.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// External program started by the `launch` command.
    pub launcher_program: Option<Utf8PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_socket_endpoint(),
            framing: default_framing(),
            log_file: default_log_file(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            launcher_program: None,
        }
    }
}

impl Config {
    /// Endpoint the daemon binds.
    #[must_use]
    pub fn listen(&self) -> &SocketEndpoint {
        &self.listen
    }

    /// Framing of the accepted connection.
    #[must_use]
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Log file destination.
    #[must_use]
    pub fn log_file(&self) -> &Utf8Path {
        self.log_file.as_path()
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Program started by the process launch provider, if configured.
    #[must_use]
    pub fn launcher_program(&self) -> Option<&Utf8Path> {
        self.launcher_program.as_deref()
    }
}
