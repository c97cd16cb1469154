//! Listening endpoint for the companion connection.
//!
//! Endpoints are written as URLs: `tcp://127.0.0.1:6544`, `tcp://[::1]:6544`
//! or `unix:///run/launchpad/launchpadd.sock`. The daemon only ever serves a
//! local companion, so TCP hosts given as IP literals must be loopback
//! addresses. Host names are resolved and checked again when binding.

use std::fmt;
use std::fs::DirBuilder;
use std::io;
use std::net::IpAddr;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{Host, Url};

/// Endpoint the daemon listens on.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum SocketEndpoint {
    /// Loopback TCP socket. IPv6 hosts are stored without brackets.
    Tcp { host: String, port: u16 },
    /// Unix domain socket.
    Unix { path: Utf8PathBuf },
}

impl SocketEndpoint {
    /// Builds a TCP endpoint.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Builds a Unix domain socket endpoint.
    #[must_use]
    pub fn unix(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Unix { path: path.into() }
    }

    /// Socket file path for Unix endpoints.
    #[must_use]
    pub fn unix_path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Unix { path } => Some(path.as_path()),
            Self::Tcp { .. } => None,
        }
    }

    /// Checks that a TCP endpoint does not name a non-loopback address.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::NonLoopback`] when the host is an IP literal
    /// outside the loopback range.
    pub fn ensure_local(&self) -> Result<(), EndpointError> {
        let Self::Tcp { host, .. } = self else {
            return Ok(());
        };
        match host.parse::<IpAddr>() {
            Ok(ip) if !ip.is_loopback() => Err(EndpointError::NonLoopback { host: host.clone() }),
            _ => Ok(()),
        }
    }

    /// Creates the directory holding a Unix socket, owner-only on Unix.
    /// TCP endpoints need nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::MissingParent`] for a bare socket path and
    /// [`EndpointError::CreateDirectory`] when the directory cannot be made.
    pub fn prepare_socket_directory(&self) -> Result<(), EndpointError> {
        let Some(path) = self.unix_path() else {
            return Ok(());
        };
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .ok_or_else(|| EndpointError::MissingParent {
                path: path.to_path_buf(),
            })?;

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        std::os::unix::fs::DirBuilderExt::mode(&mut builder, 0o700);

        match builder.create(parent) {
            Err(source) if source.kind() != io::ErrorKind::AlreadyExists => {
                Err(EndpointError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SocketEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp { host, port } if host.contains(':') => {
                write!(formatter, "tcp://[{host}]:{port}")
            }
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
            Self::Unix { path } => write!(formatter, "unix://{path}"),
        }
    }
}

impl FromStr for SocketEndpoint {
    type Err = EndpointError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input).map_err(|source| EndpointError::Url {
            input: input.to_owned(),
            source,
        })?;
        let endpoint = match url.scheme() {
            "tcp" => {
                let host = match url.host() {
                    Some(Host::Ipv4(ip)) => ip.to_string(),
                    Some(Host::Ipv6(ip)) => ip.to_string(),
                    Some(Host::Domain(name)) if !name.is_empty() => name.to_owned(),
                    _ => return Err(EndpointError::MissingHost(input.to_owned())),
                };
                let port = url
                    .port()
                    .ok_or_else(|| EndpointError::MissingPort(input.to_owned()))?;
                Self::tcp(host, port)
            }
            "unix" if url.path().is_empty() || url.path() == "/" => {
                return Err(EndpointError::MissingUnixPath(input.to_owned()));
            }
            "unix" => Self::unix(url.path()),
            other => return Err(EndpointError::UnsupportedScheme(other.to_owned())),
        };
        endpoint.ensure_local()?;
        Ok(endpoint)
    }
}

/// Failures parsing, checking or preparing a [`SocketEndpoint`].
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("'{input}' is not an endpoint URL: {source}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported endpoint scheme '{0}', expected tcp or unix")]
    UnsupportedScheme(String),
    #[error("missing TCP host in '{0}'")]
    MissingHost(String),
    #[error("missing TCP port in '{0}'")]
    MissingPort(String),
    #[error("missing Unix socket path in '{0}'")]
    MissingUnixPath(String),
    #[error("TCP host {host} is not a loopback address")]
    NonLoopback { host: String },
    #[error("socket path '{path}' has no parent directory")]
    MissingParent { path: Utf8PathBuf },
    #[error("failed to create socket directory '{path}': {source}")]
    CreateDirectory {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
