//! Test configuration loaders for scenarios covering success and failure paths.

use std::ffi::OsString;
use std::sync::Arc;

use camino::Utf8PathBuf;
use launchpad_config::{Config, SocketEndpoint};
use ortho_config::{OrthoConfig, OrthoError};
use tempfile::TempDir;

use crate::bootstrap::ConfigLoader;

/// Loader that places the Unix socket and log file under a temporary
/// directory, unless a different listen endpoint is requested.
pub struct TestConfigLoader {
    dir: TempDir,
    listen: Option<SocketEndpoint>,
}

impl TestConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temporary directory for socket");
        Self { dir, listen: None }
    }

    /// Loader whose configuration listens on `endpoint` instead.
    #[must_use]
    pub fn listening_on(endpoint: SocketEndpoint) -> Self {
        Self {
            listen: Some(endpoint),
            ..Self::new()
        }
    }

    fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name))
            .expect("temporary path was not valid UTF-8")
    }

    /// Socket path the loaded configuration listens on.
    #[must_use]
    pub fn socket_path(&self) -> Utf8PathBuf {
        self.path("run/launchpadd.sock")
    }

    /// Log file the loaded configuration writes to.
    #[must_use]
    pub fn log_path(&self) -> Utf8PathBuf {
        self.path("launchpadd.log")
    }
}

impl Default for TestConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let listen = self
            .listen
            .clone()
            .unwrap_or_else(|| SocketEndpoint::unix(self.socket_path()));
        Ok(Config {
            listen,
            log_file: self.log_path(),
            ..Config::default()
        })
    }
}

/// Loader that intentionally fails by passing invalid CLI arguments.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("launchpadd"),
            OsString::from("--listen"),
            OsString::from("invalid://socket"),
        ];
        Config::load_from_iter(args)
    }
}
