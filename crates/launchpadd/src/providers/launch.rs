//! Launch provider contract and the process-spawning adapter.

use std::io;
use std::process::{Command, Stdio};

use camino::{Utf8Path, Utf8PathBuf};
use launchpad_types::{AuthResult, LaunchConfig};
use thiserror::Error;
use tracing::info;

use super::{GameTweak, PROVIDER_TARGET, game_type_for};

/// Errors reported while starting the game.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no launcher program is configured")]
    Unconfigured,
    #[error("unsupported game version '{version}'")]
    InvalidVersion { version: String },
    #[error("unknown tweak '{tweak}'")]
    UnknownTweak { tweak: String },
    #[error("failed to start launcher program {program}: {source}")]
    Spawn {
        program: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for launcher program {program}: {source}")]
    Wait {
        program: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("launcher program {program} exited unsuccessfully ({status})")]
    Exited { program: Utf8PathBuf, status: String },
}

/// Starts the game with a launch configuration and authenticated identity.
pub trait LaunchProvider {
    /// Starts the game.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] when the configuration is rejected or the
    /// game cannot be started.
    fn launch(&self, config: &LaunchConfig, auth: &AuthResult) -> Result<(), LaunchError>;
}

/// Launch provider that runs an external launcher program and waits for it.
///
/// The program receives the launch configuration as arguments:
///
/// ```text
/// --name <name> --version <version> --game-type <type>
/// --username <name> --uuid <id> --access-token <token> --client-token <token>
/// [--tweak <tweak>]... [--vm-arg <arg>]... -- [game param]...
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessLaunchProvider {
    program: Option<Utf8PathBuf>,
}

impl ProcessLaunchProvider {
    /// Builds a provider for the given launcher program, if any.
    #[must_use]
    pub fn new(program: Option<&Utf8Path>) -> Self {
        Self {
            program: program.map(Utf8Path::to_path_buf),
        }
    }
}

impl LaunchProvider for ProcessLaunchProvider {
    fn launch(&self, config: &LaunchConfig, auth: &AuthResult) -> Result<(), LaunchError> {
        let arguments = launcher_arguments(config, auth)?;
        let Some(program) = &self.program else {
            tracing::warn!(
                target: PROVIDER_TARGET,
                provider = "launch",
                name = config.name(),
                "launch requested but no launcher program is configured"
            );
            return Err(LaunchError::Unconfigured);
        };

        info!(
            target: PROVIDER_TARGET,
            program = %program,
            name = config.name(),
            version = config.version(),
            "starting launcher program"
        );
        let status = Command::new(program.as_std_path())
            .args(&arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?
            .wait()
            .map_err(|source| LaunchError::Wait {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(LaunchError::Exited {
                program: program.clone(),
                status: status.to_string(),
            });
        }
        info!(
            target: PROVIDER_TARGET,
            program = %program,
            "launcher program finished"
        );
        Ok(())
    }
}

/// Builds the launcher argument vector, validating the version and tweaks.
///
/// # Errors
///
/// Returns [`LaunchError::InvalidVersion`] or [`LaunchError::UnknownTweak`]
/// when the configuration cannot be mapped onto launcher options.
pub(crate) fn launcher_arguments(
    config: &LaunchConfig,
    auth: &AuthResult,
) -> Result<Vec<String>, LaunchError> {
    let game_type = game_type_for(config.version())?;
    let tweaks = config
        .tweaks()
        .iter()
        .map(|tweak| tweak.parse::<GameTweak>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut arguments = vec![
        String::from("--name"),
        config.name().to_owned(),
        String::from("--version"),
        config.version().to_owned(),
        String::from("--game-type"),
        game_type.as_str().to_owned(),
        String::from("--username"),
        auth.username().to_owned(),
        String::from("--uuid"),
        auth.uuid().to_owned(),
        String::from("--access-token"),
        auth.access_token().to_owned(),
        String::from("--client-token"),
        auth.client_token().to_owned(),
    ];
    for tweak in tweaks {
        arguments.push(String::from("--tweak"));
        arguments.push(tweak.as_str().to_owned());
    }
    for vm_param in config.vm_params() {
        arguments.push(String::from("--vm-arg"));
        arguments.push(vm_param.clone());
    }
    arguments.push(String::from("--"));
    arguments.extend(config.game_params().iter().cloned());
    Ok(arguments)
}
