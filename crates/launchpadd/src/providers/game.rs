//! Game version classification and tweak names understood by the launcher.

use std::fmt;
use std::str::FromStr;

use super::LaunchError;

/// Launch profile family selected from a game version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    V1_5_2Lower,
    V1_7_2Lower,
    V1_7_10,
    V1_8Higher,
}

impl GameType {
    /// Value passed to the launcher program.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_5_2Lower => "v1_5_2_lower",
            Self::V1_7_2Lower => "v1_7_2_lower",
            Self::V1_7_10 => "v1_7_10",
            Self::V1_8Higher => "v1_8_higher",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Classifies a dotted game version such as `1.7.10` or `1.12.2`.
///
/// `1.7.10` has its own profile. Otherwise the major and minor components
/// decide: below `1.6` is [`GameType::V1_5_2Lower`], below `1.8` is
/// [`GameType::V1_7_2Lower`], anything newer is [`GameType::V1_8Higher`].
///
/// # Errors
///
/// Returns [`LaunchError::InvalidVersion`] when the major or minor component
/// is missing or not numeric.
pub fn game_type_for(version: &str) -> Result<GameType, LaunchError> {
    let trimmed = version.trim();
    if trimmed == "1.7.10" {
        return Ok(GameType::V1_7_10);
    }
    let invalid = || LaunchError::InvalidVersion {
        version: version.to_owned(),
    };
    let mut components = trimmed.split('.');
    let major: u32 = components
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or_else(invalid)?;
    let minor: u32 = components
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or_else(invalid)?;
    let game_type = if (major, minor) < (1, 6) {
        GameType::V1_5_2Lower
    } else if (major, minor) < (1, 8) {
        GameType::V1_7_2Lower
    } else {
        GameType::V1_8Higher
    };
    Ok(game_type)
}

/// Loader modification applied on top of the base game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTweak {
    Forge,
    Optifine,
    Shader,
}

impl GameTweak {
    /// Value passed to the launcher program.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forge => "forge",
            Self::Optifine => "optifine",
            Self::Shader => "shader",
        }
    }
}

impl fmt::Display for GameTweak {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for GameTweak {
    type Err = LaunchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "forge" => Ok(Self::Forge),
            "optifine" => Ok(Self::Optifine),
            "shader" => Ok(Self::Shader),
            _ => Err(LaunchError::UnknownTweak {
                tweak: value.to_owned(),
            }),
        }
    }
}
