//! Text-selectable output formats: connection framing and log lines.
//!
//! Both parse case-insensitively from CLI flags and environment variables
//! and use the same snake_case names in configuration files.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Message framing used on the accepted connection.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Framing {
    /// One JSON document per `\n`-terminated line over the raw stream.
    #[default]
    Lines,
    /// One JSON document per WebSocket data frame.
    #[strum(to_string = "websocket", serialize = "ws")]
    #[serde(rename = "websocket", alias = "ws")]
    WebSocket,
}

/// Shape of each daemon log line.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    #[default]
    Json,
    /// Single human-readable line per event.
    Compact,
}
