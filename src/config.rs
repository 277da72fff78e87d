//! Application configuration.
//!
//! The configuration is loaded from an optional JSON file, by default
//! `$XDG_CONFIG_HOME/swaycycle/config.json`.  Every field is optional and
//! a missing file means "all defaults".
//!
//! # Example
//!
//! ```json
//! { "transport": "swaymsg", "swaymsg": "swaymsg" }
//! ```
//!
//! `swaymsg` is either a program name or a full command line whose extra
//! arguments precede every request:
//!
//! ```json
//! { "swaymsg": ["swaymsg", "-s", "/run/user/1000/sway-ipc.sock"] }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// How swaycycle talks to sway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Native IPC over `$SWAYSOCK`.
    #[default]
    Socket,
    /// Run the `swaymsg` helper.
    Swaymsg,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transport: Transport,
    /// Helper command line used by the `swaymsg` transport.
    #[serde(deserialize_with = "command_line")]
    pub swaymsg: Vec<String>,
}

/// Accept `"swaymsg"` as well as `["swaymsg", "-s", "…"]`.
fn command_line<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CommandLine {
        Program(String),
        Full(Vec<String>),
    }

    Ok(match CommandLine::deserialize(deserializer)? {
        CommandLine::Program(program) => vec![program],
        CommandLine::Full(args) => args,
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transport: Transport::Socket,
            swaymsg: vec!["swaymsg".into()],
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Resolve the default config file (`$XDG_CONFIG_HOME/swaycycle/config.json`,
/// falling back to `$HOME/.config`).
pub fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("swaycycle").join("config.json"))
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
