//! Commands and types shared by the transports and the switcher.
//!
//! [`Direction`] says which way to cycle, [`focus_command`] builds the
//! command string sent to sway, and [`CommandOutcome`] is one entry of the
//! result array sway returns for a `RUN_COMMAND` request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which neighbour of the focused window to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    /// `Prev` when `backward` is set, `Next` otherwise.
    pub fn from_backward(backward: bool) -> Self {
        if backward {
            Direction::Prev
        } else {
            Direction::Next
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Prev => write!(f, "prev"),
        }
    }
}

/// Build the sway command that focuses the container `con_id`.
pub fn focus_command(con_id: i64) -> String {
    format!("[con_id={}] focus", con_id)
}

/// Result of one (semicolon separated) sub-command of a `RUN_COMMAND`.
///
/// ```json
/// [{"success":false,"parse_error":false,"error":"No matching node."}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub parse_error: bool,
    /// Only present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl CommandOutcome {
    /// The error text reported by sway, or a placeholder.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown error")
    }
}
