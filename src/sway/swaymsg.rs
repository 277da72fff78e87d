//! [`WindowManager`] implementation that shells out to `swaymsg`.
//!
//! Useful when the socket cannot be reached directly (sandboxes, nested
//! sessions) but a `swaymsg` wrapper can.  Each call spawns one process:
//!
//! * `swaymsg -t get_tree -r` for the tree,
//! * `swaymsg -r -- <command>` for commands.
//!
//! Anything written to stderr is treated as a failure.

use super::SwayError;
use crate::command::CommandOutcome;
use crate::traits::WindowManager;
use crate::tree::Node;
use log::debug;
use std::process::Command;

/// Window manager backed by the `swaymsg` command line tool.
#[derive(Debug, Clone)]
pub struct Swaymsg {
    program: String,
    args: Vec<String>,
}

impl Default for Swaymsg {
    fn default() -> Self {
        Self::new("swaymsg")
    }
}

impl Swaymsg {
    /// Use `program` as the helper.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build from a command line: the program followed by arguments that
    /// are passed before every request (e.g. `["swaymsg", "-s", "/run/sway.sock"]`).
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line(command_line: &[String]) -> Option<Self> {
        let (program, args) = command_line.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Arguments for one request: the configured ones, then `request`.
    fn argv<'a>(&'a self, request: &[&'a str]) -> Vec<&'a str> {
        self.args
            .iter()
            .map(String::as_str)
            .chain(request.iter().copied())
            .collect()
    }

    fn output(&self, request: &[&str]) -> Result<Vec<u8>, SwayError> {
        let argv = self.argv(request);
        debug!("executing {} {}", self.program, argv.join(" "));

        let output = Command::new(&self.program)
            .args(&argv)
            .output()
            .map_err(|source| SwayError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Err(SwayError::Helper {
                program: self.program.clone(),
                message: stderr.trim().to_string(),
            });
        }
        // A failed command still prints its outcome array, so only an
        // empty stdout makes a non-zero exit fatal here.
        if output.stdout.is_empty() && !output.status.success() {
            return Err(SwayError::Helper {
                program: self.program.clone(),
                message: format!("exited with {}", output.status),
            });
        }

        Ok(output.stdout)
    }
}

impl WindowManager for Swaymsg {
    type Error = SwayError;

    fn tree(&mut self) -> Result<Node, Self::Error> {
        let stdout = self.output(&["-t", "get_tree", "-r"])?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>, Self::Error> {
        let stdout = self.output(&["-r", "--", command])?;
        Ok(serde_json::from_slice(&stdout)?)
    }
}
