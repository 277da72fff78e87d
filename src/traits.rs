//! Core trait that decouples swaycycle from the way it talks to sway.
//!
//! Every concrete backend (the native IPC socket, the `swaymsg` helper,
//! a test double, …) implements [`WindowManager`].  The
//! [`FocusSwitcher`](crate::switcher::FocusSwitcher) only depends on this
//! abstraction.

use crate::command::CommandOutcome;
use crate::tree::Node;

/// Abstraction over a window manager that can report its tree and run
/// commands.
///
/// An implementation might speak sway's binary IPC protocol, shell out to
/// `swaymsg`, or replay canned data in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Fetch the current scene graph.
    fn tree(&mut self) -> Result<Node, Self::Error>;

    /// Run `command` and return one outcome per sub-command.
    fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>, Self::Error>;
}
