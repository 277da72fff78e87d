//! Sway-specific implementations.
//!
//! This module provides the two concrete backends for the
//! [`WindowManager`](crate::traits::WindowManager) trait: [`ipc::SwayIpc`]
//! speaks sway's binary IPC protocol over `$SWAYSOCK`, and
//! [`swaymsg::Swaymsg`] runs the `swaymsg` helper and parses its output.
//!
//! Nothing outside this module should reference sway's wire format
//! directly.

pub mod codec;
pub mod ipc;
pub mod swaymsg;

use std::path::PathBuf;

/// Errors that can occur when talking to sway.
#[derive(Debug, thiserror::Error)]
pub enum SwayError {
    /// `$SWAYSOCK` is unset or empty.
    #[error("SWAYSOCK environment variable not set - is sway running?")]
    SocketNotSet,

    #[error("failed to connect to sway socket at {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send request to sway: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read response from sway: {0}")]
    Read(#[source] std::io::Error),

    /// The response header does not start with the IPC magic.
    #[error("protocol error: bad magic {0:?}")]
    BadMagic(Vec<u8>),

    /// The response header declares an empty payload.
    #[error("protocol error: empty payload")]
    EmptyPayload,

    /// The response message type does not answer the request.
    #[error("protocol error: expected reply of type {expected}, got {actual}")]
    UnexpectedReply { expected: u32, actual: u32 },

    #[error("payload of {0} bytes is too large")]
    PayloadTooLarge(usize),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper process ran but reported a failure.
    #[error("{program} error: {message}")]
    Helper { program: String, message: String },
}
