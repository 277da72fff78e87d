//! [`WindowManager`] implementation backed by sway's IPC socket.
//!
//! Communicates directly with sway through the Unix socket named by
//! `$SWAYSOCK`, avoiding any child process.

use super::codec::{self, MessageType};
use super::SwayError;
use crate::command::CommandOutcome;
use crate::traits::WindowManager;
use crate::tree::Node;
use log::debug;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// Environment variable holding the sway socket path.
pub const SWAYSOCK_ENV: &str = "SWAYSOCK";

/// Sway-backed window manager speaking the native IPC protocol.
///
/// Owns one connection for its whole lifetime.  The socket is closed when
/// the value is dropped, on every exit path.
#[derive(Debug)]
pub struct SwayIpc {
    stream: UnixStream,
    path: PathBuf,
}

/// Resolve the sway command socket path from `$SWAYSOCK`.
pub fn socket_path() -> Result<PathBuf, SwayError> {
    match std::env::var_os(SWAYSOCK_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(SwayError::SocketNotSet),
    }
}

impl SwayIpc {
    /// Connect to the socket named by `$SWAYSOCK`.
    pub fn connect() -> Result<Self, SwayError> {
        Self::connect_to(socket_path()?)
    }

    /// Connect to the socket at `path`.
    pub fn connect_to(path: impl AsRef<Path>) -> Result<Self, SwayError> {
        let path = path.as_ref().to_path_buf();
        let stream = UnixStream::connect(&path).map_err(|source| SwayError::Connect {
            path: path.clone(),
            source,
        })?;
        debug!("connected to {}", path.display());
        Ok(Self { stream, path })
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Send one request and wait for its reply payload.
    pub fn exchange(
        &mut self,
        message_type: MessageType,
        payload: &[u8],
    ) -> Result<Vec<u8>, SwayError> {
        debug!(
            "sending {:?} ({} byte payload)",
            message_type,
            payload.len()
        );
        codec::write_frame(&mut self.stream, message_type, payload)?;

        let reply = codec::read_frame(&mut self.stream)?;
        if reply.message_type != message_type.code() {
            return Err(SwayError::UnexpectedReply {
                expected: message_type.code(),
                actual: reply.message_type,
            });
        }
        debug!("received {} byte reply", reply.payload.len());
        Ok(reply.payload)
    }
}

impl WindowManager for SwayIpc {
    type Error = SwayError;

    fn tree(&mut self) -> Result<Node, Self::Error> {
        let payload = self.exchange(MessageType::GetTree, b"")?;
        Ok(serde_json::from_slice(&payload)?)
    }

    fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>, Self::Error> {
        debug!("executing command {:?}", command);
        let payload = self.exchange(MessageType::RunCommand, command.as_bytes())?;
        Ok(serde_json::from_slice(&payload)?)
    }
}

//  Tests
