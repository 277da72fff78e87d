//! Framing for sway's IPC protocol.
//!
//! # Wire format
//!
//! Every message, in both directions, is a 14 byte header followed by the
//! payload:
//!
//! | Offset | Size | Content                          |
//! |--------|------|----------------------------------|
//! | 0      | 6    | magic `i3-ipc`                   |
//! | 6      | 4    | payload length, u32 little endian |
//! | 10     | 4    | message type, u32 little endian   |
//! | 14     | len  | payload                          |

use super::SwayError;
use std::io::{Read, Write};

/// Magic string opening every frame.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

/// Size of the fixed frame header.
pub const HEADER_LEN: usize = 14;

/// Message types understood by sway (the subset swaycycle sends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Payload is a command string; reply is an array of outcomes.
    RunCommand,
    /// Empty payload; reply is the JSON tree.
    GetTree,
}

impl MessageType {
    /// Numeric code on the wire.
    pub fn code(self) -> u32 {
        match self {
            MessageType::RunCommand => 0,
            MessageType::GetTree => 4,
        }
    }
}

/// A decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub message_type: u32,
    pub payload: Vec<u8>,
}

/// Encode a complete frame (header + payload).
pub fn encode(message_type: MessageType, payload: &[u8]) -> Result<Vec<u8>, SwayError> {
    let len = u32::try_from(payload.len()).map_err(|_| SwayError::PayloadTooLarge(payload.len()))?;

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&message_type.code().to_le_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Write one frame to `writer` in full.
pub fn write_frame<W: Write>(
    writer: &mut W,
    message_type: MessageType,
    payload: &[u8],
) -> Result<(), SwayError> {
    let frame = encode(message_type, payload)?;
    writer.write_all(&frame).map_err(SwayError::Write)?;
    writer.flush().map_err(SwayError::Write)
}

/// Read one frame from `reader`.
///
/// Blocks until the header and the full declared payload have arrived.
/// End of stream before that is a read error; a frame is never resumed.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Frame, SwayError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header).map_err(SwayError::Read)?;

    let (magic, rest) = header.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(SwayError::BadMagic(magic.to_vec()));
    }

    let len = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
    let message_type = u32::from_le_bytes([rest[4], rest[5], rest[6], rest[7]]);
    if len == 0 {
        return Err(SwayError::EmptyPayload);
    }

    // The length comes from the peer, so grow the buffer as data arrives
    // instead of allocating it up front.
    let mut payload = Vec::new();
    reader
        .by_ref()
        .take(u64::from(len))
        .read_to_end(&mut payload)
        .map_err(SwayError::Read)?;
    if payload.len() != len as usize {
        return Err(SwayError::Read(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("short payload: got {} of {} bytes", payload.len(), len),
        )));
    }

    Ok(Frame {
        message_type,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::focus_command;
    use std::io::Cursor;

    fn header(magic: &[u8], len: u32, ty: u32) -> Vec<u8> {
        let mut h = magic.to_vec();
        h.extend_from_slice(&len.to_le_bytes());
        h.extend_from_slice(&ty.to_le_bytes());
        h
    }

    #[test]
    fn get_tree_request_is_bare_header() {
        let frame = encode(MessageType::GetTree, b"").unwrap();
        assert_eq!(frame, header(b"i3-ipc", 0, 4));
        assert_eq!(frame.len(), HEADER_LEN);
    }

    #[test]
    fn run_command_request_layout() {
        let frame = encode(MessageType::RunCommand, b"nop").unwrap();
        assert_eq!(&frame[..6], b"i3-ipc");
        assert_eq!(&frame[6..10], &[3, 0, 0, 0]);
        assert_eq!(&frame[10..14], &[0, 0, 0, 0]);
        assert_eq!(&frame[14..], b"nop");
    }

    #[test]
    fn focus_command_survives_encode_and_decode() {
        let cmd = focus_command(14);
        let mut buf = Vec::new();
        write_frame(&mut buf, MessageType::RunCommand, cmd.as_bytes()).unwrap();

        let frame = read_frame(&mut Cursor::new(buf)).unwrap();
        assert_eq!(frame.message_type, MessageType::RunCommand.code());
        assert_eq!(frame.payload, b"[con_id=14] focus");
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut data = header(b"i4-ipc", 2, 4);
        data.extend_from_slice(b"{}");
        let err = read_frame(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, SwayError::BadMagic(ref m) if m == b"i4-ipc"));
    }

    #[test]
    fn zero_length_is_rejected() {
        let data = header(b"i3-ipc", 0, 4);
        let err = read_frame(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, SwayError::EmptyPayload));
    }

    #[test]
    fn short_header_is_read_error() {
        let err = read_frame(&mut Cursor::new(b"i3-ipc\x02".to_vec())).unwrap_err();
        assert!(matches!(err, SwayError::Read(_)));
    }

    #[test]
    fn short_payload_is_read_error() {
        let mut data = header(b"i3-ipc", 10, 4);
        data.extend_from_slice(b"{}");
        let err = read_frame(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, SwayError::Read(_)));
    }

    #[test]
    fn trailing_bytes_are_left_unread() {
        let mut data = header(b"i3-ipc", 2, 0);
        data.extend_from_slice(b"[]garbage");
        let mut cursor = Cursor::new(data);
        let frame = read_frame(&mut cursor).unwrap();
        assert_eq!(frame.payload, b"[]");
        assert_eq!(cursor.position() as usize, HEADER_LEN + 2);
    }

    /// A reader that hands out at most one byte per call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(1);
            self.0.read(&mut buf[..n])
        }
    }

    #[test]
    fn partial_reads_are_accumulated() {
        let mut data = header(b"i3-ipc", 17, 4);
        data.extend_from_slice(br#"{"id":1,"nodes":}"#);
        let frame = read_frame(&mut Trickle(Cursor::new(data))).unwrap();
        assert_eq!(frame.payload.len(), 17);
        assert_eq!(frame.message_type, 4);
    }
}
