use crate::markers::{EMPTY_FRAME, FRAME_CAPACITY, RX_FRAME_LEN, START_RX, TERMINATOR};
use crate::message::DecodedMessage;

/// Index of the escape bitmask inside a received frame.
const ESCAPE_INDEX: usize = 5;

/// Incremental parser for frames received from the box.
///
/// Feed it every byte of one stream, in order. Each call returns a
/// [`DecodedMessage`]; anything other than `Pending` is a finished result.
///
/// Wire format:
/// ```text
/// ┌──────┬────┬────┬────┬────┬──────────┬──────┐
/// │ 0x06 │ b1 │ b2 │ b3 │ b4 │ escapes  │ 0x0D │
/// └──────┴────┴────┴────┴────┴──────────┴──────┘
///   word = b1 | b2 << 8 | b3 << 16 | b4 << 24
/// ```
///
/// A start byte always begins a new frame, dropping whatever was in progress.
/// When ten bytes arrive without a terminator the buffer stays full and every
/// further byte yields `Error` until the next start byte.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    buffer: [u8; FRAME_CAPACITY],
    position: usize,
}

impl FrameDecoder {
    /// Create a decoder waiting for a start byte.
    pub fn new() -> Self {
        Self {
            buffer: [0; FRAME_CAPACITY],
            position: 0,
        }
    }

    /// Consume one byte from the stream.
    pub fn feed(&mut self, byte: u8) -> DecodedMessage {
        if byte == START_RX {
            self.buffer[0] = byte;
            self.position = 1;
            return DecodedMessage::Pending;
        }

        if self.position > 0 && self.position < FRAME_CAPACITY {
            self.buffer[self.position] = byte;

            if byte == TERMINATOR {
                let len = self.position + 1;
                self.position = 0;
                return decode_frame(&self.buffer[..len]);
            }

            self.position += 1;
            return DecodedMessage::Pending;
        }

        // Idle, or full without a terminator. Neither moves the cursor.
        DecodedMessage::Error
    }

    /// Next write slot in the frame buffer. Zero while waiting for a start byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True while waiting for a start byte.
    pub fn is_idle(&self) -> bool {
        self.position == 0
    }

    /// True once the buffer filled up without a terminator.
    pub fn is_overflowed(&self) -> bool {
        self.position == FRAME_CAPACITY
    }

    /// Bytes of the frame currently being assembled, start byte included.
    pub fn in_progress(&self) -> &[u8] {
        &self.buffer[..self.position]
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one complete received frame, start and terminator included.
pub fn decode_frame(frame: &[u8]) -> DecodedMessage {
    if frame.len() != RX_FRAME_LEN {
        return DecodedMessage::Error;
    }

    if is_empty_frame(frame) {
        return DecodedMessage::Empty;
    }

    let escapes = frame[ESCAPE_INDEX];
    let mut payload = [frame[1], frame[2], frame[3], frame[4]];

    // Bit 7 flags the most significant byte, bit 4 the least significant.
    for (i, byte) in payload.iter_mut().enumerate() {
        if escapes & (0x10 << i) != 0 {
            *byte = restore_escaped(*byte);
        }
    }

    DecodedMessage::Data(u32::from_le_bytes(payload))
}

/// True if `frame` is exactly the box's "no data" frame.
pub fn is_empty_frame(frame: &[u8]) -> bool {
    frame == EMPTY_FRAME
}

fn restore_escaped(stored: u8) -> u8 {
    if stored == 0x00 {
        START_RX
    } else {
        TERMINATOR
    }
}
