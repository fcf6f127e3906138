//! Sentinel bytes and frame sizes.
//!
//! Both wire formats end in a carriage return. They differ in their start
//! byte: the box sends `0x06` and expects `0x01`.

/// Start of a frame received from the box.
pub const START_RX: u8 = 0x06;

/// Start of a frame sent to the box.
pub const START_TX: u8 = 0x01;

/// End of a frame, both directions.
pub const TERMINATOR: u8 = 0x0D;

/// Length of a well-formed received frame.
pub const RX_FRAME_LEN: usize = 7;

/// Length of a frame sent to the box.
pub const TX_FRAME_LEN: usize = 10;

/// Size of the decoder's frame buffer.
pub const FRAME_CAPACITY: usize = 10;

/// Frame the box emits when it has no word to report.
pub const EMPTY_FRAME: [u8; RX_FRAME_LEN] = [START_RX, 0x00, 0x00, 0x00, 0x80, 0x00, TERMINATOR];
