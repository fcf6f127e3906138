//! Talk ARINC-429 through a USB converter box.
//!
//! The box presents a virtual serial port. Words it receives from the bus
//! arrive as 7-byte frames; words to put on the bus are sent as 10-byte
//! frames in a different format.
//!
//! # Crate Structure
//!
//! - [`transport`]: serial port access (open, configure, enumerate)
//! - [`frame`]: byte-at-a-time decoder and word encoder
//!
//! ```
//! use arincbox::frame::{encode_word, DecodedMessage, FrameDecoder};
//!
//! let mut decoder = FrameDecoder::new();
//! let mut last = DecodedMessage::Pending;
//! for byte in [0x06, 0x11, 0x22, 0x33, 0x44, 0x00, 0x0D] {
//!     last = decoder.feed(byte);
//! }
//! assert_eq!(last, DecodedMessage::Data(0x4433_2211));
//!
//! assert_eq!(&encode_word(0xF000_0000), b"\x01AAAAAAAP\x0D");
//! ```

/// Re-export transport types.
pub mod transport {
    pub use arincbox_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use arincbox_frame::*;
}
