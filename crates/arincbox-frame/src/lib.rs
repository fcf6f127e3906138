//! Frame codec for the ARINC-429-to-USB converter box.
//!
//! The box talks over a virtual serial port using two unrelated wire formats:
//! - Receive: `0x06`, four payload bytes, an escape bitmask, `0x0D` (7 bytes)
//! - Transmit: `0x01`, eight ASCII nibble characters, `0x0D` (10 bytes)
//!
//! [`FrameDecoder`] parses the receive direction one byte at a time and
//! [`encode_word`] produces the transmit direction. They share nothing but
//! the terminator byte and are deliberately kept apart.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod markers;
pub mod message;
pub mod reader;
pub mod writer;

#[cfg(feature = "async")]
pub mod codec;

#[cfg(feature = "async")]
pub use codec::{RxCodec, TxCodec};
pub use decoder::{decode_frame, is_empty_frame, FrameDecoder};
pub use encoder::{encode_word, encode_word_into};
pub use error::{FrameError, Result};
pub use markers::{
    EMPTY_FRAME, FRAME_CAPACITY, RX_FRAME_LEN, START_RX, START_TX, TERMINATOR, TX_FRAME_LEN,
};
pub use message::DecodedMessage;
pub use reader::{DecodeStats, FrameConfig, MessageReader};
pub use writer::{WordWriter, WOULD_BLOCK_BACKOFF};
