//! `tokio-util` codec adapters.
//!
//! The two directions stay separate types: [`RxCodec`] only decodes and
//! [`TxCodec`] only encodes, since the box's formats are not inverses.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::decoder::FrameDecoder;
use crate::encoder::encode_word_into;
use crate::error::FrameError;
use crate::message::DecodedMessage;

/// Decodes frames received from the box. Never yields `Pending`.
#[derive(Debug, Default)]
pub struct RxCodec {
    decoder: FrameDecoder,
}

impl RxCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// The decoder state for this stream.
    pub fn decoder(&self) -> &FrameDecoder {
        &self.decoder
    }
}

impl Decoder for RxCodec {
    type Item = DecodedMessage;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        while src.has_remaining() {
            let message = self.decoder.feed(src.get_u8());
            if message.is_complete() {
                return Ok(Some(message));
            }
        }
        Ok(None)
    }
}

/// Encodes words for the box's transmit side.
#[derive(Debug, Default, Clone, Copy)]
pub struct TxCodec;

impl TxCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder<u32> for TxCodec {
    type Error = FrameError;

    fn encode(&mut self, word: u32, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_word_into(word, dst);
        Ok(())
    }
}
