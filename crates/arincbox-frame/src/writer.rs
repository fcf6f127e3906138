use std::io::{ErrorKind, Write};
use std::thread;
use std::time::Duration;

use bytes::BytesMut;
use tracing::trace;

use crate::encoder::encode_word_into;
use crate::error::{FrameError, Result};
use crate::markers::TX_FRAME_LEN;

/// Pause before retrying a sink that reported `WouldBlock`.
pub const WOULD_BLOCK_BACKOFF: Duration = Duration::from_millis(1);

/// Writes encoded words to any `Write` byte sink.
pub struct WordWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> WordWriter<T> {
    /// Create a new word writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(TX_FRAME_LEN),
        }
    }

    /// Encode and send one word (blocking).
    pub fn send(&mut self, word: u32) -> Result<()> {
        self.send_all(&[word])
    }

    /// Encode and send several words back to back in a single write.
    pub fn send_all(&mut self, words: &[u32]) -> Result<()> {
        self.buf.clear();
        for &word in words {
            trace!("sending word {word:#010X}");
            encode_word_into(word, &mut self.buf);
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(WOULD_BLOCK_BACKOFF)
                }
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(WOULD_BLOCK_BACKOFF)
                }
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
