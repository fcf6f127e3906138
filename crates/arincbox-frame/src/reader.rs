use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};

use bytes::{Buf, BytesMut};
use tracing::{debug, trace};

use crate::decoder::FrameDecoder;
use crate::error::{FrameError, Result};
use crate::message::DecodedMessage;

const INITIAL_BUFFER_CAPACITY: usize = 256;
const READ_CHUNK_SIZE: usize = 64;

/// Configuration for [`MessageReader`].
#[derive(Debug, Clone, Default)]
pub struct FrameConfig {
    /// Longest time [`MessageReader::read_message`] waits for a complete
    /// message. `None` waits forever.
    pub read_timeout: Option<Duration>,
}

/// Running totals of completed messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub data: u64,
    pub empty: u64,
    pub errors: u64,
}

impl DecodeStats {
    fn record(&mut self, message: DecodedMessage) {
        match message {
            DecodedMessage::Data(_) => self.data += 1,
            DecodedMessage::Empty => self.empty += 1,
            DecodedMessage::Error => self.errors += 1,
            DecodedMessage::Pending => {}
        }
    }
}

/// Reads decoded messages from any `Read` byte source.
///
/// Bytes are pulled in chunks and fed to a [`FrameDecoder`] one at a time.
/// Read timeouts count as empty polls and leave the decoder untouched, so a
/// frame split across several timeouts still decodes.
pub struct MessageReader<T> {
    inner: T,
    decoder: FrameDecoder,
    buf: BytesMut,
    config: FrameConfig,
    stats: DecodeStats,
}

impl<T: Read> MessageReader<T> {
    /// Create a new message reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new message reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            decoder: FrameDecoder::new(),
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
            stats: DecodeStats::default(),
        }
    }

    /// Return the next complete message, or `None` if the source timed out
    /// first.
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn poll_message(&mut self) -> Result<Option<DecodedMessage>> {
        loop {
            if let Some(message) = self.drain_buffered() {
                return Ok(Some(message));
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if is_empty_poll(&err) => return Ok(None),
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                if !self.decoder.is_idle() {
                    debug!(
                        pending = self.decoder.position(),
                        "stream closed with a partial frame"
                    );
                }
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Read the next complete message (blocking).
    ///
    /// Empty polls are retried until `read_timeout` elapses, which yields
    /// `Err(FrameError::Timeout)`.
    pub fn read_message(&mut self) -> Result<DecodedMessage> {
        let started = Instant::now();
        loop {
            if let Some(message) = self.poll_message()? {
                return Ok(message);
            }

            if let Some(timeout) = self.config.read_timeout {
                if started.elapsed() >= timeout {
                    return Err(FrameError::Timeout(timeout));
                }
            }
        }
    }

    fn drain_buffered(&mut self) -> Option<DecodedMessage> {
        while self.buf.has_remaining() {
            let message = self.decoder.feed(self.buf.get_u8());
            if message.is_complete() {
                trace!(kind = message.kind(), "message decoded");
                self.stats.record(message);
                return Some(message);
            }
        }
        None
    }

    /// Totals of messages returned so far.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// The decoder state for this stream.
    pub fn decoder(&self) -> &FrameDecoder {
        &self.decoder
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Update the read timeout for subsequent calls to `read_message`.
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) {
        self.config.read_timeout = timeout;
    }
}

fn is_empty_poll(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock)
}
