/// Errors from reading or writing frames over a byte stream.
///
/// Decoding itself never fails; malformed input comes back as
/// [`DecodedMessage::Error`](crate::DecodedMessage::Error).
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended.
    #[error("connection closed")]
    ConnectionClosed,

    /// No complete message arrived within the configured read timeout.
    #[error("no message received within {0:?}")]
    Timeout(std::time::Duration),
}

pub type Result<T> = std::result::Result<T, FrameError>;
