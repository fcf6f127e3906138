/// Result of feeding one byte to a [`FrameDecoder`](crate::FrameDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedMessage {
    /// No complete frame yet.
    Pending,
    /// A complete frame carrying an ARINC-429 word.
    Data(u32),
    /// The box's "no data" frame.
    Empty,
    /// A frame of the wrong length, or a byte the parser could not accept.
    Error,
}

impl DecodedMessage {
    /// The word carried by this message. `Empty` carries 0.
    pub fn value(&self) -> Option<u32> {
        match self {
            DecodedMessage::Data(word) => Some(*word),
            DecodedMessage::Empty => Some(0),
            DecodedMessage::Pending | DecodedMessage::Error => None,
        }
    }

    /// True for every variant except `Pending`.
    pub fn is_complete(&self) -> bool {
        !matches!(self, DecodedMessage::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DecodedMessage::Error)
    }

    /// Short uppercase label used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodedMessage::Pending => "PENDING",
            DecodedMessage::Data(_) => "DATA",
            DecodedMessage::Empty => "EMPTY",
            DecodedMessage::Error => "ERROR",
        }
    }
}
