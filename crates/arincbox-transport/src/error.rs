/// Errors that can occur in serial transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the serial port.
    #[error("failed to open {port}: {source}")]
    Open {
        port: String,
        source: serialport::Error,
    },

    /// No port name was configured.
    #[error("no serial port given")]
    MissingPort,

    /// The baud rate cannot be used.
    #[error("invalid baud rate: {0}")]
    InvalidBaudRate(u32),

    /// Failed to list the system's serial ports.
    #[error("failed to enumerate serial ports: {0}")]
    Enumerate(serialport::Error),

    /// The port rejected a configuration change.
    #[error("serial port configuration failed: {0}")]
    Configure(serialport::Error),
}

impl TransportError {
    /// The I/O error kind behind this error, if there is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            TransportError::Open { source, .. }
            | TransportError::Enumerate(source)
            | TransportError::Configure(source) => match source.kind() {
                serialport::ErrorKind::Io(kind) => Some(kind),
                serialport::ErrorKind::NoDevice => Some(std::io::ErrorKind::NotFound),
                _ => None,
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
