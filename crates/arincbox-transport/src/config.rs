use std::time::Duration;

use crate::error::{Result, TransportError};

/// Baud rate the converter box uses out of the box.
pub const DEFAULT_BAUD_RATE: u32 = 230_400;

/// Read timeout for a single poll of the port. Short, so receive loops stay
/// responsive to shutdown requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10);

/// Configuration for opening the converter box's serial port.
///
/// Line settings are fixed to what the box expects: 8 data bits, no parity,
/// one stop bit, no flow control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Port name, e.g. `/dev/ttyUSB0` or `COM5`.
    pub port: String,
    pub baud_rate: u32,
    /// Read and write timeout of the opened port.
    pub timeout: Duration,
}

impl SerialConfig {
    /// Default settings for `port`.
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }

    /// Set the baud rate.
    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the port timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the settings before touching the system.
    pub fn validate(&self) -> Result<()> {
        if self.port.trim().is_empty() {
            return Err(TransportError::MissingPort);
        }
        if self.baud_rate == 0 {
            return Err(TransportError::InvalidBaudRate(self.baud_rate));
        }
        Ok(())
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
