use std::io::{Read, Write};

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info, warn};

use crate::config::SerialConfig;
use crate::error::{Result, TransportError};

/// An open serial connection to the converter box.
///
/// Reads return `ErrorKind::TimedOut` when nothing arrived within the port
/// timeout; callers treat that as an empty poll.
pub struct SerialStream {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialStream {
    /// Open and configure the port described by `config`.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        config.validate()?;

        let mut port = serialport::new(config.port.as_str(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.timeout)
            .open()
            .map_err(|source| TransportError::Open {
                port: config.port.clone(),
                source,
            })?;

        // The box expects RTS low. Some virtual ports refuse the call.
        if let Err(err) = port.write_request_to_send(false) {
            debug!(port = %config.port, %err, "could not deassert RTS");
        }

        info!(
            port = %config.port,
            baud = config.baud_rate,
            timeout_ms = config.timeout.as_millis() as u64,
            "serial port opened"
        );

        let stream = Self::from_port(port, config.port.clone());
        match stream.baud_rate() {
            Ok(actual) if actual != config.baud_rate => warn!(
                port = %config.port,
                requested = config.baud_rate,
                actual,
                "port did not accept the requested baud rate"
            ),
            Ok(_) => {}
            Err(err) => debug!(port = %config.port, %err, "could not read back baud rate"),
        }

        Ok(stream)
    }

    pub(crate) fn from_port(port: Box<dyn SerialPort>, name: String) -> Self {
        Self { port, name }
    }

    /// The port name this stream was opened with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current baud rate reported by the port.
    pub fn baud_rate(&self) -> Result<u32> {
        self.port.baud_rate().map_err(TransportError::Configure)
    }

    /// Discard bytes received but not yet read.
    pub fn clear_input(&self) -> Result<()> {
        self.port
            .clear(ClearBuffer::Input)
            .map_err(TransportError::Configure)
    }
}

impl Read for SerialStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.port.flush()
    }
}

impl std::fmt::Debug for SerialStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialStream")
            .field("port", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_invalid_config_before_touching_the_system() {
        let err = SerialStream::open(&SerialConfig::default()).unwrap_err();
        assert!(matches!(err, TransportError::MissingPort));

        let err = SerialStream::open(&SerialConfig::new("COM1").baud_rate(0)).unwrap_err();
        assert!(matches!(err, TransportError::InvalidBaudRate(0)));
    }

    #[test]
    #[cfg(unix)]
    fn open_missing_device_reports_port() {
        let cfg = SerialConfig::new("/dev/arincbox-test-no-such-port");
        let err = SerialStream::open(&cfg).unwrap_err();
        match err {
            TransportError::Open { port, .. } => {
                assert_eq!(port, "/dev/arincbox-test-no-such-port");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// A pseudo-terminal pair stands in for the box. Skips where the
    /// platform cannot allocate one.
    #[cfg(unix)]
    fn pty_stream() -> Option<(SerialStream, serialport::TTYPort)> {
        let (master, slave) = serialport::TTYPort::pair().ok()?;
        Some((SerialStream::from_port(Box::new(slave), "pty".to_string()), master))
    }

    #[test]
    #[cfg(unix)]
    fn baud_rate_is_read_back_from_the_port() {
        let Some((stream, _peer)) = pty_stream() else {
            return;
        };

        assert!(stream.baud_rate().unwrap() > 0);
    }

    #[test]
    #[cfg(unix)]
    fn reads_bytes_written_by_the_peer() {
        let Some((mut stream, mut peer)) = pty_stream() else {
            return;
        };

        peer.write_all(&[0x06, 0x11, 0x22, 0x33, 0x44, 0x00, 0x0D]).unwrap();
        peer.flush().unwrap();

        let mut frame = [0u8; 7];
        stream.read_exact(&mut frame).unwrap();
        assert_eq!(frame, [0x06, 0x11, 0x22, 0x33, 0x44, 0x00, 0x0D]);
        assert_eq!(stream.name(), "pty");
    }
}
