//! Serial transport for the ARINC-429-to-USB converter box.
//!
//! The box shows up as a virtual serial port. This crate opens it with the
//! line settings the box expects and hands back a [`SerialStream`] that
//! implements `Read + Write`, ready for the frame layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod stream;

pub use config::{SerialConfig, DEFAULT_BAUD_RATE, DEFAULT_TIMEOUT};
pub use error::{Result, TransportError};
pub use ports::{available_ports, PortSummary};
pub use stream::SerialStream;
