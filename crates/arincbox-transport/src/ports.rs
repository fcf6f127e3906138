use serialport::SerialPortType;

use crate::error::{Result, TransportError};

/// A serial port found on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSummary {
    pub name: String,
    /// `usb`, `pci`, `bluetooth` or `unknown`.
    pub kind: &'static str,
    /// USB vendor/product and description, when known.
    pub details: Option<String>,
}

/// List the serial ports the system knows about.
pub fn available_ports() -> Result<Vec<PortSummary>> {
    let ports = serialport::available_ports().map_err(TransportError::Enumerate)?;
    Ok(ports
        .into_iter()
        .map(|info| summarize(info.port_name, &info.port_type))
        .collect())
}

fn summarize(name: String, port_type: &SerialPortType) -> PortSummary {
    let (kind, details) = match port_type {
        SerialPortType::UsbPort(usb) => {
            let mut details = format!("{:04x}:{:04x}", usb.vid, usb.pid);
            if let Some(product) = &usb.product {
                details.push(' ');
                details.push_str(product);
            }
            ("usb", Some(details))
        }
        SerialPortType::PciPort => ("pci", None),
        SerialPortType::BluetoothPort => ("bluetooth", None),
        _ => ("unknown", None),
    };
    PortSummary {
        name,
        kind,
        details,
    }
}
