use clap::{Args, Subcommand};
use std::path::PathBuf;

use arincbox_transport::{SerialConfig, DEFAULT_BAUD_RATE};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod ports;
pub mod rx;
pub mod tx;
pub mod version;
pub mod word;

use word::parse_word;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print words received from the converter box.
    Rx(RxArgs),
    /// Send words to the converter box.
    Tx(TxArgs),
    /// Show the frames words encode to, without a port.
    Encode(EncodeArgs),
    /// Decode captured receive-side bytes, without a port.
    Decode(DecodeArgs),
    /// List serial ports.
    Ports(PortsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Rx(args) => rx::run(args, format),
        Command::Tx(args) => tx::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Ports(args) => ports::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PortArgs {
    /// Serial port of the converter box (e.g. /dev/ttyUSB0, COM5).
    #[arg(env = "ARINCBOX_PORT")]
    pub port: String,
    /// Baud rate.
    #[arg(long, short = 'b', env = "ARINCBOX_BAUD", default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,
}

impl PortArgs {
    pub fn config(&self) -> SerialConfig {
        SerialConfig::new(self.port.clone()).baud_rate(self.baud)
    }
}

#[derive(Args, Debug)]
pub struct RxArgs {
    #[command(flatten)]
    pub port: PortArgs,
    /// Also print the box's "no data" frames.
    #[arg(long)]
    pub show_empty: bool,
    /// Exit after receiving N data words.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct TxArgs {
    #[command(flatten)]
    pub port: PortArgs,
    /// Words to send (0x.. hex, 0.. octal, or decimal). Read from stdin when omitted.
    #[arg(value_parser = parse_word)]
    pub words: Vec<u32>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Words to encode (0x.. hex, 0.. octal, or decimal).
    #[arg(required = true, value_parser = parse_word)]
    pub words: Vec<u32>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Bytes as hex, e.g. "06 11 22 33 44 00 0D".
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw bytes from a file. Stdin is read when neither is given.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
