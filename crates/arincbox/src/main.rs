mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "arincbox",
    version,
    about = "Send and receive ARINC-429 words through a USB converter box"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rx_subcommand() {
        let cli = Cli::try_parse_from([
            "arincbox",
            "rx",
            "/dev/ttyUSB0",
            "--baud",
            "115200",
            "--show-empty",
        ])
        .expect("rx args should parse");

        match cli.command {
            Command::Rx(args) => {
                assert_eq!(args.port.port, "/dev/ttyUSB0");
                assert_eq!(args.port.baud, 115_200);
                assert!(args.show_empty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn baud_defaults_to_box_rate() {
        let cli = Cli::try_parse_from(["arincbox", "rx", "COM5"]).expect("rx args should parse");
        match cli.command {
            Command::Rx(args) => assert_eq!(args.port.baud, 230_400),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_tx_words() {
        let cli = Cli::try_parse_from(["arincbox", "tx", "COM5", "0x10", "017", "9"])
            .expect("tx args should parse");
        match cli.command {
            Command::Tx(args) => assert_eq!(args.words, vec![0x10, 0o17, 9]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_word() {
        let err = Cli::try_parse_from(["arincbox", "encode", "0xZZ"])
            .expect_err("invalid word should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn encode_requires_a_word() {
        let err = Cli::try_parse_from(["arincbox", "encode"]).expect_err("missing word should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from([
            "arincbox",
            "decode",
            "--hex",
            "06 0D",
            "--file",
            "/tmp/capture.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn format_is_global() {
        let cli = Cli::try_parse_from(["arincbox", "encode", "1", "--format", "pretty"])
            .expect("format after subcommand should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Pretty)));
    }
}
