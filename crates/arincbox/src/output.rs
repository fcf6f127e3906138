use std::io::{IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use arincbox_frame::DecodedMessage;
use arincbox_transport::PortSummary;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }

    /// Format for commands that print one message at a time as it arrives.
    /// Tables become one line per message.
    pub fn for_stream(self) -> Self {
        match self {
            Self::Table => Self::Pretty,
            other => other,
        }
    }
}

#[derive(Serialize)]
struct MessageOutput<'a> {
    kind: &'a str,
    word: Option<u32>,
    hex: Option<String>,
    source: &'a str,
    timestamp: String,
}

/// Print one completed message. `source` names where the bytes came from.
pub fn print_message(message: &DecodedMessage, source: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = MessageOutput {
                kind: message.kind(),
                word: message.value(),
                hex: message.value().map(word_hex),
                source,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "WORD", "SOURCE"])
                .add_row(vec![
                    message.kind().to_string(),
                    message.value().map(word_hex).unwrap_or_else(|| "-".to_string()),
                    source.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match message.value() {
            Some(word) => println!("{} {}", message.kind(), word_hex(word)),
            None => println!("{}", message.kind()),
        },
        OutputFormat::Raw => match message {
            DecodedMessage::Error => println!("Error decoding the message!"),
            other => {
                if let Some(word) = other.value() {
                    println!("{}", word_hex(word));
                }
            }
        },
    }
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    word: u32,
    hex: String,
    frame: String,
    port: Option<&'a str>,
}

/// Print a word together with the frame it encodes to. `port` is set when
/// the frame was actually sent.
pub fn print_encoded(word: u32, frame: &[u8], port: Option<&str>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                word,
                hex: word_hex(word),
                frame: bytes_hex(frame),
                port,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["WORD", "FRAME", "PORT"])
                .add_row(vec![
                    word_hex(word),
                    bytes_hex(frame),
                    port.unwrap_or("-").to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match port {
            Some(port) => println!("{} was sent to {port}", word_hex(word)),
            None => println!("{} => {}", word_hex(word), bytes_hex(frame)),
        },
        OutputFormat::Raw => print_raw(frame),
    }
}

#[derive(Serialize)]
struct PortOutput<'a> {
    name: &'a str,
    kind: &'a str,
    details: Option<&'a str>,
}

pub fn print_ports(ports: &[PortSummary], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<PortOutput<'_>> = ports
                .iter()
                .map(|p| PortOutput {
                    name: &p.name,
                    kind: p.kind,
                    details: p.details.as_deref(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "TYPE", "DETAILS"]);
            for port in ports {
                table.add_row(vec![
                    port.name.clone(),
                    port.kind.to_string(),
                    port.details.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for port in ports {
                println!("{}", port.name);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn word_hex(word: u32) -> String {
    format!("0x{word:08X}")
}

pub fn bytes_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
