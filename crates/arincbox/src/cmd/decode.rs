use std::fs;
use std::io::Read;

use arincbox_frame::{DecodedMessage, FrameDecoder};
use tracing::{debug, info};

use crate::cmd::word::parse_hex_bytes;
use crate::cmd::DecodeArgs;
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_message, OutputFormat};

/// Exit code is `DATA_INVALID` when any message failed to decode.
pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let (bytes, source) = resolve_input(&args)?;

    let messages = decode_all(&bytes);
    for message in &messages {
        print_message(message, &source, format);
    }

    let errors = messages.iter().filter(|m| m.is_error()).count();
    info!(
        bytes = bytes.len(),
        messages = messages.len(),
        errors,
        "decode finished"
    );

    if errors > 0 {
        Ok(DATA_INVALID)
    } else {
        Ok(SUCCESS)
    }
}

fn resolve_input(args: &DecodeArgs) -> CliResult<(Vec<u8>, String)> {
    if let Some(hex) = &args.hex {
        let bytes = parse_hex_bytes(hex).map_err(|err| CliError::new(USAGE, err))?;
        return Ok((bytes, "hex".to_string()));
    }
    if let Some(path) = &args.file {
        let bytes = fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
        return Ok((bytes, path.display().to_string()));
    }

    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|err| io_error("reading stdin failed", err))?;
    Ok((bytes, "stdin".to_string()))
}

/// Run `bytes` through one decoder and keep every completed message.
fn decode_all(bytes: &[u8]) -> Vec<DecodedMessage> {
    let mut decoder = FrameDecoder::new();
    let messages: Vec<_> = bytes
        .iter()
        .map(|&b| decoder.feed(b))
        .filter(DecodedMessage::is_complete)
        .collect();

    if !decoder.is_idle() {
        debug!(
            pending = decoder.position(),
            "input ended with a partial frame"
        );
    }
    messages
}
