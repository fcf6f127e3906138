use std::io::{BufRead, IsTerminal, Write};

use arincbox_frame::{encode_word, WordWriter};
use arincbox_transport::SerialStream;
use tracing::{info, warn};

use crate::cmd::word::parse_word;
use crate::cmd::TxArgs;
use crate::exit::{frame_error, io_error, transport_error, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

const INTERACTIVE_HINT: &str = "Enter 32-bit words (0x.. hex, 0.. octal, decimal). \
'0' is sent and then exits; anything that is not a number exits without sending.";

pub fn run(args: TxArgs, format: OutputFormat) -> CliResult<i32> {
    let stream = SerialStream::open(&args.port.config())
        .map_err(|err| transport_error("open failed", err))?;
    let port = stream.name().to_string();
    let format = format.for_stream();
    let mut writer = WordWriter::new(stream);

    let mut send = |word: u32| -> CliResult<()> {
        writer
            .send(word)
            .map_err(|err| frame_error("send failed", err))?;
        print_encoded(word, &encode_word(word), Some(&port), format);
        Ok(())
    };

    let sent = if args.words.is_empty() {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        if interactive {
            eprintln!("{INTERACTIVE_HINT}");
        }
        send_lines(stdin.lock(), interactive, &mut send)?
    } else {
        for &word in &args.words {
            send(word)?;
        }
        args.words.len()
    };

    info!(sent, "transmit finished");
    Ok(SUCCESS)
}

/// Send whitespace-separated words read from `input`.
///
/// Stops after sending `0`, at end of input, or at the first token that is
/// not a word (that token is not sent).
fn send_lines<B, F>(mut input: B, prompt: bool, send: &mut F) -> CliResult<usize>
where
    B: BufRead,
    F: FnMut(u32) -> CliResult<()>,
{
    let mut sent = 0usize;
    let mut line = String::new();

    loop {
        if prompt {
            eprint!("\nEnter a 32 bits value: ");
            let _ = std::io::stderr().flush();
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|err| io_error("reading stdin failed", err))?;
        if read == 0 {
            return Ok(sent);
        }

        for token in line.split_whitespace() {
            let word = match parse_word(token) {
                Ok(word) => word,
                Err(err) => {
                    warn!("{err}, stopping");
                    return Ok(sent);
                }
            };

            send(word)?;
            sent += 1;

            if word == 0 {
                return Ok(sent);
            }
        }
    }
}
