use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arincbox_frame::{DecodeStats, DecodedMessage, FrameError, MessageReader};
use arincbox_transport::SerialStream;
use tracing::{debug, info};

use crate::cmd::RxArgs;
use crate::exit::{frame_error, transport_error, CliError, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: RxArgs, format: OutputFormat) -> CliResult<i32> {
    let stream = SerialStream::open(&args.port.config())
        .map_err(|err| transport_error("open failed", err))?;
    if let Err(err) = stream.clear_input() {
        debug!(%err, "could not discard stale input");
    }
    let source = stream.name().to_string();
    let format = format.for_stream();

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut reader = MessageReader::new(stream);
    let options = ReceiveOptions {
        show_empty: args.show_empty,
        count: args.count,
    };
    let result = receive(&mut reader, &running, &options, |message| {
        print_message(message, &source, format)
    });

    let DecodeStats {
        data,
        empty,
        errors,
    } = reader.stats();
    info!(data, empty, errors, "receive stopped");

    result.map(|_| SUCCESS)
}

struct ReceiveOptions {
    show_empty: bool,
    count: Option<usize>,
}

/// Pump messages until `running` clears, the stream ends, or `count` data
/// words were seen. Returns the number of data words.
fn receive<R, F>(
    reader: &mut MessageReader<R>,
    running: &AtomicBool,
    options: &ReceiveOptions,
    mut emit: F,
) -> CliResult<usize>
where
    R: Read,
    F: FnMut(&DecodedMessage),
{
    let mut words = 0usize;

    while running.load(Ordering::SeqCst) {
        let message = match reader.poll_message() {
            Ok(Some(message)) => message,
            Ok(None) => continue,
            Err(FrameError::ConnectionClosed) => {
                info!("port closed");
                break;
            }
            Err(err) => return Err(frame_error("receive failed", err)),
        };

        match message {
            DecodedMessage::Data(_) => {
                emit(&message);
                words = words.saturating_add(1);
                if options.count.is_some_and(|count| words >= count) {
                    break;
                }
            }
            DecodedMessage::Empty => {
                if options.show_empty {
                    emit(&message);
                }
            }
            DecodedMessage::Error => {
                debug!(
                    pending = reader.decoder().position(),
                    "error decoding the message"
                );
                emit(&message);
            }
            DecodedMessage::Pending => {}
        }
    }

    Ok(words)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use arincbox_frame::EMPTY_FRAME;

    use super::*;

    fn wire() -> Vec<u8> {
        let mut wire = vec![0x06, 0x11, 0x22, 0x33, 0x44, 0x00, 0x0D];
        wire.extend_from_slice(&EMPTY_FRAME);
        wire.push(0x55);
        wire.extend_from_slice(&[0x06, 0x01, 0x00, 0x00, 0x00, 0x00, 0x0D]);
        wire
    }

    fn collect(options: ReceiveOptions) -> (usize, Vec<DecodedMessage>) {
        let mut reader = MessageReader::new(Cursor::new(wire()));
        let running = AtomicBool::new(true);
        let mut seen = Vec::new();
        let words = receive(&mut reader, &running, &options, |m| seen.push(*m)).unwrap();
        (words, seen)
    }

    #[test]
    fn prints_data_and_errors_until_stream_ends() {
        let (words, seen) = collect(ReceiveOptions {
            show_empty: false,
            count: None,
        });
        assert_eq!(words, 2);
        assert_eq!(
            seen,
            vec![
                DecodedMessage::Data(0x4433_2211),
                DecodedMessage::Error,
                DecodedMessage::Data(0x0000_0001),
            ]
        );
    }

    #[test]
    fn show_empty_includes_empty_frames() {
        let (_, seen) = collect(ReceiveOptions {
            show_empty: true,
            count: None,
        });
        assert_eq!(seen[1], DecodedMessage::Empty);
    }

    #[test]
    fn count_stops_early() {
        let (words, seen) = collect(ReceiveOptions {
            show_empty: false,
            count: Some(1),
        });
        assert_eq!(words, 1);
        assert_eq!(seen, vec![DecodedMessage::Data(0x4433_2211)]);
    }

    #[test]
    fn stopped_flag_ends_loop_immediately() {
        let mut reader = MessageReader::new(Cursor::new(wire()));
        let running = AtomicBool::new(false);
        let options = ReceiveOptions {
            show_empty: false,
            count: None,
        };
        let words = receive(&mut reader, &running, &options, |_| {
            panic!("nothing should be emitted")
        })
        .unwrap();
        assert_eq!(words, 0);
    }
}
