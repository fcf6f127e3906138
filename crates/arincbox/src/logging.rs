use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Targets that log at the level chosen on the command line.
const CRATE_TARGETS: [&str; 3] = ["arincbox", "arincbox_frame", "arincbox_transport"];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }

    /// Targets tell frame and transport events apart; only worth the noise
    /// when debugging.
    fn show_target(self) -> bool {
        matches!(self, LogLevel::Debug | LogLevel::Trace)
    }
}

/// Our crates log at `level`; anything else is capped at warnings.
fn log_targets(level: LogLevel) -> Targets {
    let level = level.as_filter();
    CRATE_TARGETS
        .iter()
        .fold(Targets::new(), |targets, &target| {
            targets.with_target(target, level)
        })
        .with_default(level.min(LevelFilter::WARN))
}

/// Logs go to stderr so stdout carries only decoded output.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(level.show_target());
    let targets = log_targets(level);

    match format {
        LogFormat::Text => {
            let _ = tracing_subscriber::registry()
                .with(layer.with_filter(targets))
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::registry()
                .with(layer.json().with_filter(targets))
                .try_init();
        }
    }
}
