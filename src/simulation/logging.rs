//! Logging and tracing configuration
//!
//! Log output goes to stderr so it never interleaves with the rendered
//! building on stdout. With a log directory, a daily-rolling file also
//! receives every event as JSON lines.

use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// File name prefix for the rolling log files
pub const LOG_FILE_PREFIX: &str = "scan-elevator-sim.log";

/// Logging configuration for one process
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Most verbose level emitted when `RUST_LOG` is unset
    pub level: Level,
    /// JSON lines on stderr instead of the pretty format
    pub json_format: bool,
    /// Directory receiving daily-rolling JSON log files
    pub log_directory: Option<PathBuf>,
    /// Emit span open/close events
    pub enable_span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::WARN, json_format: false, log_directory: None, enable_span_events: false }
    }
}

/// Keeps the background log file writer alive
///
/// Dropping it flushes pending file output, so hold it until the process exits.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug)]
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration for the command line flags
    ///
    /// `--debug` wins over `--verbose`, which wins over `--quiet`.
    pub fn from_flags(verbose: bool, debug: bool, quiet: bool) -> Self {
        let level = if debug {
            Level::DEBUG
        } else if verbose {
            Level::INFO
        } else if quiet {
            Level::ERROR
        } else {
            Level::WARN
        };
        let config = Self::new().with_level(level);
        if debug {
            config.with_span_events()
        } else {
            config
        }
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Switch stderr output to JSON lines
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Also write JSON logs under `directory`
    pub fn with_file_logging(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Filter applied when `RUST_LOG` is unset
    fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Install the global subscriber
    ///
    /// Fails if a subscriber is already installed.
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()));

        let json_console = self
            .json_format
            .then(|| fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events()));
        let pretty_console = (!self.json_format)
            .then(|| fmt::layer().pretty().with_writer(io::stderr).with_span_events(self.span_events()));

        let (file_layer, file_guard) = match &self.log_directory {
            Some(dir) => {
                let (writer, guard) = non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
                let layer = fmt::layer().json().with_writer(writer).with_span_events(self.span_events());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(json_console)
            .with(pretty_console)
            .with(file_layer)
            .try_init()?;

        debug!(
            level = %self.level,
            json = self.json_format,
            log_directory = ?self.log_directory,
            "Logging initialized"
        );
        Ok(LoggingGuard { _file_writer: file_guard })
    }
}

/// Structured event tagged with the simulation component
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::$level!(message = $message, component = "simulation", $($key = $value,)*)
    };
}

/// Info span for timing a stretch of the run
#[macro_export]
macro_rules! perf_span {
    ($name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info_span!($name, component = "performance", $($key = $value,)*)
    };
}
