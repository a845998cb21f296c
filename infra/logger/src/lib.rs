//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: console output on stderr, optional
//! rolling log files written through a non-blocking worker, and `RUST_LOG`-style filtering.
//!
//! * [`LogFormat`] selects compact, full or JSON lines for every enabled output.
//! * Use [`LoggerBuilder::env_filter`] for module-directed filters
//!   (e.g., `"basalt_kernel=debug"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use basalt_logger::{LevelFilter, LogFormat, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("basalt")
//!     .format(LogFormat::Compact)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt, LoggerResult};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Line format of every enabled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Single line per event, fields inline.
    #[default]
    Compact,
    /// Default `tracing-subscriber` layout with span context.
    Full,
    /// Newline-delimited JSON objects.
    Json,
}

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    format: LogFormat,
    rotation: Rotation,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            format: LogFormat::Compact,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] is reachable; file-only settings are
/// only reachable after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: LoggerSettings,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the process; also the prefix of rolling log files (`basalt.2026-10-19.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), settings: self.settings, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when no filter directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Adds an explicit env filter (e.g., `basalt_kernel=debug`).
    ///
    /// Invalid filters cause [`LoggerBuilder::init`] to fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Console output on stderr. On by default.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Directory for rolling log files; created if missing.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.path = Some(path.into());
        LoggerBuilder { settings, name: self.name, file_state: PhantomData }
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file worker; keep it alive until shutdown so buffered
    /// lines are flushed.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] if a global subscriber is already set,
    /// [`LoggerError::InvalidConfiguration`] for invalid settings, [`LoggerError::Io`] or
    /// [`LoggerError::Appender`] if the log directory cannot be prepared.
    pub fn init(self) -> LoggerResult<Logger> {
        let LoggerBuilder { settings, name: WithName(name), .. } = self;
        validate(&settings, &name)?;

        let env_filter = build_env_filter(&settings)?;
        let mut layers = Vec::new();

        if settings.console {
            layers.push(format_layer(settings.format, io::stderr, true));
        }

        let guard = if let Some(path) = settings.path {
            fs::create_dir_all(&path)
                .context(format!("Failed to create log directory {}", path.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(settings.rotation)
                .filename_prefix(&name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(settings.max_files)
                .build(&path)
                .context(format!("Log directory {}", path.display()))?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(format_layer(settings.format, writer, false));
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging outputs enabled. Enable the console or set a path.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { name, guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background file worker. Drop it only when the process is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName, file_state: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when log files are being written.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!(name = %self.name, "Flushing log files");
        }
    }
}

fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Full => base.boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}

fn validate(settings: &LoggerSettings, name: &str) -> LoggerResult<()> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.path.is_some() && settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &LoggerSettings) -> LoggerResult<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builder_starts_with_console_info_compact() {
        let builder = Logger::builder().name("basalt-test").env_filter("basalt_kernel=debug");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.format, LogFormat::Compact);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("basalt_kernel=debug"));
        assert!(builder.settings.path.is_none());
    }

    #[test]
    fn builder_records_file_settings() {
        let tmp_dir = tempdir().expect("tempdir");
        let log_dir = tmp_dir.path().join("logs");
        let builder = Logger::builder()
            .name("basalt-test")
            .format(LogFormat::Json)
            .path(log_dir.clone())
            .max_files(5)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
        assert_eq!(builder.settings.format, LogFormat::Json);
        assert_eq!(builder.settings.max_files, 5);
        assert_eq!(builder.settings.path.as_deref(), Some(log_dir.as_path()));
    }

    #[test]
    fn formats_parse_from_property_values() {
        assert_eq!("compact".parse::<LogFormat>().ok(), Some(LogFormat::Compact));
        assert_eq!("full".parse::<LogFormat>().ok(), Some(LogFormat::Full));
        assert_eq!("JSON".parse::<LogFormat>().ok(), Some(LogFormat::Json));
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn empty_name_is_rejected_before_install() {
        let err = Logger::builder().name("  ").init().expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_outputs_is_rejected_before_install() {
        let err = Logger::builder().name("basalt-test").console(false).init().expect_err("no outputs");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let tmp_dir = tempdir().expect("tempdir");
        let err = Logger::builder()
            .name("basalt-test")
            .path(tmp_dir.path())
            .max_files(0)
            .init()
            .expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = Logger::builder().name("basalt-test").env_filter("basalt=loudest").init().expect_err("bad filter");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
