//! Subscriber setup driven by the `general.log.*` properties.

use crate::{BasaltErrorExt, BasaltResult};
use basalt_domain::Property;
use basalt_kernel::conf::Configuration;
use basalt_logger::{LevelFilter, LogFormat, Logger};
use std::path::PathBuf;

/// Logger settings resolved from a [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
    /// `None` when `general.log.dir` is empty: console only.
    pub dir: Option<PathBuf>,
    pub max_files: usize,
}

impl LogSettings {
    /// # Errors
    /// If a `general.log.*` value does not fit its type.
    pub fn from_configuration<C: Configuration + ?Sized>(conf: &C) -> BasaltResult<Self> {
        let level = conf
            .get_choice(Property::GeneralLogLevel)
            .context("general.log.level")?
            .parse::<LevelFilter>()
            .map_err(|e| e.to_string())?;
        let format = conf
            .get_choice(Property::GeneralLogFormat)
            .context("general.log.format")?
            .parse::<LogFormat>()
            .map_err(|e| e.to_string())?;
        let dir = conf.get_path(Property::GeneralLogDir).context("general.log.dir")?;
        let max_files = conf.get_count(Property::GeneralLogMaxFiles).context("general.log.files.max")?;

        Ok(Self {
            level,
            format,
            dir: (!dir.as_os_str().is_empty()).then_some(dir),
            max_files: usize::try_from(max_files).map_err(|e| e.to_string())?,
        })
    }
}

/// Installs the global subscriber for process `name` from `conf`.
///
/// # Errors
/// If the settings are invalid or a subscriber is already installed.
pub fn init<C: Configuration + ?Sized>(name: &str, conf: &C) -> BasaltResult<Logger> {
    let settings = LogSettings::from_configuration(conf)?;
    let builder = Logger::builder().name(name).level(settings.level).format(settings.format);

    let logger = match settings.dir {
        Some(dir) => builder.path(dir).max_files(settings.max_files).init(),
        None => builder.init(),
    }
    .context("Failed to install subscriber")?;

    Ok(logger)
}
