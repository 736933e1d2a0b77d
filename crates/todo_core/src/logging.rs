//! File logging for the todo application.
//!
//! # Responsibility
//! - Turn one `LogSettings` value into a rotating file logger.
//! - Report which settings are active.
//!
//! # Invariants
//! - Only the first successful `init_logging` installs a backend.
//! - Later calls with equal settings succeed; different settings are
//!   rejected and the running logger is kept.
//! - Log lines are `key=value` metadata; todo text is never logged.

use chrono::Utc;
use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, LogSpecification, Logger,
    LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter, Record};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "todo";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// Absolute directory that receives `todo*.log` files.
    pub dir: PathBuf,
}

impl LogSettings {
    /// Settings for `dir` at the build's default level.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            level: default_level(),
            dir: dir.into(),
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// `Debug` for debug builds, `Info` for release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[derive(Debug)]
pub enum LoggingError {
    RelativeDir(PathBuf),
    CreateDir { dir: PathBuf, source: io::Error },
    Backend(FlexiLoggerError),
    /// A logger with other settings is already running.
    AlreadyActive(LogSettings),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeDir(dir) => {
                write!(f, "log directory must be absolute, got `{}`", dir.display())
            }
            Self::CreateDir { dir, source } => {
                write!(f, "cannot create log directory `{}`: {source}", dir.display())
            }
            Self::Backend(err) => write!(f, "log backend failed to start: {err}"),
            Self::AlreadyActive(active) => write!(
                f,
                "logging already active at level {} in `{}`",
                active.level,
                active.dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Starts file logging with `settings`, or confirms it is already running
/// with exactly these settings.
pub fn init_logging(settings: &LogSettings) -> Result<(), LoggingError> {
    if !settings.dir.is_absolute() {
        return Err(LoggingError::RelativeDir(settings.dir.clone()));
    }

    let active = ACTIVE.get_or_try_init(|| start(settings.clone()))?;
    if active.settings != *settings {
        return Err(LoggingError::AlreadyActive(active.settings.clone()));
    }
    Ok(())
}

/// Settings of the running logger, if one was started.
pub fn active_settings() -> Option<&'static LogSettings> {
    ACTIVE.get().map(|active| &active.settings)
}

fn start(settings: LogSettings) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&settings.dir).map_err(|source| LoggingError::CreateDir {
        dir: settings.dir.clone(),
        source,
    })?;

    let handle = Logger::with(LogSpecification::builder().default(settings.level).build())
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.clone())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(line_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_init module=core status=ok level={} version={}",
        settings.level.as_str().to_ascii_lowercase(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

// `2026-10-17T09:30:00.123Z INFO  todo_core::service::todo_service event=...`
fn line_format(w: &mut dyn Write, _now: &mut DeferredNow, record: &Record) -> io::Result<()> {
    write!(
        w,
        "{} {:<5} {} {}",
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}
