//! Logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend for the `log` facade exactly once per process.
//! - Log to stderr by default, or to size-rotated files when a directory is given.
//!
//! # Invariants
//! - Initialization never panics.
//! - Re-initialization with the same settings is a no-op; different settings are
//!   rejected.
//!
//! Events are written as `event=<name> key=value ...` so they stay greppable.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use notefulapp::config::LOG_LEVELS;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "noteful";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    handle: LoggerHandle,
}

/// Initializes logging at `level`, to `log_dir` if given, else stderr.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - Logging is already running with a different level or destination.
/// - The log directory cannot be created or the backend fails to start.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = log_dir.map(Path::to_path_buf);

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;
    ensure_same_settings(state.level, state.log_dir.as_deref(), level, log_dir.as_deref())
}

fn start_logger(level: &'static str, log_dir: Option<PathBuf>) -> Result<LoggingState, String> {
    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?;

    let handle = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start(),
    }
    .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init level={} target={} version={}",
        level,
        log_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "stderr".to_string()),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir,
        handle,
    })
}

fn ensure_same_settings(
    active_level: &str,
    active_dir: Option<&Path>,
    level: &str,
    log_dir: Option<&Path>,
) -> Result<(), String> {
    if active_dir != log_dir {
        return Err(format!(
            "logging already initialized to `{}`; refusing to switch to `{}`",
            describe(active_dir),
            describe(log_dir)
        ));
    }
    if active_level != level {
        return Err(format!(
            "logging already initialized with level `{active_level}`; refusing to switch to `{level}`"
        ));
    }
    Ok(())
}

fn describe(dir: Option<&Path>) -> String {
    dir.map(|d| d.display().to_string())
        .unwrap_or_else(|| "stderr".to_string())
}

/// Flush buffered file output. Call before the process exits.
pub fn flush_logs() {
    if let Some(state) = LOGGING_STATE.get() {
        state.handle.flush();
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    LOG_LEVELS
        .iter()
        .copied()
        .find(|candidate| *candidate == lowered)
        .ok_or_else(|| {
            format!(
                "unsupported log level `{level}`; expected one of {}",
                LOG_LEVELS.join(", ")
            )
        })
}
