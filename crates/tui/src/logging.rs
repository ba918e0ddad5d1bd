//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr while the app runs.

use std::{fs, path::Path};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    let path = Path::new(&config.log_file);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("not a file path: {}", config.log_file)))?
        .to_string_lossy()
        .into_owned();
    fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|err| AppError::Logging(err.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    Ok(guard)
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("periodo_tui={level},engine={level}"))
        .map_err(|err| AppError::Logging(err.to_string()))
}
