use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/periodo.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// chrono strftime pattern used to show and read dates.
    pub date_format: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: engine::DEFAULT_DATE_FORMAT.to_string(),
            log_level: "info".to_string(),
            log_file: "logs/periodo.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "periodo_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the date format (chrono strftime, e.g. %Y-%m-%d).
    #[arg(long)]
    date_format: Option<String>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("PERIODO_TUI"));
    let settings: AppConfig = builder.build()?.try_deserialize()?;

    apply_overrides(settings, args)
}

fn apply_overrides(mut settings: AppConfig, args: Args) -> Result<AppConfig> {
    if let Some(date_format) = args.date_format {
        settings.date_format = date_format;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    if !engine::is_valid_date_format(&settings.date_format) {
        return Err(AppError::InvalidConfig(format!(
            "date_format \"{}\" cannot show and read back a date",
            settings.date_format
        )));
    }
    if settings.log_file.trim().is_empty() {
        return Err(AppError::InvalidConfig("log_file is empty".to_string()));
    }

    Ok(settings)
}
