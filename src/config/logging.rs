use std::env;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level {level:?}: {message}")]
    InvalidLogLevel { level: String, message: String },

    #[error("failed to initialize logging: {0}")]
    Init(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Initialize tracing with a console layer and, when `APP_LOG_FILE` is set,
/// a daily-rolling file layer alongside it. `LOG_LEVEL` accepts any
/// EnvFilter directive string and defaults to INFO.
pub fn init_logging() -> Result<(), LoggingError> {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let filter = EnvFilter::try_new(&level).map_err(|e| LoggingError::InvalidLogLevel {
        level,
        message: e.to_string(),
    })?;

    let console = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter.clone());

    let file = match env::var("APP_LOG_FILE").ok().map(PathBuf::from) {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;

            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::Init("APP_LOG_FILE has no file name".to_string()))?;
            let appender = tracing_appender::rolling::daily(dir, file_name);

            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
