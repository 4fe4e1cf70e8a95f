//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Installs the global subscriber.
///
/// `RUST_LOG` picks the filter (default `info`), `LOG_FORMAT=json` switches
/// stdout to JSON and `LOG_DIR` adds a daily-rotated JSON file.
pub fn init_telemetry() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false);

    let file_layer = match std::env::var("LOG_DIR") {
        Ok(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("rbi")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?;
            Some(fmt::layer().json().with_writer(appender).with_target(true))
        }
        Err(_) => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    let result = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}

/// Console-tool variant: human-readable events on stderr, so stdout stays
/// free for command output. `RUST_LOG` still overrides `default_filter`.
pub fn init_stderr_telemetry(default_filter: &str) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}
