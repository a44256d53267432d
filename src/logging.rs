//! Tracing setup for the order service

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Crates that are too chatty at the service's own level
const QUIET_TARGETS: &[&str] = &["sqlx=warn", "tower_http=warn", "hyper=warn"];

/// Map the configured rotation name; anything unknown keeps a single file.
pub fn rotation_from_str(name: &str) -> Rotation {
    match name.to_ascii_lowercase().as_str() {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Directive string for the configured level, with noisy crates clamped.
pub fn filter_directives(level: &str) -> String {
    let mut directives = vec![level.to_string()];
    directives.extend(QUIET_TARGETS.iter().map(|t| t.to_string()));
    directives.join(",")
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Keep the returned guard alive for the lifetime of the process or
/// buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(rotation_from_str(&config.rotation))
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .with_context(|| format!("open log file in {}", config.log_dir))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(&config.log_level)))
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    // JSON goes to the file only; text also echoes to stdout
    let json_layer = config
        .use_json
        .then(|| fmt::layer().json().with_writer(writer.clone()).with_ansi(false));
    let text_layer = (!config.use_json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(writer)
            .with_ansi(false)
    });
    let stdout_layer = (!config.use_json).then(|| fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(stdout_layer)
        .try_init()
        .context("install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_names() {
        assert_eq!(rotation_from_str("hourly"), Rotation::HOURLY);
        assert_eq!(rotation_from_str("Daily"), Rotation::DAILY);
        assert_eq!(rotation_from_str("minutely"), Rotation::MINUTELY);
        assert_eq!(rotation_from_str("never"), Rotation::NEVER);
        assert_eq!(rotation_from_str("weekly"), Rotation::NEVER);
    }

    #[test]
    fn test_filter_directives_clamp_sqlx() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("debug,"));
        assert!(directives.contains("sqlx=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
