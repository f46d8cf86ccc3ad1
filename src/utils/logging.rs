//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for language detection and translation fallback events.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, a daily-rolling file layer is added next
/// to stderr. The returned guard must be kept alive for file output to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| I18nError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log which signal decided the active language
pub fn log_language_detected(language: &str, source: &str) {
    debug!(language = language, source = source, "Language detected");
}

/// Log a lookup that had to use the default language table
pub fn log_translation_fallback(key: &str, requested: &str, default: &str) {
    debug!(
        key = key,
        requested = requested,
        default = default,
        "Translation missing, using default language"
    );
}

/// Log a key that no table could resolve
pub fn log_missing_translation(key: &str, language: &str) {
    warn!(key = key, language = language, "Translation key not found in any language");
}

/// Log a change of the stored language preference
pub fn log_language_changed(language: &str, storage_key: &str) {
    info!(language = language, storage_key = storage_key, "Language preference stored");
}
