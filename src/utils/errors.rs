//! Error handling for site-i18n
//!
//! Resolution itself never fails; these errors only come out of configuration,
//! translation loading and URL parsing at the edges of the crate.

use thiserror::Error;

/// Main error type for site-i18n
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Invalid translation file for '{language}': {reason}")]
    InvalidTranslationFile { language: String, reason: String },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for site-i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;
