//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure the language set and logging settings are consistent.

use std::collections::HashSet;
use crate::utils::errors::{I18nError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
pub fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(I18nError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(I18nError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for code in &config.supported_languages {
        if code.is_empty() || code.contains('/') {
            return Err(I18nError::Config(
                format!("Invalid language tag: {:?}", code)
            ));
        }
        if !seen.insert(code.as_str()) {
            return Err(I18nError::Config(
                format!("Duplicate supported language: {}", code)
            ));
        }
    }

    if !seen.contains(config.default_language.as_str()) {
        return Err(I18nError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    if let Some(code) = config.language_names.keys().find(|code| !seen.contains(code.as_str())) {
        return Err(I18nError::Config(
            format!("Display name given for unsupported language: {}", code)
        ));
    }

    if config.query_parameter.is_empty() {
        return Err(I18nError::Config(
            "Language query parameter name is required".to_string()
        ));
    }

    if config.storage_key.is_empty() {
        return Err(I18nError::Config(
            "Language storage key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_name.is_empty() {
        return Err(I18nError::Config(
            "Log file name is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_language_must_be_supported() {
        let mut settings = Settings::default();
        settings.i18n.default_language = "fr".to_string();
        assert_matches!(validate_settings(&settings), Err(I18nError::Config(_)));
    }

    #[test]
    fn test_duplicate_languages_rejected() {
        let mut settings = Settings::default();
        settings.i18n.supported_languages.push("nb".to_string());
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_tag_with_slash_rejected() {
        let mut settings = Settings::default();
        settings.i18n.supported_languages.push("en/gb".to_string());
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_names_for_unknown_languages_rejected() {
        let mut settings = Settings::default();
        settings.i18n.language_names.insert("fr".to_string(), "Français".to_string());
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(I18nError::Config(msg)) if msg.contains("verbose"));
    }

    #[test]
    fn test_empty_query_parameter_rejected() {
        let mut settings = Settings::default();
        settings.i18n.query_parameter.clear();
        assert!(validate_settings(&settings).is_err());
    }
}
