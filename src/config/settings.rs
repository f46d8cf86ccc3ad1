//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    /// Supported language tags, in display order
    pub supported_languages: Vec<String>,
    /// Human-readable name per language tag
    #[serde(default)]
    pub language_names: HashMap<String, String>,
    /// Directory holding `<tag>.json` translation files
    pub translations_dir: String,
    /// Query parameter carrying the language in query-based detection
    pub query_parameter: String,
    /// Key of the stored language preference
    pub storage_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; stderr only when absent
    #[serde(default)]
    pub directory: Option<String>,
    pub file_name: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables.
    ///
    /// Built-in defaults are layered under an optional `config` file and
    /// `SITE_I18N__SECTION__KEY` environment variables. Built-in display names
    /// fill in only for supported tags the file leaves unnamed.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings using a specific configuration file name
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("i18n.default_language", defaults.i18n.default_language)?
            .set_default("i18n.supported_languages", defaults.i18n.supported_languages)?
            .set_default("i18n.translations_dir", defaults.i18n.translations_dir)?
            .set_default("i18n.query_parameter", defaults.i18n.query_parameter)?
            .set_default("i18n.storage_key", defaults.i18n.storage_key)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_name", defaults.logging.file_name)?
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("SITE_I18N")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.i18n.fill_language_names(&defaults.i18n.language_names);
        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::I18nError> {
        super::validation::validate_settings(self)
    }
}

impl I18nConfig {
    /// Add names from `names` for supported tags that have none
    fn fill_language_names(&mut self, names: &HashMap<String, String>) {
        for code in &self.supported_languages {
            if let Some(name) = names.get(code) {
                self.language_names
                    .entry(code.clone())
                    .or_insert_with(|| name.clone());
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let language_names = [("en", "English"), ("nb", "Norsk"), ("nl", "Nederlands")]
            .into_iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();

        Self {
            i18n: I18nConfig {
                default_language: "en".to_string(),
                supported_languages: vec!["en".to_string(), "nb".to_string(), "nl".to_string()],
                language_names,
                translations_dir: "translations".to_string(),
                query_parameter: "lang".to_string(),
                storage_key: "language".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_name: "site-i18n.log".to_string(),
            },
        }
    }
}
