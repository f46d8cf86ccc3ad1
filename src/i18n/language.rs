//! Language tags and the closed set of supported languages
//!
//! A [`LanguageTag`] can only be obtained from a [`LanguageSet`], so every tag
//! flowing through detection and resolution is a member of the configured set.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use serde::Serialize;
use crate::config::I18nConfig;
use crate::config::validation::validate_i18n_config;
use crate::utils::errors::{I18nError, Result};

/// A supported language identifier (e.g. `"en"`, `"nb"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The closed set of languages a deployment supports
#[derive(Debug, Clone)]
pub struct LanguageSet {
    /// Supported tags in configuration order
    languages: Vec<LanguageTag>,
    /// Display names by tag
    names: HashMap<LanguageTag, String>,
    default_language: LanguageTag,
}

impl LanguageSet {
    /// Create a language set from supported codes and a default code.
    ///
    /// Duplicate codes are collapsed; the default must be one of the codes.
    pub fn new<I, S>(supported: I, default_language: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut languages: Vec<LanguageTag> = Vec::new();
        for code in supported {
            let tag = LanguageTag(code.into());
            if tag.0.is_empty() {
                return Err(I18nError::Config("Language tag cannot be empty".to_string()));
            }
            if !languages.contains(&tag) {
                languages.push(tag);
            }
        }

        let default_language = languages
            .iter()
            .find(|tag| tag.as_str() == default_language)
            .cloned()
            .ok_or_else(|| {
                I18nError::Config(format!(
                    "Default language '{}' must be in supported languages list",
                    default_language
                ))
            })?;

        Ok(Self {
            languages,
            names: HashMap::new(),
            default_language,
        })
    }

    /// Build the language set described by the i18n configuration section
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        validate_i18n_config(config)?;

        let mut set = Self::new(config.supported_languages.iter().cloned(), &config.default_language)?;
        for (code, name) in &config.language_names {
            set = set.with_name(code, name.clone());
        }
        Ok(set)
    }

    /// Attach a display name to a supported language; unknown codes are ignored
    pub fn with_name(mut self, code: &str, name: impl Into<String>) -> Self {
        if let Some(tag) = self.get(code) {
            self.names.insert(tag, name.into());
        }
        self
    }

    /// Look up a code, returning its tag only if it is supported
    pub fn get(&self, code: &str) -> Option<LanguageTag> {
        self.languages.iter().find(|tag| tag.as_str() == code).cloned()
    }

    /// Like [`LanguageSet::get`], but reports unsupported codes as an error
    pub fn require(&self, code: &str) -> Result<LanguageTag> {
        self.get(code)
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|tag| tag.as_str() == code)
    }

    pub fn default_language(&self) -> &LanguageTag {
        &self.default_language
    }

    pub fn is_default(&self, tag: &LanguageTag) -> bool {
        *tag == self.default_language
    }

    /// Supported tags in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Human-readable name of a language, or its tag when none is configured
    pub fn display_name<'a>(&'a self, tag: &'a LanguageTag) -> &'a str {
        self.names.get(tag).map(String::as_str).unwrap_or(tag.as_str())
    }
}
