//! Language detection
//!
//! Picks the active language from the signals a request carries. Signals are
//! tried in a fixed order (path segment, query parameter, stored preference)
//! and the first one naming a supported language wins. Anything unrecognized
//! is treated as "no signal"; the configured default is the final answer.

use url::Url;
use super::language::{LanguageSet, LanguageTag};
use super::storage::PreferenceStorage;
use crate::config::I18nConfig;
use crate::utils::errors::Result;
use crate::utils::logging::{log_language_changed, log_language_detected};

/// Which part of a URL carries the language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    /// `/nb/about`
    Path,
    /// `/about?lang=nb`
    Query,
}

/// Raw language signals gathered by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSignals<'a> {
    /// URL path, e.g. `/nb/about`
    pub path: Option<&'a str>,
    /// Value of the language query parameter
    pub query: Option<&'a str>,
    /// Previously stored preference
    pub stored: Option<&'a str>,
}

impl<'a> LanguageSignals<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_query(mut self, value: &'a str) -> Self {
        self.query = Some(value);
        self
    }

    pub fn with_stored(mut self, value: &'a str) -> Self {
        self.stored = Some(value);
        self
    }
}

/// Resolves signals to a supported language
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    languages: LanguageSet,
    query_parameter: String,
    storage_key: String,
}

impl LanguageDetector {
    /// Create a detector using the `lang` query parameter and `language` storage key
    pub fn new(languages: LanguageSet) -> Self {
        Self {
            languages,
            query_parameter: "lang".to_string(),
            storage_key: "language".to_string(),
        }
    }

    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        Ok(Self {
            languages: LanguageSet::from_config(config)?,
            query_parameter: config.query_parameter.clone(),
            storage_key: config.storage_key.clone(),
        })
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>) -> Self {
        self.query_parameter = name.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn query_parameter(&self) -> &str {
        &self.query_parameter
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Resolve signals to a language; never fails.
    pub fn resolve(&self, signals: &LanguageSignals<'_>) -> LanguageTag {
        let candidates = [
            ("path", signals.path.and_then(|path| self.language_from_path(path))),
            ("query", signals.query.and_then(|value| self.languages.get(value))),
            ("storage", signals.stored.and_then(|value| self.languages.get(value))),
        ];

        for (source, candidate) in candidates {
            if let Some(language) = candidate {
                log_language_detected(language.as_str(), source);
                return language;
            }
        }

        let language = self.languages.default_language().clone();
        log_language_detected(language.as_str(), "default");
        language
    }

    /// Language named by the first non-empty path segment, if supported
    pub fn language_from_path(&self, path: &str) -> Option<LanguageTag> {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| self.languages.get(segment))
    }

    /// Raw value of the language query parameter
    pub fn query_value(&self, url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(name, _)| name == self.query_parameter.as_str())
            .map(|(_, value)| value.into_owned())
    }

    /// Detect from a URL using a single mode
    pub fn detect_from_url(&self, url: &Url, mode: DetectionMode) -> LanguageTag {
        match mode {
            DetectionMode::Path => self.resolve(&LanguageSignals::new().with_path(url.path())),
            DetectionMode::Query => {
                let value = self.query_value(url);
                let signals = LanguageSignals {
                    query: value.as_deref(),
                    ..LanguageSignals::default()
                };
                self.resolve(&signals)
            }
        }
    }

    /// Live-page detection: query parameter, then stored preference.
    ///
    /// Storage is only read here, never written.
    pub fn current_language(&self, url: Option<&Url>, storage: &dyn PreferenceStorage) -> LanguageTag {
        let query = url.and_then(|url| self.query_value(url));
        let stored = storage.get(&self.storage_key);
        self.resolve(&LanguageSignals {
            path: None,
            query: query.as_deref(),
            stored: stored.as_deref(),
        })
    }

    /// Static-generation detection: query parameter of an optional URL
    pub fn build_time_language(&self, url: Option<&Url>) -> LanguageTag {
        match url {
            Some(url) => self.detect_from_url(url, DetectionMode::Query),
            None => self.languages.default_language().clone(),
        }
    }

    /// Remember a language choice and reflect it in the current URL.
    ///
    /// The first language query pair is replaced in place and any duplicates
    /// removed; without one, the pair is appended. Repeating the call with the
    /// same language leaves storage and URL unchanged.
    pub fn set_language(
        &self,
        language: &LanguageTag,
        storage: &dyn PreferenceStorage,
        url: Option<&mut Url>,
    ) {
        storage.set(&self.storage_key, language.as_str());
        log_language_changed(language.as_str(), &self.storage_key);

        if let Some(url) = url {
            set_query_value(url, &self.query_parameter, language.as_str());
        }
    }
}

fn set_query_value(url: &mut Url, name: &str, value: &str) {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, current)| {
            if key != name {
                return Some((key.into_owned(), current.into_owned()));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((key.into_owned(), value.to_string()))
        })
        .collect();

    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::storage::{MemoryStorage, NoStorage};

    fn detector() -> LanguageDetector {
        LanguageDetector::new(LanguageSet::new(["en", "nb", "nl"], "en").unwrap())
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_language_from_path() {
        let detector = detector();
        assert_eq!(detector.language_from_path("/nb/about").unwrap().as_str(), "nb");
        assert_eq!(detector.language_from_path("nl").unwrap().as_str(), "nl");
        assert_eq!(detector.language_from_path("//nb/").unwrap().as_str(), "nb");
        assert!(detector.language_from_path("/about/nb").is_none());
        assert!(detector.language_from_path("/").is_none());
        assert!(detector.language_from_path("").is_none());
    }

    #[test]
    fn test_signal_precedence() {
        let detector = detector();
        let signals = LanguageSignals::new()
            .with_path("/nl/blog")
            .with_query("nb")
            .with_stored("en");
        assert_eq!(detector.resolve(&signals).as_str(), "nl");

        let signals = LanguageSignals::new().with_path("/blog").with_query("nb").with_stored("nl");
        assert_eq!(detector.resolve(&signals).as_str(), "nb");

        let signals = LanguageSignals::new().with_query("fr").with_stored("nl");
        assert_eq!(detector.resolve(&signals).as_str(), "nl");
    }

    #[test]
    fn test_unknown_signals_fall_back_to_default() {
        let detector = detector();
        let signals = LanguageSignals::new().with_path("/fr/x").with_query("de").with_stored("xx");
        assert_eq!(detector.resolve(&signals).as_str(), "en");
        assert_eq!(detector.resolve(&LanguageSignals::new()).as_str(), "en");
    }

    #[test]
    fn test_detect_modes_are_independent() {
        let detector = detector();
        let page = url("https://example.com/nb/about?lang=nl");
        assert_eq!(detector.detect_from_url(&page, DetectionMode::Path).as_str(), "nb");
        assert_eq!(detector.detect_from_url(&page, DetectionMode::Query).as_str(), "nl");

        let plain = url("https://example.com/about");
        assert_eq!(detector.detect_from_url(&plain, DetectionMode::Path).as_str(), "en");
        assert_eq!(detector.detect_from_url(&plain, DetectionMode::Query).as_str(), "en");
    }

    #[test]
    fn test_current_language_uses_query_then_storage() {
        let detector = detector();
        let storage = MemoryStorage::new();
        storage.set("language", "nl");

        let page = url("https://example.com/?lang=nb");
        assert_eq!(detector.current_language(Some(&page), &storage).as_str(), "nb");

        let page = url("https://example.com/?lang=zz");
        assert_eq!(detector.current_language(Some(&page), &storage).as_str(), "nl");
        assert_eq!(detector.current_language(None, &NoStorage).as_str(), "en");
    }

    #[test]
    fn test_build_time_language() {
        let detector = detector();
        assert_eq!(detector.build_time_language(None).as_str(), "en");
        let page = url("https://example.com/page?lang=nb");
        assert_eq!(detector.build_time_language(Some(&page)).as_str(), "nb");
    }

    #[test]
    fn test_custom_query_parameter() {
        let detector = detector().with_query_parameter("locale");
        let page = url("https://example.com/?lang=nb&locale=nl");
        assert_eq!(detector.detect_from_url(&page, DetectionMode::Query).as_str(), "nl");
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let detector = detector();
        let storage = MemoryStorage::new();
        let nb = detector.languages().get("nb").unwrap();
        let mut page = url("https://example.com/about?page=2&lang=en&lang=nl#top");

        detector.set_language(&nb, &storage, Some(&mut page));
        let first = page.to_string();
        detector.set_language(&nb, &storage, Some(&mut page));

        assert_eq!(page.to_string(), first);
        assert_eq!(first, "https://example.com/about?page=2&lang=nb#top");
        assert_eq!(storage.get("language").as_deref(), Some("nb"));
    }

    #[test]
    fn test_set_language_appends_missing_parameter() {
        let detector = detector();
        let nl = detector.languages().get("nl").unwrap();
        let mut page = url("https://example.com/about");
        detector.set_language(&nl, &NoStorage, Some(&mut page));
        assert_eq!(page.query(), Some("lang=nl"));
    }
}
