//! Translation resolution
//!
//! The resolver turns `(language, key, params)` into display text. Lookups
//! fall back from the requested language to the default language and finally
//! to the key itself, so callers always get a string back.

use serde::Serialize;
use super::format::{format_message, TranslationParams};
use super::language::{LanguageSet, LanguageTag};
use super::table::{self, TranslationProvider, TranslationTable, TranslationValue};
use crate::utils::logging::{log_missing_translation, log_translation_fallback};

/// Key holding the rotating site taglines
pub const TAGLINES_KEY: &str = "taglines";

/// Resolves translation keys against a provider
#[derive(Debug, Clone)]
pub struct Resolver<P = TranslationTable> {
    languages: LanguageSet,
    provider: P,
}

impl<P: TranslationProvider> Resolver<P> {
    pub fn new(languages: LanguageSet, provider: P) -> Self {
        Self { languages, provider }
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a key to display text.
    ///
    /// Lists resolve to their first item (`""` when empty); a key found in no
    /// table resolves to itself.
    pub fn resolve(&self, language: &LanguageTag, key: &str) -> String {
        self.resolve_inner(language, key, None)
    }

    /// Resolve a key and substitute `{name}` placeholders in text entries
    pub fn resolve_with(&self, language: &LanguageTag, key: &str, params: &TranslationParams) -> String {
        self.resolve_inner(language, key, Some(params))
    }

    fn resolve_inner(&self, language: &LanguageTag, key: &str, params: Option<&TranslationParams>) -> String {
        match self.find(language, key) {
            Some(TranslationValue::Text(text)) => match params {
                Some(params) => format_message(text, params),
                None => text.clone(),
            },
            Some(TranslationValue::List(items)) => items.first().cloned().unwrap_or_default(),
            _ => {
                log_missing_translation(key, language.as_str());
                key.to_string()
            }
        }
    }

    /// Every item of a list entry, without reducing it to one.
    ///
    /// Falls back to the default language's list, then to an empty list.
    pub fn get_all(&self, language: &LanguageTag, key: &str) -> Vec<String> {
        self.list_in(language, key)
            .or_else(|| self.list_in(self.languages.default_language(), key))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn taglines(&self, language: &LanguageTag) -> Vec<String> {
        self.get_all(language, TAGLINES_KEY)
    }

    /// Bind a language for repeated lookups
    pub fn translator(&self, language: LanguageTag) -> Translator<'_, P> {
        Translator {
            resolver: self,
            language,
        }
    }

    /// Whether `language` itself (without fallback) has a usable entry for `key`
    pub fn has_key(&self, language: &LanguageTag, key: &str) -> bool {
        self.usable_in(language, key).is_some()
    }

    fn find(&self, language: &LanguageTag, key: &str) -> Option<&TranslationValue> {
        if let Some(value) = self.usable_in(language, key) {
            return Some(value);
        }

        let default = self.languages.default_language();
        if language == default {
            return None;
        }

        let value = self.usable_in(default, key);
        if value.is_some() {
            log_translation_fallback(key, language.as_str(), default.as_str());
        }
        value
    }

    /// Entry for `key` that counts as a translation: non-empty text or a list
    fn usable_in(&self, language: &LanguageTag, key: &str) -> Option<&TranslationValue> {
        let map = self.provider.table(language)?;
        table::lookup(map, key).filter(|value| match value {
            TranslationValue::Text(text) => !text.is_empty(),
            TranslationValue::List(_) => true,
            TranslationValue::Nested(_) => false,
        })
    }

    fn list_in(&self, language: &LanguageTag, key: &str) -> Option<&[String]> {
        let map = self.provider.table(language)?;
        table::lookup(map, key).and_then(TranslationValue::as_list)
    }

    /// Leaf key counts for every loaded language, in configuration order
    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for language in self.languages.iter() {
            let Some(map) = self.provider.table(language) else {
                continue;
            };
            let key_count = table::count_keys(map);
            stats.languages.push(LanguageStats {
                code: language.to_string(),
                key_count,
                missing_keys: self.missing_keys(language).len(),
            });
            if self.languages.is_default(language) {
                stats.total_keys = key_count;
            }
        }

        stats
    }

    /// Default-language keys that `language` does not translate itself
    pub fn missing_keys(&self, language: &LanguageTag) -> Vec<String> {
        let Some(default_map) = self.provider.table(self.languages.default_language()) else {
            return Vec::new();
        };

        table::leaf_keys(default_map)
            .into_iter()
            .filter(|key| !self.has_key(language, key))
            .collect()
    }
}

/// Lookups bound to one language
#[derive(Debug, Clone)]
pub struct Translator<'a, P = TranslationTable> {
    resolver: &'a Resolver<P>,
    language: LanguageTag,
}

impl<'a, P: TranslationProvider> Translator<'a, P> {
    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.resolver.resolve(&self.language, key)
    }

    pub fn t_with(&self, key: &str, params: &TranslationParams) -> String {
        self.resolver.resolve_with(&self.language, key, params)
    }

    pub fn all(&self, key: &str) -> Vec<String> {
        self.resolver.get_all(&self.language, key)
    }
}

/// Choose among inline `(language code, text)` variants.
///
/// Prefers `language`, then `fallback`, skipping empty texts; otherwise the
/// first variant whatever its language.
pub fn pick_localized<'a>(
    variants: &[(&str, &'a str)],
    language: &LanguageTag,
    fallback: &LanguageTag,
) -> Option<&'a str> {
    let non_empty = |wanted: &LanguageTag| {
        variants
            .iter()
            .find(|(code, text)| *code == wanted.as_str() && !text.is_empty())
            .map(|(_, text)| *text)
    };

    non_empty(language)
        .or_else(|| non_empty(fallback))
        .or_else(|| variants.first().map(|(_, text)| *text))
}

/// Translation statistics
#[derive(Debug, Clone, Serialize)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    /// Leaf keys in the default language
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
    pub missing_keys: usize,
}
