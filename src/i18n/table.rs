//! Translation tables
//!
//! A translation table maps each language to a tree of entries. Entries are
//! plain text, an ordered list of texts, or a nested map of further entries.

use std::collections::{BTreeMap, HashMap};
use serde_json::Value;
use tracing::debug;
use super::language::{LanguageSet, LanguageTag};
use crate::utils::errors::{I18nError, Result};

/// Nested key → entry mapping for one language
pub type TranslationMap = BTreeMap<String, TranslationValue>;

/// A single entry in a translation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
    Nested(TranslationMap),
}

impl TranslationValue {
    /// Convert a JSON value into a translation entry.
    ///
    /// Numbers and booleans become text, `null` is absent, and list elements
    /// that are neither text nor scalar are dropped.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(TranslationValue::Text(text)),
            Value::Bool(_) | Value::Number(_) => Some(TranslationValue::Text(value.to_string())),
            Value::Array(items) => Some(TranslationValue::List(
                items.into_iter().filter_map(scalar_text).collect(),
            )),
            Value::Object(object) => Some(TranslationValue::Nested(map_from_json(object))),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TranslationValue::List(items) => Some(items),
            _ => None,
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}

fn map_from_json(object: serde_json::Map<String, Value>) -> TranslationMap {
    object
        .into_iter()
        .filter_map(|(key, value)| TranslationValue::from_json(value).map(|entry| (key, entry)))
        .collect()
}

/// Parse one language's translation file contents
pub fn parse_translation_map(language: &str, content: &str) -> Result<TranslationMap> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(object) => Ok(map_from_json(object)),
        _ => Err(I18nError::InvalidTranslationFile {
            language: language.to_string(),
            reason: "top-level value must be a JSON object".to_string(),
        }),
    }
}

/// Look up a key in one language's tree.
///
/// A key stored verbatim at the top level wins; otherwise the key is split on
/// `.` and each segment descends one nested map. Descending into anything that
/// is not a nested map yields `None`.
pub fn lookup<'a>(map: &'a TranslationMap, key: &str) -> Option<&'a TranslationValue> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = map.get(first)?;
    for segment in segments {
        match current {
            TranslationValue::Nested(children) => current = children.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Source of per-language translation trees
pub trait TranslationProvider: Send + Sync {
    /// The tree for a language, if one was loaded
    fn table(&self, language: &LanguageTag) -> Option<&TranslationMap>;
}

/// In-memory translation table for every loaded language
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    translations: HashMap<LanguageTag, TranslationMap>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(language code, JSON text)` pairs.
    ///
    /// Codes outside the language set are skipped. A missing or broken bundle
    /// for the default language is an error; other broken bundles are left out.
    pub fn from_json_bundles(languages: &LanguageSet, bundles: &[(&str, &str)]) -> Result<Self> {
        let mut table = Self::new();
        for (code, content) in bundles {
            let Some(tag) = languages.get(code) else {
                debug!(language = code, "Skipping bundle for unsupported language");
                continue;
            };

            match parse_translation_map(code, content) {
                Ok(map) => table.insert(tag, map),
                Err(e) if languages.is_default(&tag) => return Err(e),
                Err(e) => {
                    tracing::error!(language = code, error = %e, "Failed to parse translation bundle");
                }
            }
        }

        if !table.contains_language(languages.default_language()) {
            return Err(I18nError::Config(format!(
                "No translation bundle for the default language: {}",
                languages.default_language()
            )));
        }
        Ok(table)
    }

    pub fn insert(&mut self, language: LanguageTag, map: TranslationMap) {
        self.translations.insert(language, map);
    }

    pub fn contains_language(&self, language: &LanguageTag) -> bool {
        self.translations.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.translations.keys()
    }
}

impl TranslationProvider for TranslationTable {
    fn table(&self, language: &LanguageTag) -> Option<&TranslationMap> {
        self.translations.get(language)
    }
}

/// Recursively count leaf entries (text or list)
pub fn count_keys(map: &TranslationMap) -> usize {
    map.values()
        .map(|value| match value {
            TranslationValue::Nested(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Dotted paths of every leaf entry, in key order
pub fn leaf_keys(map: &TranslationMap) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaf_keys(map, "", &mut keys);
    keys
}

fn collect_leaf_keys(map: &TranslationMap, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            TranslationValue::Nested(nested) => collect_leaf_keys(nested, &path, keys),
            _ => keys.push(path),
        }
    }
}
