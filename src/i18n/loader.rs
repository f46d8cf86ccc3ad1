//! Translation loading
//!
//! Reads `<dir>/<language>.json` for every supported language, or the copies
//! compiled into the binary. The default language is mandatory; any other
//! language that is missing or broken is simply left out of the table, so
//! lookups for it fall back to the default language.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};
use super::language::LanguageSet;
use super::table::{count_keys, parse_translation_map, TranslationTable};
use crate::utils::errors::{I18nError, Result};

/// Translation files shipped with the crate
const BUNDLED_TRANSLATIONS: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("nb", include_str!("../../translations/nb.json")),
    ("nl", include_str!("../../translations/nl.json")),
];

/// Loads translation tables from a directory of JSON files
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    directory: PathBuf,
}

impl TranslationLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Load all translation files for the supported languages
    pub async fn load(&self, languages: &LanguageSet) -> Result<TranslationTable> {
        let mut table = TranslationTable::new();

        for language in languages.iter() {
            let file_path = self.directory.join(format!("{}.json", language));
            let is_default = languages.is_default(language);

            let exists = match fs::try_exists(&file_path).await {
                Ok(exists) => exists,
                Err(e) => {
                    error!("Failed to check translation file {}: {}", file_path.display(), e);
                    if is_default {
                        return Err(e.into());
                    }
                    continue;
                }
            };

            if !exists {
                warn!("Translation file not found: {}", file_path.display());
                if is_default {
                    return Err(I18nError::Config(format!(
                        "Translation file for the default language not found: {}",
                        file_path.display()
                    )));
                }
                continue;
            }

            match load_language_file(&file_path, language.as_str()).await {
                Ok(map) => {
                    debug!("Loaded {} translation keys for {}", count_keys(&map), language);
                    table.insert(language.clone(), map);
                    info!("Loaded translations for language: {}", language);
                }
                Err(e) => {
                    error!("Failed to load translations for {}: {}", language, e);
                    if is_default {
                        return Err(I18nError::Config(format!(
                            "Failed to load default language translations: {}",
                            e
                        )));
                    }
                }
            }
        }

        Ok(table)
    }
}

/// Load a single language file
async fn load_language_file(file_path: &Path, language: &str) -> Result<super::table::TranslationMap> {
    let content = fs::read_to_string(file_path).await?;
    parse_translation_map(language, &content)
}

/// Translation table built from the files compiled into the crate
pub fn bundled_translations(languages: &LanguageSet) -> Result<TranslationTable> {
    TranslationTable::from_json_bundles(languages, BUNDLED_TRANSLATIONS)
}
