//! Internationalization module
//!
//! Language detection, translation lookup with fallback, placeholder
//! substitution and language-prefixed URLs. [`I18n`] wires the pieces
//! together from configuration; each piece is also usable on its own.

pub mod detector;
pub mod format;
pub mod language;
pub mod loader;
pub mod localize;
pub mod resolver;
pub mod storage;
pub mod table;

// Re-export commonly used i18n components
pub use detector::{DetectionMode, LanguageDetector, LanguageSignals};
pub use format::{format_message, params, TranslationParams};
pub use language::{LanguageSet, LanguageTag};
pub use loader::{bundled_translations, TranslationLoader};
pub use localize::{alternate_paths, localize_path, localize_url};
pub use resolver::{pick_localized, LanguageStats, Resolver, TranslationStats, Translator};
pub use storage::{FileStorage, MemoryStorage, NoStorage, PreferenceStorage};
pub use table::{TranslationMap, TranslationProvider, TranslationTable, TranslationValue};

use tracing::info;
use crate::config::I18nConfig;
use crate::utils::errors::Result;

/// Detector and resolver sharing one language set
#[derive(Debug, Clone)]
pub struct I18n {
    detector: LanguageDetector,
    resolver: Resolver,
}

impl I18n {
    pub fn new(detector: LanguageDetector, table: TranslationTable) -> Self {
        let resolver = Resolver::new(detector.languages().clone(), table);
        Self { detector, resolver }
    }

    /// Load translations from the configured directory
    pub async fn load(config: &I18nConfig) -> Result<Self> {
        let detector = LanguageDetector::from_config(config)?;
        let table = TranslationLoader::new(&config.translations_dir)
            .load(detector.languages())
            .await?;
        info!(languages = detector.languages().len(), "Translations loaded");
        Ok(Self::new(detector, table))
    }

    /// Use the translations compiled into the crate
    pub fn bundled(config: &I18nConfig) -> Result<Self> {
        let detector = LanguageDetector::from_config(config)?;
        let table = bundled_translations(detector.languages())?;
        Ok(Self::new(detector, table))
    }

    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn languages(&self) -> &LanguageSet {
        self.detector.languages()
    }

    /// Get a translated message
    pub fn t(&self, key: &str, language: &LanguageTag, params: Option<&TranslationParams>) -> String {
        match params {
            Some(params) => self.resolver.resolve_with(language, key, params),
            None => self.resolver.resolve(language, key),
        }
    }

    /// Path of the same page in `target` language
    pub fn localize(&self, path: &str, target: &LanguageTag, current: &LanguageTag) -> String {
        localize_path(self.languages(), path, target, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use url::Url;

    #[test]
    fn test_bundled_pipeline() {
        let i18n = I18n::bundled(&Settings::default().i18n).unwrap();
        let page = Url::parse("https://example.com/nb/shop").unwrap();
        let language = i18n.detector().detect_from_url(&page, DetectionMode::Path);

        assert_eq!(language.as_str(), "nb");
        assert_eq!(i18n.t("nav.shop", &language, None), "Butikk");
        assert_eq!(
            i18n.t("language.switch", &language, Some(&params([("language", "English")]))),
            "Bytt til English"
        );

        let en = i18n.languages().get("en").unwrap();
        assert_eq!(i18n.localize(page.path(), &en, &language), "/shop");
    }

    #[test]
    fn test_bundled_secondary_falls_back() {
        let i18n = I18n::bundled(&Settings::default().i18n).unwrap();
        let nl = i18n.languages().get("nl").unwrap();
        assert_eq!(i18n.t("site.title", &nl, None), "Tidewater Studio");
        assert_eq!(i18n.resolver().taglines(&nl).len(), 3);
    }
}
