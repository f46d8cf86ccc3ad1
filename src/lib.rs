//! site-i18n
//!
//! Translation helpers for server-rendered and static websites: detect the
//! visitor's language from the URL or a stored preference, resolve translation
//! keys with fallback to the default language, and build language-prefixed
//! links.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use i18n::{I18n, LanguageDetector, LanguageSet, LanguageTag, Resolver, TranslationTable};
pub use utils::errors::{I18nError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
