//! Shared helpers for integration tests
//!
//! Builds language sets and translation tables the way a site would at
//! start-up, from inline JSON bundles or temporary translation directories.

#![allow(dead_code)]

use std::sync::Once;
use site_i18n::i18n::{LanguageSet, LanguageTag, Resolver, TranslationTable};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub const EN_JSON: &str = r#"{
    "greeting": "Hello {name}",
    "nav.home": "Home",
    "dialog": { "title": "Hi", "body": "You have {count} items" },
    "taglines": ["A", "B", "C"],
    "footer": { "legal": "All rights reserved" }
}"#;

pub const NB_JSON: &str = r#"{
    "greeting": "Hei {name}",
    "dialog": { "title": "Hei" },
    "taglines": ["X", "Y"]
}"#;

/// The en/nb/nl site with English as default
pub fn site_languages() -> LanguageSet {
    LanguageSet::new(["en", "nb", "nl"], "en")
        .expect("valid language set")
        .with_name("en", "English")
        .with_name("nb", "Norsk")
        .with_name("nl", "Nederlands")
}

/// Resolver over English and partial Norwegian tables; Dutch has no table
pub fn site_resolver() -> Resolver {
    init_test_env();
    let languages = site_languages();
    let table = TranslationTable::from_json_bundles(&languages, &[("en", EN_JSON), ("nb", NB_JSON)])
        .expect("valid bundles");
    Resolver::new(languages, table)
}

pub fn tag(languages: &LanguageSet, code: &str) -> LanguageTag {
    languages.get(code).unwrap_or_else(|| panic!("unsupported test language {}", code))
}

/// Write translation files into a fresh temporary directory
pub fn translations_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (code, content) in files {
        std::fs::write(dir.path().join(format!("{}.json", code)), content).expect("write translation file");
    }
    dir
}
