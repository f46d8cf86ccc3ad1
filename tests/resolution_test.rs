//! Integration tests for the detect → resolve → localize pipeline

mod helpers;

use helpers::*;
use site_i18n::i18n::{
    localize_url, params, DetectionMode, LanguageDetector, LanguageSignals, MemoryStorage, NoStorage,
    PreferenceStorage, TranslationParams,
};
use url::Url;

#[test]
fn test_every_default_key_resolves_in_every_language() {
    let resolver = site_resolver();
    let keys = ["greeting", "nav.home", "dialog.title", "dialog.body", "taglines", "footer.legal"];

    for language in resolver.languages().iter() {
        for key in keys {
            let text = resolver.resolve(language, key);
            assert!(!text.is_empty(), "{} / {} resolved to empty", language, key);
            assert_ne!(text, key, "{} / {} fell through to the key", language, key);
        }
    }
}

#[test]
fn test_missing_key_everywhere_returns_key() {
    let resolver = site_resolver();
    for language in resolver.languages().iter() {
        assert_eq!(resolver.resolve(language, "missing.key"), "missing.key");
    }
}

#[test]
fn test_dotted_lookup_and_fallback() {
    let resolver = site_resolver();
    let languages = resolver.languages().clone();
    let (en, nb) = (tag(&languages, "en"), tag(&languages, "nb"));

    assert_eq!(resolver.resolve(&en, "dialog.title"), "Hi");
    assert_eq!(resolver.resolve(&nb, "dialog.title"), "Hei");
    assert_eq!(resolver.resolve(&nb, "dialog.body"), "You have {count} items");
    assert_eq!(resolver.resolve(&en, "dialog.missing"), "dialog.missing");
    assert_eq!(resolver.resolve(&nb, "dialog.missing"), "dialog.missing");
}

#[test]
fn test_interpolation_examples() {
    let resolver = site_resolver();
    let en = tag(resolver.languages(), "en");

    assert_eq!(resolver.resolve_with(&en, "greeting", &params([("name", "Ada")])), "Hello Ada");
    assert_eq!(resolver.resolve_with(&en, "greeting", &TranslationParams::new()), "Hello {name}");
    // Interpolation happens after fallback
    let nl = tag(resolver.languages(), "nl");
    assert_eq!(
        resolver.resolve_with(&nl, "dialog.body", &params([("count", "3")])),
        "You have 3 items"
    );
}

#[test]
fn test_array_reduction_and_get_all() {
    let resolver = site_resolver();
    let en = tag(resolver.languages(), "en");

    assert_eq!(resolver.resolve(&en, "taglines"), "A");
    assert_eq!(resolver.get_all(&en, "taglines"), vec!["A", "B", "C"]);
    // Interpolation does not apply to list entries
    assert_eq!(resolver.resolve_with(&en, "taglines", &params([("A", "z")])), "A");
}

#[test]
fn test_unknown_tags_detect_as_default() {
    let detector = LanguageDetector::new(site_languages());
    for code in ["fr", "", "EN", "en-US", "nb/", "xx"] {
        let signals = LanguageSignals::new().with_query(code).with_stored(code);
        assert_eq!(detector.resolve(&signals).as_str(), "en", "code {:?}", code);
    }
}

#[test]
fn test_localize_url_examples() {
    assert_eq!(localize_url("/about", "en", "en", "en"), "/about");
    assert_eq!(localize_url("/about", "fr", "en", "en"), "/fr/about");
}

#[test]
fn test_language_switch_round_trip() {
    let resolver = site_resolver();
    let detector = LanguageDetector::new(resolver.languages().clone());
    let storage = MemoryStorage::new();

    let mut page = Url::parse("https://example.com/shop?sort=price").unwrap();
    assert_eq!(detector.current_language(Some(&page), &storage).as_str(), "en");

    let nb = tag(resolver.languages(), "nb");
    detector.set_language(&nb, &storage, Some(&mut page));
    assert_eq!(page.as_str(), "https://example.com/shop?sort=price&lang=nb");
    assert_eq!(storage.get("language").as_deref(), Some("nb"));

    // The stored preference survives navigating to a URL without the parameter
    let next = Url::parse("https://example.com/contact").unwrap();
    let language = detector.current_language(Some(&next), &storage);
    assert_eq!(language.as_str(), "nb");
    assert_eq!(resolver.translator(language).t("greeting"), "Hei {name}");
}

#[test]
fn test_path_mode_pipeline() {
    let resolver = site_resolver();
    let detector = LanguageDetector::new(resolver.languages().clone());

    let page = Url::parse("https://example.com/nb/").unwrap();
    let language = detector.detect_from_url(&page, DetectionMode::Path);
    assert_eq!(resolver.resolve(&language, "nav.home"), "Home");
    assert_eq!(resolver.taglines(&language), vec!["X", "Y"]);

    let live = detector.current_language(Some(&page), &NoStorage);
    assert_eq!(live.as_str(), "en");
}
