//! Language-prefixed URL paths
//!
//! The default language lives at the root (`/about`); every other language
//! lives under its own prefix (`/nb/about`). Paths are opaque strings: no
//! percent-decoding and no special treatment of query strings or fragments.

use super::language::{LanguageSet, LanguageTag};

/// Rewrite `path` from `current` language to `target` language.
pub fn localize_url(path: &str, target: &str, current: &str, default: &str) -> String {
    let cleaned = if current != default {
        strip_language_prefix(path, current)
    } else {
        path
    };

    if target == default {
        return if cleaned.is_empty() && path != cleaned {
            "/".to_string()
        } else {
            cleaned.to_string()
        };
    }

    match cleaned {
        "" | "/" => format!("/{}", target),
        rest if rest.starts_with('/') => format!("/{}{}", target, rest),
        rest => format!("/{}/{}", target, rest),
    }
}

/// Remove a leading `/<language>` segment, leaving `""` for a bare prefix
fn strip_language_prefix<'a>(path: &'a str, language: &str) -> &'a str {
    match path.strip_prefix('/').and_then(|rest| rest.strip_prefix(language)) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Same as [`localize_url`] for validated tags
pub fn localize_path(languages: &LanguageSet, path: &str, target: &LanguageTag, current: &LanguageTag) -> String {
    localize_url(
        path,
        target.as_str(),
        current.as_str(),
        languages.default_language().as_str(),
    )
}

/// The page at `path` in every supported language, in configuration order
pub fn alternate_paths(languages: &LanguageSet, path: &str, current: &LanguageTag) -> Vec<(LanguageTag, String)> {
    languages
        .iter()
        .map(|target| (target.clone(), localize_path(languages, path, target, current)))
        .collect()
}
