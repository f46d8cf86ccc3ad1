//! Placeholder substitution for translated templates

use std::collections::HashMap;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Replace every `{name}` whose name is in `params` with its value.
///
/// Single pass over the template: substituted values are never scanned again,
/// and placeholders without a parameter are kept verbatim.
pub fn format_message(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after
            .find('}')
            .and_then(|close| params.get(&after[..close]).map(|value| (close, value)));

        match replacement {
            Some((close, value)) => {
                result.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Build parameters from `(name, value)` pairs
pub fn params<I, K, V>(pairs: I) -> TranslationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
