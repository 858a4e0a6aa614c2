//! Flat translation maps and key lookup.

use std::collections::HashMap;

/// Locale strings keyed by their dotted YAML path (`app.toasts.ip_copied`).
pub type TranslationMap = HashMap<String, String>;

/// What: Resolve `key` against the active locale, then English.
///
/// Inputs:
/// - `key`: Dotted key such as `app.titles.catalog`
/// - `active`: Strings of the resolved locale
/// - `english`: en-US strings
///
/// Output:
/// - The first hit, or `key` itself so a missing string stays visible on screen
pub fn translate_with_fallback(key: &str, active: &TranslationMap, english: &TranslationMap) -> String {
    if let Some(s) = active.get(key) {
        return s.clone();
    }
    match english.get(key) {
        Some(s) => {
            tracing::debug!(key, "[i18n] key missing in active locale, using English");
            s.clone()
        }
        None => {
            tracing::debug!(key, "[i18n] missing translation key");
            key.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> TranslationMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    /// What: Active locale wins, English fills gaps, unknown keys echo back
    ///
    /// - Input: ru-RU map with the catalog title; English map with catalog and help titles
    /// - Output: "Каталог", "Help", then the raw key
    fn translate_fallback_chain() {
        let ru = map(&[("app.titles.catalog", "Каталог")]);
        let en = map(&[("app.titles.catalog", "Catalog"), ("app.titles.help", "Help")]);
        assert_eq!(translate_with_fallback("app.titles.catalog", &ru, &en), "Каталог");
        assert_eq!(translate_with_fallback("app.titles.help", &ru, &en), "Help");
        assert_eq!(
            translate_with_fallback("app.labels.nope", &ru, &en),
            "app.labels.nope"
        );
    }
}
