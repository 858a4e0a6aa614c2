//! Internationalization for craftlist.
//!
//! Locale files live in `config/locales/{locale}.yml` and are compiled into the
//! binary. Nested YAML keys are flattened to dot notation, so
//!
//! ```yaml
//! app:
//!   titles:
//!     catalog: "Catalog"
//! ```
//!
//! is looked up as `app.titles.catalog`. Missing keys fall back to English and
//! then to the key itself.

mod detection;
mod loader;
mod resolver;
pub mod translations;

pub use detection::detect_system_locale;
pub use loader::{DEFAULT_LOCALE, available_locales, load_locale, parse_locale_yaml};
pub use resolver::resolve_locale;
pub use translations::{TranslationMap, translate_with_fallback};

/// What: Load the active and fallback translation maps for a locale setting.
///
/// Inputs:
/// - `settings_locale`: `locale` value from settings.conf (may be empty)
///
/// Output:
/// - `(resolved_code, translations, english_fallback)`
///
/// Details:
/// - Load failures are logged and yield empty maps so lookups echo keys.
#[must_use]
pub fn load_translations(settings_locale: &str) -> (String, TranslationMap, TranslationMap) {
    let locale = resolve_locale(settings_locale);
    let fallback = load_locale(DEFAULT_LOCALE).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load fallback locale");
        TranslationMap::new()
    });
    let translations = if locale == DEFAULT_LOCALE {
        fallback.clone()
    } else {
        load_locale(&locale).unwrap_or_else(|e| {
            tracing::warn!(locale = %locale, error = %e, "failed to load locale; using English");
            fallback.clone()
        })
    };
    tracing::info!(locale = %locale, keys = translations.len(), "locale loaded");
    (locale, translations, fallback)
}

/// What: Get a translation for a given key from `AppState`.
///
/// Inputs:
/// - `app`: `AppState` containing translation maps
/// - `key`: Dot-notation key (e.g., "app.titles.catalog")
///
/// Output:
/// - Translated string, or the key itself if translation not found
pub fn t(app: &crate::state::AppState, key: &str) -> String {
    translate_with_fallback(key, &app.translations, &app.translations_fallback)
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `app`: `AppState` containing translation maps
/// - `key`: Dot-notation key
/// - `args`: Values substituted for `{}` placeholders in order
///
/// Output:
/// - Formatted translated string
pub fn t_fmt(app: &crate::state::AppState, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(app, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get a translation with a single format argument.
pub fn t_fmt1<T: std::fmt::Display>(app: &crate::state::AppState, key: &str, arg: T) -> String {
    t_fmt(app, key, &[&arg])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Placeholder substitution uses the active locale
    ///
    /// - Input: Default state switched to ru-RU translations
    /// - Output: Russian toast text with the address inserted
    fn t_fmt1_substitutes_in_active_locale() {
        let mut app = crate::state::AppState::default();
        app.translations = load_locale("ru-RU").expect("ru-RU embedded");
        assert_eq!(
            t_fmt1(&app, "app.toasts.ip_copied", "sky.heaven.ru:25565"),
            "IP скопирован! sky.heaven.ru:25565 добавлен в буфер обмена"
        );
        assert_eq!(t(&app, "app.nope"), "app.nope");
    }
}
