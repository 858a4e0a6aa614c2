//! Locale resolution: settings, then system, then the default.

use crate::i18n::detection::detect_system_locale;
use crate::i18n::loader::{DEFAULT_LOCALE, available_locales};

/// What: Resolve the effective locale to use.
///
/// Inputs:
/// - `settings_locale`: Locale from settings.conf (empty means auto-detect)
///
/// Output:
/// - A locale code that is embedded in the binary
///
/// Details:
/// - Priority: `settings_locale` -> system locale -> `en-US`
/// - Language-only or foreign-region codes map to the bundled locale with the same language
#[must_use]
pub fn resolve_locale(settings_locale: &str) -> String {
    let trimmed = settings_locale.trim();
    if !trimmed.is_empty() {
        if let Some(found) = match_available(trimmed) {
            return found;
        }
        tracing::warn!(
            locale = trimmed,
            "unsupported locale in settings.conf; using system locale or default"
        );
    }
    detect_system_locale()
        .and_then(|sys| match_available(&sys))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// What: Map a requested locale onto a bundled one.
///
/// Inputs:
/// - `requested`: Locale code such as `ru-RU`, `ru`, or `ru-UA`
///
/// Output:
/// - `Some(code)` of an exact or same-language match, `None` otherwise
fn match_available(requested: &str) -> Option<String> {
    let available = available_locales();
    if let Some(exact) = available
        .iter()
        .find(|code| code.eq_ignore_ascii_case(requested))
    {
        return Some((*exact).to_string());
    }
    let language = requested.split('-').next()?.to_lowercase();
    available
        .iter()
        .find(|code| code.split('-').next().is_some_and(|l| l == language))
        .map(|code| (*code).to_string())
}
