//! System locale detection from POSIX environment variables.

use std::env;

/// What: Detect system locale from environment variables.
///
/// Output:
/// - `Some("ru-RU")`-style code, or `None` when nothing usable is set
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, then `LANG`
/// - `C` and `POSIX` carry no language and are skipped
pub fn detect_system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|raw| parse_locale_string(&raw))
}

/// What: Normalize a POSIX locale string.
///
/// Inputs:
/// - `locale_str`: e.g. `ru_RU.UTF-8`, `en_US@euro`, `de`
///
/// Output:
/// - `language[-REGION]` with encoding and modifier removed, or `None`
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    let base = trimmed.split(['.', '@']).next()?.trim();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    let mut parts = base.split(['_', '-']);
    let language = parts.next()?.to_lowercase();
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    match parts.next() {
        Some(region) if !region.is_empty() => Some(format!("{language}-{}", region.to_uppercase())),
        _ => Some(language),
    }
}
