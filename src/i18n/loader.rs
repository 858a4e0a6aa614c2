//! Locale parsing for the YAML files embedded in the binary.

use crate::i18n::translations::TranslationMap;

/// Locale code used when nothing else resolves, and as the fallback map.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locale files compiled into the binary: `(code, yaml)`.
const EMBEDDED_LOCALES: [(&str, &str); 2] = [
    (
        "en-US",
        include_str!("../../config/locales/en-US.yml"),
    ),
    (
        "ru-RU",
        include_str!("../../config/locales/ru-RU.yml"),
    ),
];

/// What: List the locale codes that ship with the binary.
///
/// Output:
/// - Locale codes in declaration order (`en-US` first).
#[must_use]
pub fn available_locales() -> Vec<&'static str> {
    EMBEDDED_LOCALES.iter().map(|(code, _)| *code).collect()
}

/// What: Load an embedded locale into a flat `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "ru-RU")
///
/// Output:
/// - Flattened translations or an error message
///
/// # Errors
/// - Returns `Err` when the locale is not embedded or its YAML does not parse
pub fn load_locale(locale: &str) -> Result<TranslationMap, String> {
    let Some((_, content)) = EMBEDDED_LOCALES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(locale))
    else {
        return Err(format!("Locale '{locale}' is not available"));
    };
    parse_locale_yaml(content).map_err(|e| format!("Failed to parse locale '{locale}': {e}"))
}

/// What: Turn one locale file into a flat key map.
///
/// Inputs:
/// - `yaml`: File content, rooted at the locale code (`ru-RU:`)
///
/// Output:
/// - Leaf scalars keyed by their dotted path below the locale root
///
/// # Errors
/// - Returns `Err` when the content is not valid YAML
pub fn parse_locale_yaml(yaml: &str) -> Result<TranslationMap, String> {
    use serde_norway::Value;

    let doc: Value = serde_norway::from_str(yaml).map_err(|e| format!("invalid YAML: {e}"))?;
    let mut out = TranslationMap::new();
    // Depth-first walk; the locale root itself contributes no key segment.
    let mut stack: Vec<(String, &Value)> = match doc.as_mapping() {
        Some(root) => root.iter().map(|(_, v)| (String::new(), v)).collect(),
        None => Vec::new(),
    };
    while let Some((path, value)) = stack.pop() {
        let leaf = match value {
            Value::Mapping(children) => {
                for (k, child) in children {
                    let Some(k) = k.as_str() else { continue };
                    let child_path = if path.is_empty() {
                        k.to_string()
                    } else {
                        format!("{path}.{k}")
                    };
                    stack.push((child_path, child));
                }
                continue;
            }
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        out.insert(path, leaf);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Nested YAML flattens into dot keys under the locale root
    ///
    /// - Input: Two-level mapping with a string and a number
    /// - Output: `app.titles.catalog` and `app.limits.top` keys
    fn parse_locale_yaml_flattens() {
        let yaml = "xx-XX:\n  app:\n    titles:\n      catalog: \"Cat\"\n    limits:\n      top: 10\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(map.get("app.titles.catalog").map(String::as_str), Some("Cat"));
        assert_eq!(map.get("app.limits.top").map(String::as_str), Some("10"));
        assert!(parse_locale_yaml("a: [unclosed").is_err());
    }

    #[test]
    /// What: Embedded locales expose the same keys
    ///
    /// - Input: en-US and ru-RU bundles
    /// - Output: Both load; every English key exists in Russian
    fn embedded_locales_are_complete() {
        let en = load_locale("en-US").expect("en-US embedded");
        let ru = load_locale("ru-RU").expect("ru-RU embedded");
        assert!(en.contains_key("app.toasts.ip_copied"));
        for key in en.keys() {
            assert!(ru.contains_key(key), "ru-RU missing {key}");
        }
        assert_eq!(
            ru.get("app.toasts.ip_copied").map(String::as_str),
            Some("IP скопирован! {} добавлен в буфер обмена")
        );
        assert!(load_locale("de-DE").is_err());
    }
}
