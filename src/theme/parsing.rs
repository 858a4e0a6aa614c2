use ratatui::style::Color;

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].trim().parse::<u8>().ok()?;
    let g = parts[1].trim().parse::<u8>().ok()?;
    let b = parts[2].trim().parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}

/// What: Interpret a config value as a boolean flag.
///
/// Output: `true` for `true`, `1`, `yes` or `on` (any case); `false` otherwise.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Split a `key = value` config line.
///
/// Output:
/// - `Some((normalized_key, value))` for assignment lines; `None` for blanks, comments and junk.
///
/// Details:
/// - Keys are lowercased with `.`, `-` and spaces mapped to `_`.
/// - Inline comments are removed from the value.
pub(crate) fn split_config_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim())))
}

/// What: Remove a trailing `// ...` or `# ...` comment.
///
/// Details:
/// - A leading `#` is kept so hex colors survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Color literals in hex and decimal forms, with comments
    ///
    /// - Input: "#1e1e2e", "30,30,46 # dark", "300,0,0", "nope"
    /// - Output: RGB for the first two; None for out-of-range and junk
    fn parsing_color_values() {
        assert_eq!(parse_color_value("#1e1e2e"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(
            parse_color_value("30,30,46 # dark"),
            Some(Color::Rgb(30, 30, 46))
        );
        assert_eq!(parse_color_value("300,0,0"), None);
        assert_eq!(parse_color_value("nope"), None);
    }

    #[test]
    /// What: Config line splitting normalizes keys and strips comments
    ///
    /// - Input: Assignment with dashes and inline comment; comment line; line without '='
    /// - Output: Normalized pair; None; None
    fn parsing_split_config_line() {
        assert_eq!(
            split_config_line("  Leaderboard-Size = 5   # top five"),
            Some(("leaderboard_size".to_string(), "5"))
        );
        assert_eq!(split_config_line("# comment"), None);
        assert_eq!(split_config_line("garbage"), None);
        assert!(parse_bool("On"));
        assert!(!parse_bool("nah"));
    }
}
