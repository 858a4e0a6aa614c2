//! Small helpers shared by the UI, events and CLI layers.

pub mod clipboard;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment variable that disables terminal setup and external tools.
pub const HEADLESS_ENV: &str = "CRAFTLIST_TEST_HEADLESS";

/// What: Whether the process runs headless (tests, CI).
///
/// Output:
/// - `true` when `CRAFTLIST_TEST_HEADLESS=1`
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Truncate a string to a display width, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit (may contain wide or Cyrillic characters)
/// - `max_width`: Available terminal cells
///
/// Output:
/// - `s` unchanged when it fits, otherwise a prefix plus `…` no wider than `max_width`
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Pad a string with spaces on the right to a display width.
///
/// Inputs:
/// - `s`: Text to pad (truncated first when too wide)
/// - `width`: Target width in terminal cells
///
/// Output:
/// - String occupying exactly `width` cells
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let w = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// What: Format a server score for display.
///
/// Inputs:
/// - `score`: `rating * votes`
///
/// Output:
/// - One decimal, dropped when it rounds to `.0`
///
/// Details:
/// - Rounding happens before the integral check, so float noise such as
///   `434.99999999999994` prints as `435`.
#[must_use]
pub fn format_score(score: f64) -> String {
    let s = format!("{score:.1}");
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects display width, including Cyrillic text
    ///
    /// - Input: Short text, long Latin text, long Cyrillic text, zero width
    /// - Output: Unchanged, cut with ellipsis, cut with ellipsis, empty
    fn util_truncate_to_width() {
        assert_eq!(truncate_to_width("SkyBlock", 10), "SkyBlock");
        assert_eq!(truncate_to_width("SkyBlock Heaven", 6), "SkyBl…");
        let cut = truncate_to_width("Лучший сервер", 7);
        assert_eq!(cut, "Лучший…");
        assert!(cut.width() <= 7);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    /// What: Padding fills to the exact width
    ///
    /// - Input: "pvp" padded to 6, long text padded to 4
    /// - Output: 6 and 4 cell strings
    fn util_pad_to_width() {
        assert_eq!(pad_to_width("pvp", 6), "pvp   ");
        assert_eq!(pad_to_width("minigames", 4).width(), 4);
    }

    #[test]
    /// What: Scores print without noise decimals
    ///
    /// - Input: 4.9 * 3120, 4.5 * 3, 4.35 * 100 (just below 435), 13.96, 0
    /// - Output: "15288", "13.5", "435", "14", "0"
    fn util_format_score() {
        assert_eq!(format_score(4.9 * 3120.0), "15288");
        assert_eq!(format_score(4.5 * 3.0), "13.5");
        assert!((4.35_f64 * 100.0).fract() > 0.5);
        assert_eq!(format_score(4.35 * 100.0), "435");
        assert_eq!(format_score(13.96), "14");
        assert_eq!(format_score(0.0), "0");
    }
}
