use std::env;

use crate::theme::types::Settings;

/// What: Normalize settings values parsed from configuration files.
///
/// Inputs:
/// - `settings`: Mutable reference to `Settings` to normalize in-place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `leaderboard_size` 0 falls back to the default; capped at 100.
/// - `toast_duration_secs` 0 falls back to 2; capped at 60.
/// - `details_pane_pct` is clamped to 20..=70.
/// - `catalog_path` is trimmed and a leading `~/` expands to `$HOME`.
pub fn normalize(settings: &mut Settings) {
    if settings.leaderboard_size == 0 {
        settings.leaderboard_size = crate::logic::query::DEFAULT_LEADERBOARD_SIZE;
    }
    settings.leaderboard_size = settings.leaderboard_size.min(100);
    if settings.toast_duration_secs == 0 {
        settings.toast_duration_secs = 2;
    }
    settings.toast_duration_secs = settings.toast_duration_secs.min(60);
    settings.details_pane_pct = settings.details_pane_pct.clamp(20, 70);
    settings.locale = settings.locale.trim().to_string();

    let path = settings.catalog_path.trim();
    settings.catalog_path = match (path.strip_prefix("~/"), env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{rest}", home.trim_end_matches('/')),
        _ => path.to_string(),
    };
}
