use std::collections::HashSet;
use std::fs;

use crate::theme::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::theme::parsing::split_config_line;
use crate::theme::paths::{default_settings_path, resolve_settings_config_path};
use crate::theme::types::Settings;

/// What: Ensure all expected settings keys exist in `settings.conf`, appending defaults as needed.
///
/// Inputs:
/// - `prefs`: Current in-memory settings whose values seed the file when keys are missing.
///
/// Output:
/// - None.
///
/// Details:
/// - Preserves existing lines and comments while adding only absent keys.
/// - Creates the settings file from the skeleton when it is missing or empty.
/// - Write failures are logged and otherwise ignored.
pub fn ensure_settings_keys_present(prefs: &Settings) {
    let p = resolve_settings_config_path().unwrap_or_else(default_settings_path);
    if let Some(dir) = p.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let existing = fs::read_to_string(&p).unwrap_or_default();
    let created_new = existing.trim().is_empty();
    let mut lines: Vec<String> = if created_new {
        SETTINGS_SKELETON_CONTENT.lines().map(str::to_string).collect()
    } else {
        existing.lines().map(str::to_string).collect()
    };

    let have: HashSet<String> = lines
        .iter()
        .filter_map(|l| split_config_line(l).map(|(k, _)| k))
        .collect();
    let pairs: [(&str, String); 7] = [
        ("leaderboard_size", prefs.leaderboard_size.to_string()),
        ("default_mode", prefs.default_mode.as_key().to_string()),
        ("catalog_path", prefs.catalog_path.clone()),
        ("toast_duration_secs", prefs.toast_duration_secs.to_string()),
        ("locale", prefs.locale.clone()),
        (
            "show_keybinds_footer",
            prefs.show_keybinds_footer.to_string(),
        ),
        ("details_pane_pct", prefs.details_pane_pct.to_string()),
    ];

    let mut appended = 0usize;
    for (k, v) in pairs {
        if !have.contains(k) {
            lines.push(format!("{k} = {v}"));
            appended += 1;
        }
    }

    if !created_new && appended == 0 {
        return;
    }
    let mut out = lines.join("\n");
    out.push('\n');
    match fs::write(&p, out) {
        Ok(()) => tracing::debug!(
            path = %p.display(),
            created_new,
            appended,
            "[Config] settings.conf ensured"
        ),
        Err(e) => tracing::warn!(
            path = %p.display(),
            error = %e,
            "[Config] failed to write settings.conf"
        ),
    }
}
