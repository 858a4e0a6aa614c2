use crate::state::ModeFilter;
use crate::theme::parsing::{parse_bool, split_config_line};
use crate::theme::types::Settings;

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are ignored; unparsable values keep the current value.
/// - An empty `default_mode` leaves the filter unset (`all`).
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        match key.as_str() {
            "leaderboard_size" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.leaderboard_size = v;
                }
            }
            "default_mode" => {
                if !val.is_empty() {
                    settings.default_mode = ModeFilter::parse(val);
                }
            }
            "catalog_path" => {
                settings.catalog_path = val.to_string();
            }
            "toast_duration_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.toast_duration_secs = v;
                }
            }
            "locale" => {
                settings.locale = val.to_string();
            }
            "show_keybinds_footer" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            "details_pane_pct" => {
                if let Ok(v) = val.parse::<u16>() {
                    settings.details_pane_pct = v;
                }
            }
            _ => {}
        }
    }
}
