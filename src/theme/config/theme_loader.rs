use std::fs;
use std::path::Path;

use crate::theme::config::skeletons::THEME_SKELETON_CONTENT;
use crate::theme::parsing::{parse_color_value, split_config_line};
use crate::theme::paths::{config_dir, resolve_theme_config_path};
use crate::theme::types::Theme;

/// What: Write the commented default `theme.conf` when no theme file exists yet.
///
/// Details:
/// - Existing files are never touched; write failures are logged.
pub fn ensure_theme_file_present() {
    if resolve_theme_config_path().is_some() {
        return;
    }
    let path = config_dir().join("theme.conf");
    match fs::write(&path, THEME_SKELETON_CONTENT) {
        Ok(()) => tracing::debug!(path = %path.display(), "[Config] theme.conf created"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "[Config] failed to write theme.conf"),
    }
}

/// What: Apply color overrides from a `theme.conf` file on top of the default palette.
///
/// Inputs:
/// - `path`: Theme file to read
///
/// Output:
/// - `Ok(Theme)` with every valid override applied; `Err` listing bad lines or the I/O error.
///
/// # Errors
/// - Returns `Err` when the file cannot be read, or when a line has an unknown key or bad color.
pub fn try_load_theme_with_diagnostics(path: &Path) -> Result<Theme, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{e}"))?;
    let mut theme = Theme::default();
    let mut errors: Vec<String> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        let line_no = idx + 1;
        let Some(color) = parse_color_value(val) else {
            errors.push(format!("- Invalid color for '{key}' on line {line_no}"));
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background" | "background_base" => &mut theme.base,
            "mantle" | "background_mantle" => &mut theme.mantle,
            "crust" | "background_crust" => &mut theme.crust,
            "surface1" | "surface_level1" => &mut theme.surface1,
            "surface2" | "surface_level2" => &mut theme.surface2,
            "overlay1" | "overlay_primary" => &mut theme.overlay1,
            "overlay2" | "overlay_secondary" => &mut theme.overlay2,
            "text" | "text_primary" => &mut theme.text,
            "subtext0" | "text_secondary" => &mut theme.subtext0,
            "subtext1" | "text_tertiary" => &mut theme.subtext1,
            "sapphire" | "accent_interactive" => &mut theme.sapphire,
            "mauve" | "accent_heading" => &mut theme.mauve,
            "green" | "semantic_success" => &mut theme.green,
            "yellow" | "semantic_warning" => &mut theme.yellow,
            "red" | "semantic_error" => &mut theme.red,
            "lavender" | "accent_emphasis" => &mut theme.lavender,
            _ => {
                errors.push(format!("- Unknown key '{key}' on line {line_no}"));
                continue;
            }
        };
        *slot = color;
    }
    if errors.is_empty() {
        Ok(theme)
    } else {
        Err(format!(
            "Errors in {}:\n{}",
            path.display(),
            errors.join("\n")
        ))
    }
}
