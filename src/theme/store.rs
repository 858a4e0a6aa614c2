use std::sync::{OnceLock, PoisonError, RwLock};

use super::config::try_load_theme_with_diagnostics;
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Global theme store with live-reload capability.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// What: Load the palette at first use.
///
/// Details:
/// - Without a `theme.conf` the built-in palette is used.
/// - A broken `theme.conf` is logged and the built-in palette is used.
fn load_initial_theme() -> Theme {
    let Some(path) = resolve_theme_config_path() else {
        return Theme::default();
    };
    match try_load_theme_with_diagnostics(&path) {
        Ok(t) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(msg) => {
            tracing::error!(
                path = %path.display(),
                error = %msg,
                "theme configuration errors; using default palette"
            );
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading from config if available.
///
/// The config file is `theme.conf` under `$HOME/.config/craftlist` or
/// `$XDG_CONFIG_HOME/craftlist`.
///
/// Format: key = value, one per line; values are colors as "#RRGGBB" or "R,G,B".
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    *lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Reload the theme from disk without restarting the app.
///
/// # Errors
/// - Returns `Err(msg)` if no theme file exists or it contains errors; the current palette is kept.
pub fn reload_theme() -> std::result::Result<(), String> {
    let Some(p) = resolve_theme_config_path() else {
        return Err("No theme configuration file found".to_string());
    };
    let new_theme = try_load_theme_with_diagnostics(&p)?;
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    *lock.write().unwrap_or_else(PoisonError::into_inner) = new_theme;
    Ok(())
}
