use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::logic::refresh_views;
use crate::state::AppState;
use crate::theme::Settings;

/// What: Resolve the locale and load its translations into the app state.
///
/// Inputs:
/// - `app`: Application state to populate
/// - `locale_pref`: `locale` from settings.conf (empty = auto-detect)
pub fn initialize_locale_system(app: &mut AppState, locale_pref: &str) {
    let (locale, translations, fallback) = crate::i18n::load_translations(locale_pref);
    app.locale = locale;
    app.translations = translations;
    app.translations_fallback = fallback;
}

/// What: Copy user settings into the app state and recompute views.
///
/// Inputs:
/// - `app`: Application state
/// - `prefs`: Normalized settings
pub fn apply_settings_to_app_state(app: &mut AppState, prefs: &Settings) {
    app.leaderboard_size = prefs.leaderboard_size;
    app.mode_filter = prefs.default_mode.clone();
    app.toast_duration = Duration::from_secs(prefs.toast_duration_secs);
    app.show_keybinds_footer = prefs.show_keybinds_footer;
    app.details_pane_pct = prefs.details_pane_pct;
    refresh_views(app);
}

/// What: Pick the catalog file: CLI override first, then the `catalog_path` setting.
#[must_use]
pub fn catalog_source(cli_override: Option<&Path>, prefs: &Settings) -> Option<PathBuf> {
    cli_override.map(Path::to_path_buf).or_else(|| {
        let p = prefs.catalog_path.trim();
        (!p.is_empty()).then(|| PathBuf::from(p))
    })
}

/// What: Load the catalog from `path`, falling back to the built-in servers.
///
/// Inputs:
/// - `app`: Application state
/// - `path`: Catalog file, or `None` for the built-in servers
///
/// Details:
/// - On failure the seed stays active, a warning toast is shown and the path is
///   remembered so Ctrl+R can retry.
pub fn initialize_catalog(app: &mut AppState, path: Option<PathBuf>) {
    let Some(path) = path else {
        tracing::info!(servers = app.catalog.len(), "using built-in server catalog");
        return;
    };
    match Catalog::load_from_path(&path) {
        Ok(catalog) => app.catalog = catalog,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "catalog file failed to load; using built-in servers"
            );
            let msg = crate::i18n::t(app, "app.toasts.catalog_fallback");
            app.show_toast(msg);
        }
    }
    app.catalog_path = Some(path);
    refresh_views(app);
}

/// What: Build the startup state from settings, locale and catalog.
///
/// Inputs:
/// - `app`: Fresh application state
/// - `catalog_override`: `--catalog` path, if given
/// - `headless`: When `true`, settings files are not written
pub fn initialize_app_state(app: &mut AppState, catalog_override: Option<&Path>, headless: bool) {
    let prefs = crate::theme::settings();
    if !headless {
        crate::theme::ensure_settings_keys_present(&prefs);
        crate::theme::ensure_theme_file_present();
    }
    initialize_locale_system(app, &prefs.locale);
    apply_settings_to_app_state(app, &prefs);
    initialize_catalog(app, catalog_source(catalog_override, &prefs));
}
