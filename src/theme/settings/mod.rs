use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod normalize;
mod parse_settings;

use normalize::normalize;
pub use parse_settings::parse_settings;

/// Last parsed settings and the file mtime they came from.
struct SettingsCache {
    /// Parsed and normalized settings.
    settings: Settings,
    /// File the settings were parsed from.
    settings_path: Option<PathBuf>,
    /// Modification time of `settings.conf` when it was parsed.
    settings_mtime: Option<SystemTime>,
    /// Whether `settings` reflects a completed load.
    initialized: bool,
}

impl SettingsCache {
    /// Empty, uninitialized cache.
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            settings_path: None,
            settings_mtime: None,
            initialized: false,
        }
    }
}

/// Process-wide settings cache.
static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - Re-parses only when the resolved file or its modification time changed since the last call.
/// - A poisoned cache lock is recovered rather than propagated.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| Mutex::new(SettingsCache::new()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let settings_path = resolve_settings_config_path();
    let settings_mtime = settings_path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());

    if cache.initialized
        && cache.settings_path == settings_path
        && cache.settings_mtime == settings_mtime
    {
        return cache.settings.clone();
    }

    let mut out = Settings::default();
    if let Some(p) = settings_path.as_ref() {
        match fs::read_to_string(p) {
            Ok(content) => {
                debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
                parse_settings(&content, &mut out);
            }
            Err(e) => {
                warn!(
                    path = %p.display(),
                    error = %e,
                    "[Config] settings.conf unreadable, using defaults"
                );
            }
        }
    } else {
        debug!("[Config] No settings.conf found, using defaults");
    }

    normalize(&mut out);

    cache.settings_path = settings_path;
    cache.settings_mtime = settings_mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}
