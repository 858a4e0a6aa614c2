//! Theme and settings system for craftlist.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API stable.

/// Configuration file management.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and management.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use config::{ensure_settings_keys_present, ensure_theme_file_present};
pub use paths::{config_dir, logs_dir};
pub use settings::{parse_settings, settings};
pub use store::{reload_theme, theme};
pub use types::{Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
