//! Configuration files: skeletons, key backfill and theme loading.

/// Appends missing keys to `settings.conf`.
mod settings_ensure;
/// Default file contents written on first run.
pub(crate) mod skeletons;
/// `theme.conf` parsing.
mod theme_loader;

pub use settings_ensure::ensure_settings_keys_present;
pub use theme_loader::{ensure_theme_file_present, try_load_theme_with_diagnostics};
