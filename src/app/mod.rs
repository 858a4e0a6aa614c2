//! craftlist application runtime: terminal lifecycle, background workers and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::init::{
    apply_settings_to_app_state, catalog_source, initialize_catalog, initialize_locale_system,
};
pub use runtime::{RunOptions, run};
