//! Session state: server records, filters, tabs, modals and the [`AppState`] that ties them together.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, DEFAULT_TOAST_DURATION};
pub use types::{KNOWN_MODES, Modal, ModeFilter, ServerRecord, Tab};
