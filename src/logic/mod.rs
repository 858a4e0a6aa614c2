//! Core non-UI logic split into modular submodules.

pub mod filter;
pub mod query;
pub mod selection;

// Re-export public APIs to preserve existing import paths (crate::logic::...)
pub use filter::refresh_views;
pub use query::{filter_and_sort, matches_query, top_ranked};
pub use selection::{move_sel, select_first, select_last};
