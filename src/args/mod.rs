//! Command-line argument parsing and the non-interactive listing modes.

pub mod definition;
pub mod export;
pub mod list;
pub mod utils;

pub use definition::{Args, process_args};
pub use utils::determine_log_level;
