//! Library entry for craftlist exposing the catalog, query engine and UI for integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
