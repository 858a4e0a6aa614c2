//! Central `AppState` container mutated by the event loop and read by the UI.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::catalog::Catalog;
use crate::i18n::TranslationMap;
use crate::logic::query::DEFAULT_LEADERBOARD_SIZE;
use crate::state::types::{Modal, ModeFilter, ServerRecord, Tab};

/// Default lifetime of a toast notification.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Global application state shared by the event, UI and runtime layers.
///
/// The catalog store is the single source of truth. `results` and `top` are
/// derived views rebuilt by [`crate::logic::refresh_views`] whenever the
/// search text, mode filter or catalog changes.
#[derive(Debug)]
pub struct AppState {
    /// Authoritative server collection.
    pub catalog: Catalog,
    /// File the catalog was loaded from, used by reloads.
    pub catalog_path: Option<PathBuf>,
    /// Active tab.
    pub tab: Tab,
    /// Current search text.
    pub input: String,
    /// Current mode filter.
    pub mode_filter: ModeFilter,
    /// Catalog view: filtered and ranked records.
    pub results: Vec<ServerRecord>,
    /// Leaderboard view: top records by score.
    pub top: Vec<ServerRecord>,
    /// Leaderboard length.
    pub leaderboard_size: usize,
    /// Selection state for the catalog list.
    pub results_state: ListState,
    /// Selection state for the leaderboard list.
    pub top_state: ListState,
    /// Open modal, if any.
    pub modal: Modal,
    /// Transient toast message (bottom-right).
    pub toast_message: Option<String>,
    /// Deadline (Instant) after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
    /// How long new toasts stay visible.
    pub toast_duration: Duration,
    /// Whether the keybinds footer is rendered.
    pub show_keybinds_footer: bool,
    /// Width percentage of the details pane.
    pub details_pane_pct: u16,
    /// Resolved locale code (e.g. "ru-RU").
    pub locale: String,
    /// Translations for `locale`.
    pub translations: TranslationMap,
    /// English translations used when a key is missing from `translations`.
    pub translations_fallback: TranslationMap,
}

impl Default for AppState {
    fn default() -> Self {
        let english = crate::i18n::load_locale(crate::i18n::DEFAULT_LOCALE).unwrap_or_default();
        let mut app = Self {
            catalog: Catalog::seeded(),
            catalog_path: None,
            tab: Tab::Catalog,
            input: String::new(),
            mode_filter: ModeFilter::All,
            results: Vec::new(),
            top: Vec::new(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            results_state: ListState::default(),
            top_state: ListState::default(),
            modal: Modal::None,
            toast_message: None,
            toast_expires_at: None,
            toast_duration: DEFAULT_TOAST_DURATION,
            show_keybinds_footer: true,
            details_pane_pct: 40,
            locale: crate::i18n::DEFAULT_LOCALE.to_string(),
            translations: english.clone(),
            translations_fallback: english,
        };
        crate::logic::refresh_views(&mut app);
        app
    }
}

impl AppState {
    /// What: Record currently highlighted in the active tab.
    ///
    /// Output: `Some(&ServerRecord)` when the active view has a selection.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ServerRecord> {
        match self.tab {
            Tab::Catalog => self.results_state.selected().and_then(|i| self.results.get(i)),
            Tab::Top => self.top_state.selected().and_then(|i| self.top.get(i)),
        }
    }

    /// What: Show a toast for the configured duration.
    ///
    /// Inputs:
    /// - `message`: Text to display
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + self.toast_duration);
    }

    /// What: Whether the user has narrowed the catalog in any way.
    ///
    /// Output: `true` when a search text or a specific mode is active.
    ///
    /// Details:
    /// - Lets the UI tell "no matches" apart from an empty catalog.
    #[must_use]
    pub fn has_active_query(&self) -> bool {
        !self.input.is_empty() || self.mode_filter != ModeFilter::All
    }
}
