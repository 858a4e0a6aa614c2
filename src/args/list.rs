//! Listing modes: `--search`, `--mode` and `--top` printed as a table or JSON.

use std::fmt::Write;
use std::path::Path;

use crate::catalog::{Catalog, CatalogError};
use crate::logic::{filter_and_sort, top_ranked};
use crate::state::{ModeFilter, ServerRecord};
use crate::theme::Settings;
use crate::util::{format_score, pad_to_width};

/// What a listing invocation asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// Filtered catalog view.
    Catalog {
        /// Search text (may be empty).
        query: String,
        /// Mode filter.
        mode: ModeFilter,
    },
    /// Leaderboard of the given length.
    Top(usize),
}

/// Parsed listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    /// Which view to print.
    pub view: ListView,
    /// Print JSON instead of a table.
    pub json: bool,
}

impl ListRequest {
    /// What: Build a request from CLI arguments.
    ///
    /// Inputs:
    /// - `args`: Parsed arguments
    /// - `default_top`: Leaderboard size used by a bare `--top`
    #[must_use]
    pub fn from_args(args: &crate::args::Args, default_top: usize) -> Self {
        let view = match args.top {
            Some(n) => ListView::Top(n.unwrap_or(default_top)),
            None => ListView::Catalog {
                query: args.search.clone().unwrap_or_default(),
                mode: args
                    .mode
                    .as_deref()
                    .map_or(ModeFilter::All, ModeFilter::parse),
            },
        };
        Self {
            view,
            json: args.json,
        }
    }
}

/// What: Load the catalog the CLI operates on.
///
/// Inputs:
/// - `cli_path`: `--catalog` value
/// - `prefs`: Settings providing `catalog_path`
///
/// Output:
/// - The file's catalog, or the built-in servers when no file is configured
///
/// # Errors
/// - Returns [`CatalogError`] when a configured file cannot be loaded
pub fn load_catalog(cli_path: Option<&Path>, prefs: &Settings) -> Result<Catalog, CatalogError> {
    match crate::app::catalog_source(cli_path, prefs) {
        Some(path) => Catalog::load_from_path(&path),
        None => Ok(Catalog::seeded()),
    }
}

/// What: Render the requested view.
///
/// Output:
/// - Text ready for stdout, ending with a newline
///
/// # Errors
/// - Returns `Err` when JSON serialization fails
pub fn render(catalog: &Catalog, req: &ListRequest) -> Result<String, serde_json::Error> {
    let rows: Vec<&ServerRecord> = match &req.view {
        ListView::Catalog { query, mode } => filter_and_sort(catalog.records(), query, mode),
        ListView::Top(n) => top_ranked(catalog.records(), *n),
    };
    tracing::debug!(view = ?req.view, rows = rows.len(), "[CLI] listing");
    if req.json {
        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_table(&rows, matches!(req.view, ListView::Top(_))))
}

/// Column widths for the table output.
const COLS: [(&str, usize); 7] = [
    ("NAME", 24),
    ("MODE", 10),
    ("VERSION", 8),
    ("PLAYERS", 11),
    ("RATING", 6),
    ("VOTES", 6),
    ("SCORE", 8),
];

/// What: Format records as an aligned text table.
///
/// Inputs:
/// - `rows`: Records in display order
/// - `ranked`: Prefix each row with its rank
fn render_table(rows: &[&ServerRecord], ranked: bool) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No servers found.\n");
        return out;
    }
    if ranked {
        out.push_str("#   ");
    }
    for (name, w) in COLS {
        out.push_str(&pad_to_width(name, w));
        out.push(' ');
    }
    out.push_str("ADDRESS\n");
    for (i, r) in rows.iter().enumerate() {
        if ranked {
            let _ = write!(out, "{:<4}", i + 1);
        }
        let cells = [
            r.name.clone(),
            r.mode.clone(),
            r.version.clone(),
            format!("{}/{}", r.players, r.max_players),
            format!("{:.1}", r.rating),
            r.votes.to_string(),
            format_score(r.score()),
        ];
        for (cell, (_, w)) in cells.iter().zip(COLS) {
            out.push_str(&pad_to_width(cell, w));
            out.push(' ');
        }
        out.push_str(&r.ip);
        out.push('\n');
    }
    out
}
