//! Server catalog store.
//!
//! Owns the authoritative in-memory collection of [`ServerRecord`]s and its id
//! space. The collection is either the built-in seed or a JSON file standing in
//! for a directory service. The store makes no ordering promise; presentation
//! order comes from [`crate::logic::query`].

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::state::ServerRecord;

mod persist;
mod seed;

pub use seed::seed_records;

/// What: Failures when building or loading a catalog.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
#[derive(Debug)]
pub enum CatalogError {
    /// I/O error while reading or writing a catalog file.
    Io(std::io::Error),
    /// Catalog file content is not valid record JSON.
    Json(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(u32),
    /// A record has an empty (or whitespace-only) name.
    EmptyName(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "invalid catalog JSON: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate server id {id}"),
            Self::EmptyName(id) => write!(f, "server {id} has an empty name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) | Self::EmptyName(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Validated collection of server records with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Records in source order.
    records: Vec<ServerRecord>,
}

impl Catalog {
    /// What: Catalog backed by the built-in sample servers.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// What: Validate and wrap a record collection.
    ///
    /// Inputs:
    /// - `records`: Records in any order
    ///
    /// Output:
    /// - The catalog, or the first structural violation found.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateId` when two records share an id
    /// - `CatalogError::EmptyName` when a name is blank
    ///
    /// Details:
    /// - `players > max_players` and ratings outside `[0, 5]` are advisory: they are
    ///   logged and the record is kept.
    pub fn from_records(records: Vec<ServerRecord>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }
            if r.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(r.id));
            }
            if r.players > r.max_players {
                tracing::warn!(
                    id = r.id,
                    players = r.players,
                    max_players = r.max_players,
                    "[Catalog] players exceed capacity"
                );
            }
            if !(0.0..=5.0).contains(&r.rating) {
                tracing::warn!(id = r.id, rating = r.rating, "[Catalog] rating out of range");
            }
        }
        Ok(Self { records })
    }

    /// What: Load a catalog from a JSON file.
    ///
    /// Inputs:
    /// - `path`: JSON file holding an array of records or `{"servers": [...]}`
    ///
    /// # Errors
    /// - Any [`CatalogError`] from reading, decoding or validation
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_records(persist::read_records(path)?)?;
        tracing::info!(
            path = %path.display(),
            count = catalog.len(),
            "loaded server catalog"
        );
        Ok(catalog)
    }

    /// What: Write the catalog to `path` as pretty JSON.
    ///
    /// # Errors
    /// - `CatalogError::Io` / `CatalogError::Json` on write or encode failure
    pub fn save_to_path(&self, path: &Path) -> Result<(), CatalogError> {
        persist::write_records(path, &self.records)
    }

    /// All records, in no particular order.
    #[must_use]
    pub fn records(&self) -> &[ServerRecord] {
        &self.records
    }

    /// What: Look up a record by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&ServerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
