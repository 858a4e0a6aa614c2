//! `--export`: write the active catalog to a JSON file.

use std::path::Path;

use crate::catalog::{Catalog, CatalogError};

/// What: Save `catalog` to `path` and report on stdout.
///
/// # Errors
/// - Returns the underlying [`CatalogError`] when the file cannot be written
pub fn handle_export(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    catalog.save_to_path(path)?;
    tracing::info!(path = %path.display(), servers = catalog.len(), "catalog exported");
    println!("Exported {} servers to {}", catalog.len(), path.display());
    Ok(())
}
