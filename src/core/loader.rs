// src/core/loader.rs

use crate::models::PackCatalog;
use std::{fs, path::Path};

/// Loads the pack catalog from a JSON configuration file.
///
/// The document must be a single top-level object mapping pack names to
/// arrays of command strings. A missing file, unreadable file, or malformed
/// document yields an empty catalog; configuration problems are never fatal.
pub fn load_catalog(path: &Path) -> PackCatalog {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not read '{}': {}", path.display(), e);
            return PackCatalog::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Invalid configuration in '{}': {}", path.display(), e);
            PackCatalog::new()
        }
    }
}
