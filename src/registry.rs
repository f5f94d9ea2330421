//! Category registry
//!
//! The persisted set of known category names, stored as a JSON object mapping
//! each name to an (always-empty) list — the same wire format as the
//! dashboard's `categories.json`. The registry always contains at least the
//! default category, and every mutation is written through to disk
//! immediately. A single writer is assumed; there is no locking.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::SpendscopeResult;
use crate::models::DEFAULT_CATEGORY;
use crate::storage::file_io::{read_json, write_json_atomic};

type CategoryMap = BTreeMap<String, Vec<String>>;

/// The set of known category names, backed by a JSON file
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    path: PathBuf,
    categories: CategoryMap,
}

impl CategoryRegistry {
    /// Load the registry from disk.
    ///
    /// A missing file yields the default single-entry registry. An unreadable
    /// or corrupt file also falls back to the default rather than failing the
    /// whole session; the file is only rewritten on the next mutation.
    pub fn load(path: PathBuf) -> Self {
        let mut categories: CategoryMap = read_json(&path).unwrap_or_default();
        categories.entry(DEFAULT_CATEGORY.to_string()).or_default();
        Self { path, categories }
    }

    /// Add a new category name and persist immediately.
    ///
    /// Empty names and names already present (case-sensitive exact match) are
    /// no-ops that leave the backing file untouched. Returns whether the name
    /// was inserted.
    pub fn add(&mut self, name: &str) -> SpendscopeResult<bool> {
        let name = name.trim();
        if name.is_empty() || self.categories.contains_key(name) {
            return Ok(false);
        }

        self.categories.insert(name.to_string(), Vec::new());
        self.save()?;
        Ok(true)
    }

    /// Serialize the full mapping and overwrite the backing file
    pub fn save(&self) -> SpendscopeResult<()> {
        write_json_atomic(&self.path, &self.categories)
    }

    /// Check if a category name is known
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// All known category names, in sorted order
    pub fn names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// The registry is never empty; it always holds the default category
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
