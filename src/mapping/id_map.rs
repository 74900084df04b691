//! Identifier mapping table.

use std::collections::HashMap;
use std::path::Path;

use tracing::{error, info, warn};

/// Maximum number of characters kept in a title key.
const TITLE_KEY_LEN: usize = 50;

/// Lookup from a title or positional key to an external identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdMapping {
    entries: HashMap<String, String>,
}

impl IdMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the mapping file at `path`.
    ///
    /// A missing path, missing file or unparsable file yields an empty
    /// mapping; the problem is logged rather than returned.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::new();
        };

        if !path.exists() {
            warn!(path = %path.display(), "id mapping file not found");
            return Self::new();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                serde_json::from_str::<HashMap<String, String>>(&json).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(entries) => {
                info!(count = entries.len(), "loaded id mappings");
                Self { entries }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read id mapping file");
                Self::new()
            }
        }
    }

    /// Key derived from a segment title: spaces become underscores and the
    /// result is cut to 50 characters.
    pub fn title_key(title: &str) -> String {
        title.replace(' ', "_").chars().take(TITLE_KEY_LEN).collect()
    }

    /// Key derived from a segment's position in the script.
    pub fn positional_key(index: usize) -> String {
        format!("paper_{index}")
    }

    /// Look up a raw key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve by title key first, then by positional key.
    pub fn resolve(&self, title: Option<&str>, index: usize) -> Option<&str> {
        title
            .and_then(|t| self.get(&Self::title_key(t)))
            .or_else(|| self.get(&Self::positional_key(index)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IdMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
