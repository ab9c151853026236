//! Persisted recall of the last-entered table title.
//!
//! A single named key in a small JSON document, surviving restarts. Not
//! scoped per table and never expired: the last created title wins. The
//! write point is [`TitleStore::remember_title`] (called by the
//! orchestrator after a successful table creation); the read point is
//! [`TitleStore::load_last_title`]. Write failures are logged, never
//! fatal.

use std::path::{Path, PathBuf};

/// The one persisted key.
const LAST_TITLE_KEY: &str = "last_title";

/// File-backed store for the most recently entered table title.
#[derive(Debug, Clone)]
pub struct TitleStore {
    path: PathBuf,
}

impl TitleStore {
    /// Store backed by the given file. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the store location from environment variables with a default.
    ///
    /// | Env Var               | Default                |
    /// |-----------------------|------------------------|
    /// | `SHOPLIST_TITLE_FILE` | `shoplist_titles.json` |
    pub fn from_env() -> Self {
        let path =
            std::env::var("SHOPLIST_TITLE_FILE").unwrap_or_else(|_| "shoplist_titles.json".into());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last remembered title, if any was ever written and the file is
    /// still readable.
    pub fn load_last_title(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let doc: serde_json::Value = serde_json::from_str(&raw).ok()?;
        doc.get(LAST_TITLE_KEY)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    /// Overwrite the remembered title with `title`.
    pub fn remember_title(&self, title: &str) {
        let doc = serde_json::json!({ LAST_TITLE_KEY: title });
        if let Err(err) = std::fs::write(&self.path, doc.to_string()) {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to persist title");
        }
    }
}
