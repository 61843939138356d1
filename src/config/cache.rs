//! Best-effort on-disk cache of the editor session's configuration.
//!
//! Failures never propagate: a cache that cannot be read yields `None`, a
//! cache that cannot be written is logged and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use super::LabelConfiguration;
use crate::compose::CounselingList;

/// JSON file holding the last edited configuration.
#[derive(Debug, Clone)]
pub struct StateCache {
    path: PathBuf,
}

impl StateCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached configuration.
    ///
    /// A cached state with no counseling entries gets the default entries.
    pub fn load(&self) -> Option<LabelConfiguration> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read state cache");
                return None;
            }
        };

        match serde_json::from_str::<LabelConfiguration>(&contents) {
            Ok(mut config) => {
                if config.counseling().is_empty() {
                    config.set_counseling(CounselingList::defaults());
                }
                tracing::debug!(path = %self.path.display(), "loaded state cache");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable state cache");
                None
            }
        }
    }

    /// Save the configuration. Returns whether the write succeeded.
    pub fn store(&self, config: &LabelConfiguration) -> bool {
        let result = serde_json::to_string_pretty(config)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&self.path, json).map_err(|e| e.to_string()));

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to save state cache");
                false
            }
        }
    }

    /// Remove the cache file, if any.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear state cache");
        }
    }
}
