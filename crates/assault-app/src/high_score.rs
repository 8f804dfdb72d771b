//! High-score persistence: a single integer in a small JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// On-disk shape: `{ "high_score": N }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score. A missing or unreadable file counts as 0.
    pub fn load(&self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return 0,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read high score");
                return 0;
            }
        };
        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) => record.high_score,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt high score file, starting from 0");
                0
            }
        }
    }

    pub fn save(&self, high_score: u32) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score })?;
        fs::write(&self.path, json)?;
        tracing::debug!(high_score, path = %self.path.display(), "high score saved");
        Ok(())
    }
}
