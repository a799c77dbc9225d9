//! High score persistence
//!
//! A single best score. The game only ever reads it at the start of a run
//! and writes it when a run beats it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Storage for the best score
pub trait HighScoreStore {
    fn high_score(&self) -> anyhow::Result<u64>;
    fn set_high_score(&mut self, score: u64) -> anyhow::Result<()>;
}

/// Volatile store, used by tests and when no save path is configured
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    score: u64,
}

impl MemoryHighScores {
    pub fn new(score: u64) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn high_score(&self) -> anyhow::Result<u64> {
        Ok(self.score)
    }

    fn set_high_score(&mut self, score: u64) -> anyhow::Result<()> {
        self.score = score;
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    highscore: u64,
}

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
}

impl FileHighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScores {
    /// A missing file means no score yet; anything else unreadable is an error
    fn high_score(&self) -> anyhow::Result<u64> {
        if !self.path.exists() {
            return Ok(0);
        }
        let record: HighScoreRecord = persistence::load_json(&self.path)?;
        Ok(record.highscore)
    }

    fn set_high_score(&mut self, score: u64) -> anyhow::Result<()> {
        persistence::save_json(&self.path, &HighScoreRecord { highscore: score })?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
