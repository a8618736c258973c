use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Hardest,
    Hard,
    #[default]
    Normal,
    Easy,
    Easiest,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Hardest,
        Difficulty::Hard,
        Difficulty::Normal,
        Difficulty::Easy,
        Difficulty::Easiest,
    ];

    /// 1 for the hardest level up to 5 for the easiest.
    pub fn level(self) -> u64 {
        match self {
            Difficulty::Hardest => 1,
            Difficulty::Hard => 2,
            Difficulty::Normal => 3,
            Difficulty::Easy => 4,
            Difficulty::Easiest => 5,
        }
    }

    /// Time between ticks: `level / 40` seconds.
    pub fn tick_rate(self) -> Duration {
        Duration::from_millis(self.level() * 25)
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Hardest => "Hardest",
            Difficulty::Hard => "Hard",
            Difficulty::Normal => "Normal",
            Difficulty::Easy => "Easy",
            Difficulty::Easiest => "Easiest",
        }
    }
}

/// Case-insensitive level name, the same spellings the `--difficulty` flag takes.
impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(anyhow::Error::msg)
    }
}

/// Best score per difficulty, optionally backed by a JSON file.
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    path: Option<PathBuf>,
    scores: BTreeMap<Difficulty, u32>,
}

impl HighScores {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Reads `path`; a missing file starts every difficulty at zero.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let scores = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("malformed high-score file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no high-score file yet");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Ok(Self { path: Some(path), scores })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn best(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(&difficulty).copied().unwrap_or(0)
    }

    /// Keeps `score` if it beats the best for `difficulty` and writes the
    /// file. Returns whether a new record was set.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> Result<bool> {
        if score <= self.best(difficulty) {
            return Ok(false);
        }
        self.scores.insert(difficulty, score);
        info!(difficulty = difficulty.label(), score, "new high score");
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.scores)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }
}
