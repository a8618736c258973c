use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::games::snake::scores::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "snaketerm")]
#[command(about = "🐍 Classic Snake in the terminal")]
#[command(version)]
pub struct Cli {
    /// Game speed; harder levels tick faster
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// JSON config file (board geometry, thresholds, paths)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where high scores are kept
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Keep high scores for this run only
    #[arg(long, conflicts_with = "scores")]
    pub no_scores: bool,

    /// Log file (stdout belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(scores) = &self.scores {
            config.scores_path = Some(scores.clone());
        }
        if self.no_scores {
            config.scores_path = None;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
    }
}
