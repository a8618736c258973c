use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::games::snake::body::{DEFAULT_STEP, START_LENGTH};
use crate::games::snake::collision::{BODY_THRESHOLD, FOOD_THRESHOLD};
use crate::games::snake::geometry::Bounds;
use crate::games::snake::renderer::SnakeRenderer;
use crate::games::snake::scores::Difficulty;

pub const DEFAULT_SCORES_PATH: &str = "snake_scores.json";
pub const DEFAULT_LOG_FILE: &str = "snaketerm.log";

/// Board geometry and distance thresholds for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub step: i32,
    pub bounds: Bounds,
    pub body_threshold: f64,
    pub food_threshold: f64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            bounds: Bounds::default(),
            body_threshold: BODY_THRESHOLD,
            food_threshold: FOOD_THRESHOLD,
        }
    }
}

impl SnakeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            bail!("step must be positive, got {}", self.step);
        }
        if self.bounds.width() <= 0 || self.bounds.height() <= 0 {
            bail!("play area {:?} is empty", self.bounds);
        }
        if self.body_threshold <= 0.0 || self.food_threshold <= 0.0 {
            bail!(
                "thresholds must be positive (body {}, food {})",
                self.body_threshold,
                self.food_threshold
            );
        }
        if SnakeRenderer::required_area(&self.bounds, self.step).is_none() {
            bail!(
                "play area {:?} with step {} is too large to draw in a terminal",
                self.bounds,
                self.step
            );
        }
        // The starting snake lies on y = 0 at x = 0, -step, -2*step; checked
        // in i64 so a huge step cannot overflow.
        let (min_x, max_x) = (i64::from(self.bounds.min_x), i64::from(self.bounds.max_x));
        let row_inside = self.bounds.min_y < 0 && self.bounds.max_y > 0;
        let outside = (0..START_LENGTH as i64)
            .map(|i| -i * i64::from(self.step))
            .find(|&x| !row_inside || x <= min_x || x >= max_x);
        if let Some(x) = outside {
            bail!("starting snake does not fit the play area: ({x}, 0) is outside {:?}", self.bounds);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub difficulty: Difficulty,
    /// `None` keeps high scores in memory only.
    pub scores_path: Option<PathBuf>,
    pub log_file: PathBuf,
    pub snake: SnakeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scores_path: Some(PathBuf::from(DEFAULT_SCORES_PATH)),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            snake: SnakeConfig::default(),
        }
    }
}

impl Config {
    /// Defaults when `path` is `None`, otherwise the JSON file at `path`
    /// with missing fields filled from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.snake.validate()
    }
}
