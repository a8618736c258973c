pub mod body;
pub mod collision;
pub mod food;
pub mod game;
pub mod geometry;
pub mod renderer;
pub mod scores;

pub use body::Snake;
pub use game::{Phase, SnakeGame};
pub use geometry::{Bounds, Heading, Position};
pub use renderer::SnakeRenderer;
pub use scores::{Difficulty, HighScores};

use anyhow::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::Config;
use crate::core::engine::Engine;

/// Game runner for Snake
pub async fn run_game(config: &Config, terminal: &mut DefaultTerminal) -> Result<()> {
    let high_scores = match &config.scores_path {
        Some(path) => HighScores::load(path)?,
        None => HighScores::in_memory(),
    };
    info!(
        difficulty = config.difficulty.label(),
        best = high_scores.best(config.difficulty),
        scores = ?high_scores.path(),
        "starting snake"
    );

    let game = SnakeGame::new(config.snake.clone(), config.difficulty, high_scores);
    let game = Engine::new(game).run(terminal).await?;

    info!(best = game.best(), "snake finished");
    Ok(())
}
