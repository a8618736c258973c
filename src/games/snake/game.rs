use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::SnakeConfig;
use crate::core::game::{Flow, Game};
use crate::games::snake::body::Snake;
use crate::games::snake::collision::{self, Collision};
use crate::games::snake::food::Food;
use crate::games::snake::geometry::Heading;
use crate::games::snake::renderer::SnakeRenderer;
use crate::games::snake::scores::{Difficulty, HighScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver {
        score: u32,
        cause: Collision,
        new_record: bool,
    },
}

/// Everything one Snake session needs, owned in one place.
pub struct SnakeGame {
    config: SnakeConfig,
    difficulty: Difficulty,
    snake: Snake,
    food: Food,
    score: u32,
    high_scores: HighScores,
    phase: Phase,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, difficulty: Difficulty, high_scores: HighScores) -> Self {
        Self::with_rng(config, difficulty, high_scores, StdRng::from_os_rng())
    }

    pub fn with_rng(config: SnakeConfig, difficulty: Difficulty, high_scores: HighScores, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.step);
        let food = Food::spawn(&mut rng, &config.bounds, config.step, snake.segments());
        Self {
            config,
            difficulty,
            snake,
            food,
            score: 0,
            high_scores,
            phase: Phase::Playing,
            rng,
        }
    }

    /// One simulation step. Returns the collision that ended the round, if any.
    pub fn tick(&mut self) -> Option<Collision> {
        if self.phase != Phase::Playing {
            return None;
        }

        self.snake.advance();

        if collision::reaches(self.snake.head(), self.food.position(), self.config.food_threshold) {
            self.snake.grow();
            self.score += 1;
            self.food.respawn(&mut self.rng, &self.config.bounds, self.config.step, self.snake.segments());
            debug!(score = self.score, food = ?self.food.position(), "food eaten");
        }

        let cause = collision::check(&self.snake, &self.config.bounds, self.config.body_threshold)?;
        self.end_round(cause);
        Some(cause)
    }

    fn end_round(&mut self, cause: Collision) {
        let score = self.score;
        let new_record = score > self.high_scores.best(self.difficulty);
        if let Err(e) = self.high_scores.record(self.difficulty, score) {
            warn!(error = ?e, "could not save high score");
        }
        info!(score, cause = cause.describe(), new_record, "game over");

        self.snake.reset();
        self.score = 0;
        self.phase = Phase::GameOver { score, cause, new_record };
    }

    pub fn restart(&mut self) {
        self.snake.reset();
        self.score = 0;
        self.food.respawn(&mut self.rng, &self.config.bounds, self.config.step, self.snake.segments());
        self.phase = Phase::Playing;
        info!(difficulty = self.difficulty.label(), "new round");
    }

    pub fn turn(&mut self, heading: Heading) {
        if self.phase == Phase::Playing {
            self.snake.set_heading(heading);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            over => over,
        };
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.high_scores.best(self.difficulty)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Food) {
        self.food = food;
    }
}

fn heading_for(code: KeyCode) -> Option<Heading> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Heading::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Heading::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Heading::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Heading::Right),
        _ => None,
    }
}

impl Game for SnakeGame {
    fn tick_rate(&self) -> Duration {
        self.difficulty.tick_rate()
    }

    fn on_tick(&mut self) {
        self.tick();
    }

    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        match (self.phase, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => return Flow::Quit,
            (Phase::Playing | Phase::Paused, KeyCode::Char('p')) => self.toggle_pause(),
            (Phase::Paused, KeyCode::Char(' ')) => self.toggle_pause(),
            (Phase::Playing, code) => {
                if let Some(heading) = heading_for(code) {
                    self.turn(heading);
                }
            }
            (Phase::GameOver { .. }, KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter) => self.restart(),
            _ => {}
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        SnakeRenderer::render(frame, self);
    }
}
