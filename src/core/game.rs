/// Core game interface driven by the [`Engine`](crate::core::engine::Engine)
use std::time::Duration;

use crossterm::event::KeyEvent;

/// What the engine should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that every terminal game implements
pub trait Game {
    /// Time between ticks, read once when the engine starts
    fn tick_rate(&self) -> Duration;

    /// Advance the simulation by one tick
    fn on_tick(&mut self);

    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    /// Draw the current state. Must not change it.
    fn render(&self, frame: &mut ratatui::Frame);
}
