use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::game::{Flow, Game};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until the game asks to quit or input closes, then hands the game back.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let mut events = EventStream::new();
        let tick_rate = self.game.tick_rate();
        let mut interval = tokio::time::interval(tick_rate);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval fires immediately; skip it so the
        // opening frame is shown for a full period.
        interval.tick().await;

        info!(?tick_rate, "engine started");

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else {
                        debug!("input stream closed");
                        break;
                    };
                    let event = event.context("failed to read terminal event")?;
                    if let Event::Key(key) = event {
                        if key.kind == KeyEventKind::Release {
                            continue;
                        }
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            break;
                        }
                        if self.game.handle_input(key) == Flow::Quit {
                            break;
                        }
                    }
                }

                _ = interval.tick() => self.game.on_tick(),
            }
        }

        info!("engine stopped");
        Ok(self.game)
    }
}
