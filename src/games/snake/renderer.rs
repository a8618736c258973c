//! Draws a [`SnakeGame`] into a ratatui frame. Every frame is rebuilt from the
//! model, so nothing here survives a reset.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::games::snake::game::{Phase, SnakeGame};
use crate::games::snake::geometry::{Bounds, Position};

const HEAD: &str = "██";
const BODY: &str = "▓▓";
const FOOD: &str = "●";
/// Terminal columns per grid cell; keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

pub struct SnakeRenderer;

impl SnakeRenderer {
    /// Grid columns and rows covering the play area, or `None` when either
    /// count does not fit a terminal coordinate.
    pub fn grid_size(bounds: &Bounds, step: i32) -> Option<(u16, u16)> {
        let step = i64::from(step);
        if step <= 0 {
            return None;
        }
        let cols = ((bounds.width() - 1) / step + 1).max(0);
        let rows = ((bounds.height() - 1) / step + 1).max(0);
        Some((u16::try_from(cols).ok()?, u16::try_from(rows).ok()?))
    }

    /// Terminal width and height needed for the status line, bordered board
    /// and hint line. `None` means the board can never be drawn.
    pub fn required_area(bounds: &Bounds, step: i32) -> Option<(u16, u16)> {
        let (cols, rows) = Self::grid_size(bounds, step)?;
        let width = cols.checked_mul(CELL_WIDTH)?.checked_add(2)?;
        let height = rows.checked_add(4)?;
        Some((width, height))
    }

    /// Grid cell `(column, row)` for a world position; row 0 is the top edge.
    pub fn cell(bounds: &Bounds, step: i32, pos: Position) -> Option<(u16, u16)> {
        if !bounds.contains(pos) || step <= 0 {
            return None;
        }
        let step = i64::from(step);
        let col = (i64::from(pos.x) - i64::from(bounds.min_x)) / step;
        let row = (i64::from(bounds.max_y) - i64::from(pos.y)) / step;
        Some((u16::try_from(col).ok()?, u16::try_from(row).ok()?))
    }

    pub fn render(frame: &mut Frame, game: &SnakeGame) {
        let area = frame.area();
        let config = game.config();
        let Some((board_w, total_h)) = Self::required_area(&config.bounds, config.step) else {
            frame.render_widget(
                Paragraph::new("Play area is too large to draw (q to quit)")
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        };
        let board_h = total_h - 2;

        if area.width < board_w || area.height < total_h {
            let msg = format!("Enlarge the terminal to at least {board_w}x{total_h} (q to quit)");
            frame.render_widget(
                Paragraph::new(msg).alignment(Alignment::Center).wrap(Wrap { trim: true }),
                area,
            );
            return;
        }

        let x0 = area.x + (area.width - board_w) / 2;
        let y0 = area.y + (area.height - total_h) / 2;
        let status = Rect::new(x0, y0, board_w, 1);
        let board = Rect::new(x0, y0 + 1, board_w, board_h);
        let help = Rect::new(x0, y0 + 1 + board_h, board_w, 1);

        let status_text = format!(
            "Score: {} | Highest score: {} | Difficulty: {}",
            game.score(),
            game.best(),
            game.difficulty().label()
        );
        frame.render_widget(
            Paragraph::new(status_text)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            status,
        );

        let block = Block::default().borders(Borders::ALL).title(" SNAKE ");
        let inner = block.inner(board);
        frame.render_widget(block, board);

        Self::draw_cell(frame, inner, game, game.food().position(), FOOD, Style::default().fg(Color::Red));
        let segments = game.snake().segments();
        for &segment in segments.iter().skip(1).rev() {
            Self::draw_cell(frame, inner, game, segment, BODY, Style::default().fg(Color::White));
        }
        Self::draw_cell(frame, inner, game, game.snake().head(), HEAD, Style::default().fg(Color::LightGreen));

        let hint = match game.phase() {
            Phase::Playing => "[←↑↓→/WASD] Steer  [P] Pause  [Q] Quit",
            Phase::Paused => "[P/Space] Resume  [Q] Quit",
            Phase::GameOver { .. } => "[R] Try again  [Q] Exit",
        };
        frame.render_widget(
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            help,
        );

        match game.phase() {
            Phase::Paused => Self::popup(frame, inner, " PAUSED ", "Paused".to_string()),
            Phase::GameOver { score, cause, new_record } => {
                let record = if new_record { " - new record!" } else { "" };
                let text = format!("Game Over\n\nThe snake {}\nScore: {score}{record}", cause.describe());
                Self::popup(frame, inner, " GAME OVER ", text);
            }
            Phase::Playing => {}
        }
    }

    fn draw_cell(frame: &mut Frame, inner: Rect, game: &SnakeGame, pos: Position, glyph: &str, style: Style) {
        let config = game.config();
        let Some((col, row)) = Self::cell(&config.bounds, config.step, pos) else {
            return;
        };
        let x = u32::from(inner.x) + u32::from(col) * u32::from(CELL_WIDTH);
        let y = u32::from(inner.y) + u32::from(row);
        if x + u32::from(CELL_WIDTH) <= u32::from(inner.right()) && y < u32::from(inner.bottom()) {
            // Both fit: they are bounded by the inner rect's edges.
            frame.buffer_mut().set_string(x as u16, y as u16, glyph, style);
        }
    }

    fn popup(frame: &mut Frame, inner: Rect, title: &str, text: String) {
        let height = (text.lines().count() as u16 + 2).min(inner.height);
        let width = 36.min(inner.width);
        let rect = Rect::new(
            inner.x + (inner.width - width) / 2,
            inner.y + (inner.height - height) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::Yellow)),
            rect,
        );
    }
}
