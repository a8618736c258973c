use super::body::Snake;
use super::geometry::{Bounds, Position};

/// Head closer than this to a body segment counts as a bite.
pub const BODY_THRESHOLD: f64 = 10.0;
/// Head closer than this to the food eats it.
pub const FOOD_THRESHOLD: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

impl Collision {
    pub fn describe(self) -> &'static str {
        match self {
            Collision::Wall => "hit the wall",
            Collision::Body => "bit its own tail",
        }
    }
}

pub fn reaches(from: Position, to: Position, threshold: f64) -> bool {
    from.distance(to) < threshold
}

pub fn hits_wall(snake: &Snake, bounds: &Bounds) -> bool {
    !bounds.contains(snake.head())
}

pub fn hits_body(snake: &Snake, threshold: f64) -> bool {
    let head = snake.head();
    snake.body().iter().any(|&segment| reaches(head, segment, threshold))
}

/// Wall first, then body.
pub fn check(snake: &Snake, bounds: &Bounds, body_threshold: f64) -> Option<Collision> {
    if hits_wall(snake, bounds) {
        Some(Collision::Wall)
    } else if hits_body(snake, body_threshold) {
        Some(Collision::Body)
    } else {
        None
    }
}
