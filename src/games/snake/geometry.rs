use serde::{Deserialize, Serialize};

/// A point in world units. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// The position `distance` units away along `heading`.
    pub fn moved(self, heading: Heading, distance: i32) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Unit vector for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

/// Open rectangle: a position on an edge counts as outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x > self.min_x && pos.x < self.max_x && pos.y > self.min_y && pos.y < self.max_y
    }

    /// Horizontal extent; widened so any pair of `i32` edges fits.
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        // The band above y = 250 is reserved for the score line.
        Self::new(-290, 290, -290, 250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for heading in Heading::ALL {
            assert_ne!(heading, heading.opposite());
            assert_eq!(heading, heading.opposite().opposite());
        }
    }

    #[test]
    fn moved_follows_turtle_axes() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.moved(Heading::Up, 20), Position::new(0, 20));
        assert_eq!(origin.moved(Heading::Down, 20), Position::new(0, -20));
        assert_eq!(origin.moved(Heading::Left, 20), Position::new(-20, 0));
        assert_eq!(origin.moved(Heading::Right, 20), Position::new(20, 0));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = Position::new(0, 0).distance(Position::new(3, 4));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn edges_are_outside() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Position::new(280, 240)));
        assert!(!bounds.contains(Position::new(290, 0)));
        assert!(!bounds.contains(Position::new(0, -290)));
        assert!(!bounds.contains(Position::new(0, 250)));
    }
}
