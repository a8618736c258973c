//! The snake's body: an ordered run of segment positions, head first.

use super::geometry::{Heading, Position};

/// Segment count after construction and after every `reset`.
pub const START_LENGTH: usize = 3;
/// Spacing between segments and distance the head covers per tick.
pub const DEFAULT_STEP: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Position>,
    heading: Heading,
    step: i32,
}

impl Snake {
    /// Three segments at `(0,0), (-step,0), (-2*step,0)` heading right.
    pub fn new(step: i32) -> Self {
        Self::with_length(START_LENGTH, step)
    }

    /// Like [`Snake::new`] with `len` segments; zero is treated as one.
    pub fn with_length(len: usize, step: i32) -> Self {
        let len = len.max(1);
        let segments = (0..len)
            .map(|i| Position::new(-(i as i32) * step, 0))
            .collect();
        Self {
            segments,
            heading: Heading::Right,
            step,
        }
    }

    /// Every segment takes its predecessor's old slot, then the head moves
    /// one step along the heading.
    pub fn advance(&mut self) {
        let len = self.segments.len();
        // copy_within reads the source range before writing, so each
        // segment receives its predecessor's pre-advance position.
        self.segments.copy_within(..len - 1, 1);
        self.segments[0] = self.segments[0].moved(self.heading, self.step);
    }

    /// Appends a segment on top of the tail; the next `advance` pulls it along.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    /// Turns the head unless `heading` would reverse it onto its neck.
    /// A rejected turn is ignored.
    pub fn set_heading(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.heading = heading;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.step);
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Head first.
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn body(&self) -> &[Position] {
        &self.segments[1..]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}
