use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use super::geometry::{Bounds, Position};

/// Random picks tried before scanning the whole grid for a free cell.
const SPAWN_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Places food on a random grid cell strictly inside `bounds`. Cells in
    /// `occupied` are only used when every cell is occupied.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, step: i32, occupied: &[Position]) -> Self {
        let (xs, ys) = (grid_range(bounds.min_x, bounds.max_x, step), grid_range(bounds.min_y, bounds.max_y, step));

        let mut candidate = Position::default();
        for _ in 0..SPAWN_ATTEMPTS {
            candidate = Position::new(
                rng.random_range(xs.0..=xs.1) * step,
                rng.random_range(ys.0..=ys.1) * step,
            );
            if !occupied.contains(&candidate) {
                return Self { position: candidate };
            }
        }

        let taken: HashSet<Position> = occupied.iter().copied().collect();
        let free = (xs.0..=xs.1)
            .flat_map(|kx| (ys.0..=ys.1).map(move |ky| Position::new(kx * step, ky * step)))
            .filter(|cell| !taken.contains(cell))
            .choose(rng);
        Self { position: free.unwrap_or(candidate) }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: &Bounds, step: i32, occupied: &[Position]) {
        *self = Self::spawn(rng, bounds, step, occupied);
    }

    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Inclusive range of grid indices `k` with `min < k * step < max`.
fn grid_range(min: i32, max: i32, step: i32) -> (i32, i32) {
    let lo = min.div_euclid(step) + 1;
    let hi = (max - 1).div_euclid(step);
    (lo, hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_range_stays_inside_open_bounds() {
        assert_eq!(grid_range(-290, 290, 20), (-14, 14));
        assert_eq!(grid_range(-290, 250, 20), (-14, 12));
        assert_eq!(grid_range(-300, 300, 20), (-14, 14));
    }

    #[test]
    fn spawns_on_grid_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::default();
        for _ in 0..500 {
            let pos = Food::spawn(&mut rng, &bounds, 20, &[]).position();
            assert!(bounds.contains(pos), "{pos:?} outside");
            assert_eq!(pos.x % 20, 0);
            assert_eq!(pos.y % 20, 0);
        }
    }

    #[test]
    fn finds_the_last_free_cell_on_a_full_board() {
        let bounds = Bounds::default();
        let (xs, ys) = (grid_range(bounds.min_x, bounds.max_x, 20), grid_range(bounds.min_y, bounds.max_y, 20));
        let free = Position::new(100, 100);
        let occupied: Vec<Position> = (xs.0..=xs.1)
            .flat_map(|kx| (ys.0..=ys.1).map(move |ky| Position::new(kx * 20, ky * 20)))
            .filter(|cell| *cell != free)
            .collect();
        assert_eq!(occupied.len(), 29 * 27 - 1);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(Food::spawn(&mut rng, &bounds, 20, &occupied).position(), free, "seed {seed}");
        }
    }

    #[test]
    fn full_board_still_yields_a_cell_inside() {
        let bounds = Bounds::new(-30, 30, -10, 10);
        let occupied = [Position::new(-20, 0), Position::new(0, 0), Position::new(20, 0)];
        let mut rng = StdRng::seed_from_u64(5);
        let food = Food::spawn(&mut rng, &bounds, 20, &occupied);
        assert!(occupied.contains(&food.position()));
    }

    #[test]
    fn avoids_the_only_occupied_cell() {
        // 3x1 grid of cells: x in {-20, 0, 20}, y = 0.
        let bounds = Bounds::new(-30, 30, -10, 10);
        let occupied = [Position::new(-20, 0), Position::new(20, 0)];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let food = Food::spawn(&mut rng, &bounds, 20, &occupied);
            assert_eq!(food.position(), Position::new(0, 0));
        }
    }
}
