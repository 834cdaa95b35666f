use rand::Rng;

use crate::grid::{GridSize, Position};
use crate::snake::Snake;

/// Food entity currently active on the board.
///
/// Its cell is never one the snake occupies; it is repositioned every
/// time it is eaten. Color comes from the active theme, not the entity.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at an explicit position, mainly for tests and
    /// deterministic setups.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    ///
    /// Samples uniformly from the set of free cells, so the call always
    /// terminates. Returns `None` only when the snake covers the whole
    /// grid, which the session treats as victory.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

        for y in 0..i32::from(bounds.height) {
            for x in 0..i32::from(bounds.width) {
                let position = Position { x, y };
                if !snake.occupies(position) {
                    candidates.push(position);
                }
            }
        }

        if candidates.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..candidates.len());
        Some(Self::at(candidates[index]))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::Food;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..1000 {
            let food = Food::spawn(&mut rng, bounds, &snake).expect("grid has free cells");
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn full_grid_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(Food::spawn(&mut rng, bounds, &snake), None);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(13);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        let food = Food::spawn(&mut rng, bounds, &snake).expect("one cell is free");
        assert_eq!(food.position, Position { x: 0, y: 1 });
    }
}
