use std::collections::VecDeque;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Mutable snake state: body segments, steering, and lazy growth.
///
/// The body is a deque with the head at the front, so one tick is an
/// O(1) push-front plus at most one O(1) pop-back. Growth is counted in
/// `target_length` rather than applied instantly: after eating, the body
/// lengthens by one cell per tick until it catches up, which makes the
/// growth visually trail the head.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
            target_length: 0,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length is set so the snake keeps its given length on
    /// subsequent ticks.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let target_length = segments.len().saturating_sub(1);
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            target_length,
        }
    }

    /// Queues a direction change for the next tick.
    ///
    /// A direct reversal of the current direction is silently ignored:
    /// turning back through the neck would be an instant self-collision,
    /// so "can't reverse into yourself" is a no-op, not an error. The
    /// change takes effect at the start of the next `advance`, giving
    /// input a one-tick lag relative to movement.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Applies one movement tick.
    ///
    /// Commits the pending direction, pushes the wrapped new head, and
    /// pops the tail unless the body is still growing toward
    /// `target_length`. The popped cell is gone before any collision
    /// check, so a cell vacated this tick never counts as occupied.
    pub fn advance(&mut self, bounds: GridSize) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }

        let new_head = self.head().step(self.direction, bounds);
        self.body.push_front(new_head);

        if self.body.len() - 1 > self.target_length {
            let _ = self.body.pop_back();
        }
    }

    /// Registers one eaten food: the body will gain one cell over the
    /// next tick.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    ///
    /// A duplicate cell in the body is the terminal self-collision
    /// condition, never a tolerated state.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the length the body is growing toward, head included.
    #[must_use]
    pub fn full_length(&self) -> usize {
        self.target_length + 1
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
