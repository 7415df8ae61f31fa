use rand::Rng;

use super::direction::Direction;
use super::grid::{Grid, Position};

/// What happened when the snake was advanced one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The head moved into a free cell
    Advanced,
    /// The head would have entered the body; the snake was reset instead
    Collided,
}

/// The snake: an ordered run of grid cells, head first.
///
/// Heading changes are double-buffered: `turn` only records a request, and
/// `advance` commits it, so a turn arriving mid-tick takes effect on the very
/// next move.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub segments: Vec<Position>,
    /// Direction committed by the last `advance`
    pub heading: Direction,
    /// Direction requested since the last `advance`
    pub pending_heading: Direction,
    /// Body length the snake grows toward
    pub target_length: usize,
}

impl Snake {
    /// A fresh snake: one segment at the grid center, random heading
    pub fn new(grid: &Grid, rng: &mut impl Rng) -> Self {
        let heading = Direction::random(rng);
        Self {
            segments: vec![grid.center()],
            heading,
            pending_heading: heading,
            target_length: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if a position is covered by any body segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Request a heading change, committed on the next `advance`.
    ///
    /// Same-axis reversals are dropped: the head must never be steered
    /// straight into the segment directly behind it. Orthogonal turns and
    /// re-requests of the current heading are always accepted.
    pub fn turn(&mut self, requested: Direction) {
        if !requested.is_opposite(self.heading) {
            self.pending_heading = requested;
        }
    }

    /// Advance one cell in the pending heading.
    ///
    /// The new head is checked against every segment that survives this tick;
    /// the tail is exempt when it is about to drop (no growth pending). A head
    /// landing on a retained segment resets the snake instead of moving.
    pub fn advance(&mut self, grid: &Grid, rng: &mut impl Rng) -> MoveOutcome {
        self.heading = self.pending_heading;
        let new_head = grid.wrap(self.head(), self.heading);

        let dropping_tail = self.segments.len() == self.target_length;
        let retained = if dropping_tail {
            &self.segments[..self.segments.len() - 1]
        } else {
            &self.segments[..]
        };

        if retained.contains(&new_head) {
            self.reset(grid, rng);
            return MoveOutcome::Collided;
        }

        self.segments.insert(0, new_head);
        if self.segments.len() > self.target_length {
            self.segments.pop();
        }
        MoveOutcome::Advanced
    }

    /// Lengthen by one, starting with the next `advance`
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Back to a single segment at the grid center with a fresh random heading
    pub fn reset(&mut self, grid: &Grid, rng: &mut impl Rng) {
        self.segments.clear();
        self.segments.push(grid.center());
        self.heading = Direction::random(rng);
        self.pending_heading = self.heading;
        self.target_length = 1;
    }
}
