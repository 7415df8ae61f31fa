use rand::Rng;

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The wrap-around coordinate space all movement happens in.
///
/// Coordinates live in `[0, width) x [0, height)`; stepping off one edge
/// re-enters on the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width >= 2 && height >= 2);
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// The cell the snake spawns on
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Move one cell in `direction`, wrapping off-edge coordinates to the
    /// opposite side
    pub fn wrap(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            (pos.x + dx).rem_euclid(self.width as i32),
            (pos.y + dy).rem_euclid(self.height as i32),
        )
    }

    /// A cell chosen uniformly over the whole grid
    pub fn random_cell(&self, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.gen_range(0..self.width) as i32,
            rng.gen_range(0..self.height) as i32,
        )
    }

    /// Check that a position is inside the coordinate space
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_wrap_interior() {
        let grid = Grid::new(10, 10);
        let pos = Position::new(5, 5);
        assert_eq!(grid.wrap(pos, Direction::Right), Position::new(6, 5));
        assert_eq!(grid.wrap(pos, Direction::Left), Position::new(4, 5));
        assert_eq!(grid.wrap(pos, Direction::Down), Position::new(5, 6));
        assert_eq!(grid.wrap(pos, Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_wrap_around_edges() {
        let grid = Grid::new(10, 8);

        // Right edge wraps to column 0, same row
        assert_eq!(
            grid.wrap(Position::new(9, 3), Direction::Right),
            Position::new(0, 3)
        );
        // Left edge wraps to the last column
        assert_eq!(
            grid.wrap(Position::new(0, 3), Direction::Left),
            Position::new(9, 3)
        );
        // Bottom edge wraps to row 0
        assert_eq!(
            grid.wrap(Position::new(4, 7), Direction::Down),
            Position::new(4, 0)
        );
        // Top edge wraps to the last row
        assert_eq!(
            grid.wrap(Position::new(4, 0), Direction::Up),
            Position::new(4, 7)
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(10, 10).center(), Position::new(5, 5));
        assert_eq!(Grid::new(32, 24).center(), Position::new(16, 12));
        assert_eq!(Grid::new(3, 5).center(), Position::new(1, 2));
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = Grid::new(7, 3);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn test_random_cell_covers_grid() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(grid.random_cell(&mut rng));
        }
        assert_eq!(seen.len(), grid.area());
    }
}
