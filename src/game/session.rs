use rand::Rng;
use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::{Food, PlacementError};
use super::grid::Grid;
use super::snake::{MoveOutcome, Snake};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// The head landed on the food; the snake grew and the food moved
    pub ate: bool,
    /// The head ran into the body; the snake was reset
    pub collided: bool,
}

/// One running game: the grid, the snake, the food, and the rng feeding them.
///
/// All mutation goes through `tick`, `queue_turn`, and `restart`, on a single
/// thread; the rendering side only sees the read accessors.
pub struct Session<R = ThreadRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
}

impl Session<ThreadRng> {
    /// Start a session from a validated configuration
    pub fn new(config: &GameConfig) -> Result<Self, PlacementError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with a caller-supplied rng (seeded in tests)
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, PlacementError> {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let snake = Snake::new(&grid, &mut rng);
        let food = Food::spawn(&grid, &snake, &mut rng)?;
        Ok(Self {
            grid,
            snake,
            food,
            rng,
        })
    }

    /// Ask the snake to turn; takes effect on the next tick
    pub fn queue_turn(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// One simulation step: commit the pending heading and move, then resolve
    /// food and self-collision.
    ///
    /// The only error is a fully occupied grid at food relocation time, which
    /// normal play cannot reach.
    pub fn tick(&mut self) -> Result<TickSummary, PlacementError> {
        match self.snake.advance(&self.grid, &mut self.rng) {
            MoveOutcome::Collided => Ok(TickSummary {
                ate: false,
                collided: true,
            }),
            MoveOutcome::Advanced => {
                let ate = self.snake.head() == self.food.position();
                if ate {
                    self.snake.grow();
                    self.food.relocate(&self.grid, &self.snake, &mut self.rng)?;
                }
                Ok(TickSummary {
                    ate,
                    collided: false,
                })
            }
        }
    }

    /// Start the run over: fresh snake at the center, food moved off it
    pub fn restart(&mut self) -> Result<(), PlacementError> {
        self.snake.reset(&self.grid, &mut self.rng);
        self.food.relocate(&self.grid, &self.snake, &mut self.rng)?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }
}
