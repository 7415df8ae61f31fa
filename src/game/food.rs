use rand::Rng;
use thiserror::Error;

use super::grid::{Grid, Position};
use super::snake::Snake;

/// Food placement cannot succeed: there is no free cell left
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell for food: snake covers the whole {width}x{height} grid")]
    GridFull { width: usize, height: usize },
}

/// A single food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Place a new food item on a cell the snake does not occupy
    pub fn spawn(grid: &Grid, snake: &Snake, rng: &mut impl Rng) -> Result<Self, PlacementError> {
        Ok(Self {
            position: free_cell(grid, snake, rng)?,
        })
    }

    /// Place food on a specific cell, bypassing exclusion checks
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a fresh random cell off the snake's body
    pub fn relocate(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        rng: &mut impl Rng,
    ) -> Result<(), PlacementError> {
        self.position = free_cell(grid, snake, rng)?;
        Ok(())
    }
}

/// Rejection-sample a cell outside the snake.
///
/// Guarded up front: a snake covering the whole grid would make the sampling
/// loop spin forever, so that case errors out instead.
fn free_cell(grid: &Grid, snake: &Snake, rng: &mut impl Rng) -> Result<Position, PlacementError> {
    if snake.len() >= grid.area() {
        return Err(PlacementError::GridFull {
            width: grid.width(),
            height: grid.height(),
        });
    }

    loop {
        let cell = grid.random_cell(rng);
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }
}
