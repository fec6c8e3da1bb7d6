use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::board::{Pos, Size};
use crate::render::{Drawable, Renderer, APPLE_COLOR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("every cell of the {width}x{height} board is occupied")]
    BoardFull { width: u16, height: u16 },
}

#[derive(Debug)]
pub struct Food {
    grid: Size,
    position: Pos,
}

impl Food {
    pub fn new(grid: Size, rng: &mut impl Rng) -> Result<Self, PlacementError> {
        let mut food = Food {
            grid,
            position: grid.center(),
        };
        food.randomize(std::iter::empty::<&Pos>(), rng)?;
        Ok(food)
    }

    #[cfg(test)]
    pub fn at(grid: Size, position: Pos) -> Self {
        Food { grid, position }
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    /// Moves the food to a uniformly random cell outside `occupied`.
    ///
    /// Fails without touching the current position when no free cell is left.
    pub fn randomize<'a>(
        &mut self,
        occupied: impl IntoIterator<Item = &'a Pos>,
        rng: &mut impl Rng,
    ) -> Result<Pos, PlacementError> {
        let occupied: HashSet<Pos> = occupied
            .into_iter()
            .copied()
            .filter(|&pos| self.grid.contains(pos))
            .collect();

        if occupied.len() >= self.grid.area() {
            return Err(PlacementError::BoardFull {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        loop {
            let pos = Pos {
                x: rng.gen_range(0..self.grid.width),
                y: rng.gen_range(0..self.grid.height),
            };

            if !occupied.contains(&pos) {
                self.position = pos;
                return Ok(pos);
            }
        }
    }
}

impl Drawable for Food {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_cell(self.position, APPLE_COLOR, true);
    }
}
