// grid.rs - The board: every cell, its random seeding, and the generation rule

use std::collections::HashMap;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::cell::{Cell, Coord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error(
        "{side}px cells don't fit evenly into a {extent}px board; \
         extent must be a positive multiple of side"
    )]
    IncompatibleDimensions { extent: i32, side: i32 },
}

/// A square board tiled completely by cells, keyed by each cell's
/// top-left corner: `{0, side, 2*side, ..., extent - side}` on both axes.
#[derive(Debug, Clone)]
pub struct Grid {
    extent: i32,
    side: i32,
    threshold: f64,
    cells: HashMap<Coord, Cell>,
}

impl Grid {
    /// Builds and randomly seeds a board. Fails if `side` doesn't tile
    /// `extent` exactly.
    pub fn new(extent: i32, side: i32, threshold: f64) -> Result<Self, GridError> {
        Self::with_rng(extent, side, threshold, &mut rand::rng())
    }

    /// `new` with a caller-supplied generator, so seeding can be made
    /// deterministic with a `StdRng`.
    pub fn with_rng<R: Rng + ?Sized>(
        extent: i32,
        side: i32,
        threshold: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if extent <= 0 || side <= 0 || extent % side != 0 {
            return Err(GridError::IncompatibleDimensions { extent, side });
        }

        let per_axis = (extent / side) as usize;
        let mut grid = Self {
            extent,
            side,
            threshold,
            cells: HashMap::with_capacity(per_axis * per_axis),
        };
        for y in (0..extent).step_by(side as usize) {
            for x in (0..extent).step_by(side as usize) {
                let alive = grid.draw_liveness(rng);
                grid.cells.insert((x, y), Cell::new((x, y), extent, side, alive));
            }
        }

        debug!(
            "seeded {per_axis}x{per_axis} board, {} of {} cells live",
            grid.live_count(),
            grid.cell_count()
        );
        Ok(grid)
    }

    // A draw below the threshold seeds the cell dead, so a higher
    // threshold starts a sparser board.
    fn draw_liveness<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random::<f64>() >= self.threshold
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn get(&self, coords: Coord) -> Option<&Cell> {
        self.cells.get(&coords)
    }

    pub fn is_alive(&self, coords: Coord) -> bool {
        self.cells.get(&coords).is_some_and(Cell::is_alive)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn live_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_alive()).count()
    }

    /// Marks every listed coordinate that names a cell as alive and
    /// leaves everything else untouched. Coordinates that aren't board
    /// keys are ignored.
    pub fn set_live_cells(&mut self, coords: &[Coord]) {
        for coord in coords {
            if let Some(cell) = self.cells.get_mut(coord) {
                cell.set_alive(true);
            }
        }
    }

    /// Flips one cell's liveness; unknown coordinates are ignored.
    pub fn toggle(&mut self, coords: Coord) {
        if let Some(cell) = self.cells.get_mut(&coords) {
            let alive = cell.is_alive();
            cell.set_alive(!alive);
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in self.cells.values_mut() {
            cell.set_alive(false);
        }
    }

    /// Re-rolls every cell with the seeding threshold the board was
    /// constructed with.
    pub fn randomize(&mut self) {
        self.randomize_with_rng(&mut rand::rng());
    }

    pub fn randomize_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Walk keys in tiling order so a seeded rng reproduces exactly.
        for y in (0..self.extent).step_by(self.side as usize) {
            for x in (0..self.extent).step_by(self.side as usize) {
                let alive = self.draw_liveness(rng);
                if let Some(cell) = self.cells.get_mut(&(x, y)) {
                    cell.set_alive(alive);
                }
            }
        }
    }

    /// Advances the whole board by one generation. Every cell's next
    /// state is computed against the pre-step board before any cell is
    /// mutated, then all new states are committed at once.
    pub fn step(&mut self) {
        let next_states: Vec<(Coord, bool)> = self
            .cells
            .values()
            .map(|cell| {
                let alive_neighbors = cell
                    .neighbor_coords()
                    .into_iter()
                    .filter(|coord| self.is_alive(*coord))
                    .count();

                let next_alive = match (cell.is_alive(), alive_neighbors) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
                (cell.coords(), next_alive)
            })
            .collect();

        for (coords, alive) in next_states {
            if let Some(cell) = self.cells.get_mut(&coords) {
                cell.set_alive(alive);
            }
        }
    }
}
