//! Random placement of a whole fleet onto a fresh grid.
use log::{debug, trace};
use rand::Rng;

use crate::{
    board::{Area, Grid, RandomizationExhausted, VesselId},
    config::GameConfig,
    ships::{Fleet, Vessel},
};

/// Builds fully populated grids by dropping vessels at random positions.
///
/// Each vessel gets up to `max_attempts` random candidates. If one vessel cannot be
/// placed, the whole grid is thrown away and placement restarts on an empty grid, again
/// up to `max_attempts` times.
#[derive(Debug, Clone)]
pub struct PlacementGenerator {
    area: Area,
    fleet: Fleet,
    max_attempts: usize,
}

impl PlacementGenerator {
    /// Create a generator for square grids of the given size. Panics if `size` is not
    /// positive.
    pub fn new(size: i32, fleet: Fleet, max_attempts: usize) -> Self {
        Self {
            area: Area::new(size),
            fleet,
            max_attempts,
        }
    }

    /// Create a generator using the grid size, fleet and retry budget of the config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, config.fleet.clone(), config.max_attempts)
    }

    /// Vessels placed on every generated grid.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Produce a grid with every vessel of the fleet placed. Never returns a partially
    /// filled grid.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, RandomizationExhausted> {
        for restart in 0..self.max_attempts {
            if let Some(grid) = self.try_fill(rng) {
                debug!(
                    "placed {} vessels after {} restarts",
                    grid.vessels().len(),
                    restart
                );
                return Ok(grid);
            }
            debug!("fleet did not fit, restarting grid (attempt {})", restart + 1);
        }
        Err(RandomizationExhausted::new(self.max_attempts))
    }

    /// Try to place the whole fleet on one empty grid.
    fn try_fill<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Grid> {
        let mut grid = Grid::with_area(self.area);
        for &length in self.fleet.lengths() {
            self.place_one(&mut grid, length, rng)?;
        }
        Some(grid)
    }

    /// Try random candidates for a single vessel until one fits.
    fn place_one<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        length: usize,
        rng: &mut R,
    ) -> Option<VesselId> {
        for _ in 0..self.max_attempts {
            let head = rng.sample(self.area);
            let candidate = Vessel::new(head, length, rng.gen());
            match grid.place_vessel(candidate) {
                Ok(id) => return Some(id),
                Err(err) => trace!("{}", err),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::board::{CellState, Coordinate};

    #[test]
    fn impossible_fleet_is_exhausted() {
        // A 3-cell vessel never fits on a 2x2 grid.
        let generator = PlacementGenerator::new(2, Fleet::new(vec![3]), 20);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate(&mut rng).unwrap_err();
        assert_eq!(err.attempts(), 20);
    }

    #[test]
    fn restarts_until_the_fleet_fits() {
        // Four single cells only fit in the corners of a 3x3 grid, so most fills strand a
        // vessel and the grid has to start over.
        let fleet: Fleet = std::iter::repeat(1).take(4).collect();
        let generator = PlacementGenerator::new(3, fleet, 30);
        assert_eq!(generator.fleet().len(), 4);
        let corners = [(0, 0), (2, 0), (0, 2), (2, 2)];

        let mut filled = 0;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            match generator.generate(&mut rng) {
                Ok(grid) => {
                    filled += 1;
                    assert_eq!(grid.vessels_afloat(), 4);
                    for &(x, y) in &corners {
                        assert_eq!(grid[Coordinate::new(x, y)], CellState::Ship);
                    }
                }
                Err(err) => assert_eq!(err.attempts(), 30),
            }
        }
        assert!(filled > 0);
    }

    #[test]
    fn single_vessel_fills_its_grid() {
        let generator = PlacementGenerator::new(1, Fleet::new(vec![1]), 10);
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generator.generate(&mut rng).unwrap();
        assert_eq!(grid.vessels_afloat(), 1);
    }
}
