//! Types that make up the game board.

use std::ops::Index;

use log::trace;

use crate::ships::Vessel;

pub use self::{
    coordinate::{Area, Coordinate, Rect},
    errors::{
        CannotPlaceReason, CannotShootReason, PlaceError, RandomizationExhausted, ShotError,
    },
    placement::PlacementGenerator,
};

mod coordinate;
mod errors;
pub mod placement;

/// Cells around a vessel that must stay clear of other vessels, and that get marked once
/// it is destroyed.
const BUFFER: i32 = 1;

/// State of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing here and nothing known.
    Empty,
    /// Occupied by a vessel that has not been hit in this cell.
    Ship,
    /// A shot landed on a vessel here.
    Hit,
    /// A shot landed on open water here.
    Miss,
    /// Open water next to a destroyed vessel, where no other vessel can be.
    Contour,
}

impl CellState {
    /// Returns true if a shot has already been resolved against this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Index of a vessel within the grid that owns it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct VesselId(usize);

impl VesselId {
    /// Position of the vessel in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of a resolved shot on a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the vessel with the given ID, but did not destroy it.
    Hit(VesselId),
    /// The shot hit the vessel with the given ID and it has no hit points left.
    Destroyed(VesselId),
}

impl ShotOutcome {
    /// Get the id of the vessel that was hit.
    pub fn vessel(&self) -> Option<VesselId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Destroyed(id) => Some(id),
        }
    }

    /// Returns true unless the shot was a miss.
    pub fn is_hit(&self) -> bool {
        self.vessel().is_some()
    }
}

/// A single side's board: the cells and the vessels placed on them.
#[derive(Debug, Clone)]
pub struct Grid {
    area: Area,
    /// Cell states, linearized row by row.
    cells: Box<[CellState]>,
    /// Every placed vessel, in placement order. Destroyed vessels stay here.
    vessels: Vec<Vessel>,
    /// Count of vessels with hit points left.
    afloat: usize,
}

impl Grid {
    /// Create an empty square grid. Panics if `size` is not positive.
    pub fn new(size: i32) -> Self {
        Self::with_area(Area::new(size))
    }

    /// Create an empty square grid. Returns `None` if `size` is not positive.
    pub fn try_new(size: i32) -> Option<Self> {
        Area::try_new(size).map(Self::with_area)
    }

    /// Create an empty grid covering the given area.
    pub fn with_area(area: Area) -> Self {
        Self {
            area,
            cells: vec![CellState::Empty; area.total_size()].into_boxed_slice(),
            vessels: Vec::new(),
            afloat: 0,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> i32 {
        self.area.size()
    }

    /// The area covered by this grid. Also a uniform distribution over its cells.
    pub fn area(&self) -> Area {
        self.area
    }

    /// Returns true if the coordinate lies outside the grid.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        !self.area.contains(coord)
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the coordinate
    /// is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.area.try_linearize(coord).map(|i| self.cells[i])
    }

    /// Get an iterator over the rows of the grid. Each row is an iterator over the
    /// coordinates and states of its cells.
    pub fn rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, CellState)>> {
        self.area
            .iter_rows()
            .map(move |row| row.map(move |coord| (coord, self[coord])))
    }

    /// All vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Get the vessel with the specified ID if it exists on this grid.
    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// Iterate vessels along with their IDs.
    pub fn iter_vessels(&self) -> impl Iterator<Item = (VesselId, &Vessel)> {
        self.vessels
            .iter()
            .enumerate()
            .map(|(i, vessel)| (VesselId(i), vessel))
    }

    /// Number of vessels with hit points remaining.
    pub fn vessels_afloat(&self) -> usize {
        self.afloat
    }

    /// Returns true once no vessel is left afloat.
    pub fn is_defeated(&self) -> bool {
        self.afloat == 0
    }

    /// Place a vessel onto the grid.
    ///
    /// Fails if the head or tail is off the board, or if any cell of the vessel falls in
    /// the bounding box of an existing vessel grown by one cell on every side. The grid
    /// is left untouched on failure.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<VesselId, PlaceError> {
        if self.is_out_of_bounds(vessel.head()) || self.is_out_of_bounds(vessel.tail()) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, vessel));
        }
        let too_close = self.vessels.iter().any(|existing| {
            let keep_out = existing.bounds().expanded(BUFFER);
            vessel.cells().any(|coord| keep_out.contains(coord))
        });
        if too_close {
            return Err(PlaceError::new(CannotPlaceReason::TooClose, vessel));
        }

        for coord in vessel.cells() {
            let i = self.linearize(coord);
            self.cells[i] = CellState::Ship;
        }
        let id = VesselId(self.vessels.len());
        self.vessels.push(vessel);
        self.afloat += 1;
        Ok(id)
    }

    /// Fire a shot at the given cell, returning why the shot was rejected or what it hit.
    pub fn fire_at(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let i = self
            .area
            .try_linearize(coord)
            .ok_or_else(|| ShotError::new(CannotShootReason::OutOfBounds, coord))?;
        if self.cells[i].is_resolved() {
            return Err(ShotError::new(CannotShootReason::AlreadyShot, coord));
        }

        let outcome = match self.vessels.iter().position(|v| v.occupies(coord)) {
            None => {
                self.cells[i] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(index) => {
                self.cells[i] = CellState::Hit;
                let vessel = &mut self.vessels[index];
                let was_afloat = !vessel.is_destroyed();
                vessel.apply_hit();
                if vessel.is_destroyed() {
                    if was_afloat {
                        self.afloat -= 1;
                    }
                    ShotOutcome::Destroyed(VesselId(index))
                } else {
                    ShotOutcome::Hit(VesselId(index))
                }
            }
        };
        trace!("shot at {} resolved as {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Mark the open water around a destroyed vessel as contour.
    ///
    /// Every in-bounds cell of the vessel's bounding box grown by one that is still empty
    /// becomes [`CellState::Contour`]. Does nothing if the vessel is still afloat or does
    /// not exist. Returns the number of cells marked.
    pub fn mark_contour(&mut self, id: VesselId) -> usize {
        let keep_out = match self.vessel(id) {
            Some(vessel) if vessel.is_destroyed() => vessel.bounds().expanded(BUFFER),
            _ => return 0,
        };
        let mut marked = 0;
        for coord in keep_out.iter() {
            if let Some(i) = self.area.try_linearize(coord) {
                if self.cells[i] == CellState::Empty {
                    self.cells[i] = CellState::Contour;
                    marked += 1;
                }
            }
        }
        marked
    }

    /// Linear index of an in-bounds coordinate.
    fn linearize(&self, coord: Coordinate) -> usize {
        match self.area.try_linearize(coord) {
            Some(i) => i,
            None => panic!("{} is out of bounds for {:?}", coord, self.area),
        }
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[self.linearize(coord)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ships::Orientation;

    fn vessel(x: i32, y: i32, length: usize, orientation: Orientation) -> Vessel {
        Vessel::new(Coordinate::new(x, y), length, orientation)
    }

    #[test]
    fn place_marks_cells_and_counts_afloat() {
        let mut grid = Grid::new(6);
        let id = grid
            .place_vessel(vessel(1, 1, 2, Orientation::Vertical))
            .unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(grid[Coordinate::new(1, 1)], CellState::Ship);
        assert_eq!(grid[Coordinate::new(1, 2)], CellState::Ship);
        assert_eq!(grid[Coordinate::new(2, 1)], CellState::Empty);
        assert_eq!(grid.vessels_afloat(), 1);
    }

    #[test]
    fn tail_off_the_board_is_rejected() {
        let mut grid = Grid::new(6);
        let err = grid
            .place_vessel(vessel(4, 0, 3, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(grid.vessels().is_empty());
        assert!(grid.rows().flatten().all(|(_, s)| s == CellState::Empty));
    }

    #[test]
    fn diagonal_neighbor_is_too_close() {
        let mut grid = Grid::new(6);
        grid.place_vessel(vessel(2, 2, 1, Orientation::Horizontal))
            .unwrap();
        let err = grid
            .place_vessel(vessel(3, 3, 1, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::TooClose);
        assert_eq!(err.vessel().head(), Coordinate::new(3, 3));
        assert_eq!(err.into_vessel().length(), 1);
        assert_eq!(grid[Coordinate::new(3, 3)], CellState::Empty);
        grid.place_vessel(vessel(4, 4, 1, Orientation::Horizontal))
            .unwrap();
        assert_eq!(grid.vessels_afloat(), 2);
    }

    #[test]
    fn size_must_be_positive() {
        assert!(Grid::try_new(0).is_none());
        assert!(Grid::try_new(-3).is_none());
        assert_eq!(Grid::try_new(4).map(|grid| grid.size()), Some(4));
    }

    #[test]
    fn vessel_ids_follow_placement_order() {
        let mut grid = Grid::new(6);
        let first = grid
            .place_vessel(vessel(0, 0, 2, Orientation::Vertical))
            .unwrap();
        let second = grid
            .place_vessel(vessel(3, 0, 3, Orientation::Horizontal))
            .unwrap();
        let listed: Vec<_> = grid
            .iter_vessels()
            .map(|(id, vessel)| (id, vessel.length()))
            .collect();
        assert_eq!(listed, vec![(first, 2), (second, 3)]);
        assert_eq!(grid.vessel(second).map(Vessel::head), Some(Coordinate::new(3, 0)));
    }

    #[test]
    fn shots_outside_are_rejected() {
        let mut grid = Grid::new(6);
        for &(x, y) in &[(-1, 0), (0, -1), (6, 0), (0, 6)] {
            let err = grid.fire_at(Coordinate::new(x, y)).unwrap_err();
            assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        }
    }

    #[test]
    fn contour_is_skipped_for_afloat_vessels() {
        let mut grid = Grid::new(6);
        let id = grid
            .place_vessel(vessel(2, 2, 2, Orientation::Horizontal))
            .unwrap();
        grid.fire_at(Coordinate::new(2, 2)).unwrap();
        assert_eq!(grid.mark_contour(id), 0);
        assert!(grid
            .rows()
            .flatten()
            .all(|(_, s)| s != CellState::Contour));
    }

    #[test]
    fn contour_cells_still_accept_shots() {
        let mut grid = Grid::new(6);
        let id = grid
            .place_vessel(vessel(0, 0, 1, Orientation::Horizontal))
            .unwrap();
        assert_eq!(
            grid.fire_at(Coordinate::new(0, 0)).unwrap(),
            ShotOutcome::Destroyed(id)
        );
        assert_eq!(grid.mark_contour(id), 3);
        assert_eq!(grid[Coordinate::new(1, 1)], CellState::Contour);
        assert_eq!(
            grid.fire_at(Coordinate::new(1, 1)).unwrap(),
            ShotOutcome::Miss
        );
        assert_eq!(grid[Coordinate::new(1, 1)], CellState::Miss);
    }
}
