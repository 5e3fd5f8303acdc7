//! Coordinates and the rectangular regions built from them.
use std::fmt;

use rand::{distributions::Distribution, Rng};

/// The coordinates of a cell on a [`Grid`][crate::board::Grid].
///
/// Components are signed so that regions extending past the edge of the board (such as
/// the buffer around a vessel on the first row) can be expressed directly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the coordinate displaced by `dx` and `dy`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// Inclusive axis-aligned rectangle of coordinates. May extend outside of any board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rect {
    /// Corner with the smallest `x` and `y`.
    min: Coordinate,
    /// Corner with the largest `x` and `y`.
    max: Coordinate,
}

impl Rect {
    /// Construct the smallest [`Rect`] containing both corners.
    pub fn spanning(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min: Coordinate::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coordinate::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Corner with the smallest components.
    pub fn min(&self) -> Coordinate {
        self.min
    }

    /// Corner with the largest components.
    pub fn max(&self) -> Coordinate {
        self.max
    }

    /// Grow the rectangle by `by` cells in every direction.
    pub fn expanded(self, by: i32) -> Self {
        Self {
            min: self.min.offset(-by, -by),
            max: self.max.offset(by, by),
        }
    }

    /// Returns true if the coordinate lies inside this rectangle, edges included.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// Iterate every coordinate of the rectangle, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let Rect { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Coordinate::new(x, y)))
    }
}

/// Square playing area covering `[0, size)` on both axes.
///
/// Doubles as the uniform distribution over its cells, so a random target is just
/// `rng.sample(grid.area())`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Area {
    size: i32,
}

impl Area {
    /// Create an [`Area`] with the given side length. Panics if `size` is not positive.
    pub fn new(size: i32) -> Self {
        match Self::try_new(size) {
            Some(area) => area,
            None => panic!("Area must have a positive size, got {}", size),
        }
    }

    /// Create an [`Area`] with the given side length. Returns `None` if `size` is not
    /// positive.
    pub fn try_new(size: i32) -> Option<Self> {
        if size > 0 {
            Some(Self { size })
        } else {
            None
        }
    }

    /// Side length of the area.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells in the area.
    pub fn total_size(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Check if the given [`Coordinate`] is inside the area.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (0..self.size).contains(&coord.x) && (0..self.size).contains(&coord.y)
    }

    /// Convert a coordinate to a linear index. Returns `None` if it is out of bounds.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.size as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this area. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }
}

impl Distribution<Coordinate> for Area {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(rng.gen_range(0, self.size), rng.gen_range(0, self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rect_expansion_reaches_past_edges() {
        let rect = Rect::spanning(Coordinate::new(2, 0), Coordinate::new(0, 0)).expanded(1);
        assert_eq!(rect.min(), Coordinate::new(-1, -1));
        assert_eq!(rect.max(), Coordinate::new(3, 1));
        assert_eq!(rect.iter().count(), 15);
        assert!(rect.contains(Coordinate::new(-1, 1)));
        assert!(!rect.contains(Coordinate::new(4, 0)));
    }

    #[test]
    fn area_bounds() {
        let area = Area::new(6);
        assert!(area.contains(Coordinate::new(0, 0)));
        assert!(area.contains(Coordinate::new(5, 5)));
        assert!(!area.contains(Coordinate::new(6, 0)));
        assert!(!area.contains(Coordinate::new(0, -1)));
        assert_eq!(area.try_linearize(Coordinate::new(1, 2)), Some(13));
        assert_eq!(area.try_linearize(Coordinate::new(-1, 2)), None);
        assert!(Area::try_new(0).is_none());
    }

    #[test]
    fn sampled_coordinates_stay_inside() {
        let area = Area::new(6);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(area.contains(rng.sample(area)));
        }
    }

    #[test]
    fn display_matches_pair_format() {
        assert_eq!(Coordinate::new(3, -1).to_string(), "(3, -1)");
    }
}
