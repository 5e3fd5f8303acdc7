use std::iter::FromIterator;

/// Ordered list of vessel lengths placed on every grid at the start of a round.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fleet(Vec<usize>);

impl Fleet {
    /// One three-cell, two two-cell and four one-cell vessels.
    pub const STANDARD: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

    /// Construct a fleet placing vessels of the given lengths, in order.
    pub fn new(lengths: Vec<usize>) -> Self {
        Fleet(lengths)
    }

    /// The fleet used by the default game.
    pub fn standard() -> Self {
        Self::new(Self::STANDARD.to_vec())
    }

    /// Vessel lengths in placement order.
    pub fn lengths(&self) -> &[usize] {
        &self.0
    }

    /// Number of vessels in the fleet.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the fleet has no vessels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells the whole fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<usize> for Fleet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Fleet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet_shape() {
        let fleet = Fleet::default();
        assert_eq!(fleet.lengths(), &[3, 2, 2, 1, 1, 1, 1]);
        assert_eq!(fleet.len(), 7);
        assert_eq!(fleet.total_cells(), 11);
    }

    #[test]
    fn collects_from_lengths() {
        let fleet: Fleet = vec![2, 1].into_iter().collect();
        assert_eq!(fleet, Fleet::new(vec![2, 1]));
        assert!(!fleet.is_empty());
    }
}
