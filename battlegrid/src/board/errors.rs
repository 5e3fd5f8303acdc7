//! Errors returned by the [`Grid`][crate::board::Grid] and the placement generator.

use thiserror::Error;

use crate::{board::Coordinate, ships::Vessel};

/// Reason why a vessel could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The head or tail of the vessel is off the board.
    #[error("the vessel does not fit on the board")]
    OutOfBounds,
    /// The vessel overlaps or touches a vessel that was already placed.
    #[error("the vessel is too close to another vessel")]
    TooClose,
}

/// Error caused when attempting to place a vessel in an invalid position.
#[derive(Debug, Error)]
#[error("could not place vessel at {}: {reason}", .vessel.head())]
pub struct PlaceError {
    reason: CannotPlaceReason,
    vessel: Vessel,
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the vessel that was not placed.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the rejected vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the shot is outside the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("that cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot fire at {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// A bounded random search ran out of attempts.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("gave up after {attempts} random attempts")]
pub struct RandomizationExhausted {
    attempts: usize,
}

impl RandomizationExhausted {
    /// Construct an error for a search that made `attempts` tries.
    pub fn new(attempts: usize) -> Self {
        Self { attempts }
    }

    /// How many attempts were made before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}
