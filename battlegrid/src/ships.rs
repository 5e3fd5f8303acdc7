// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types used for defining vessels and the fleets they belong to.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Rect};

pub use self::fleet::Fleet;

mod fleet;

/// Direction a vessel extends in from its head.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends toward increasing `x`.
    Horizontal,
    /// Extends toward increasing `y`.
    Vertical,
}

impl Orientation {
    /// Offset from one occupied cell to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight vessel: a run of `length` cells starting at `head`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    head: Coordinate,
    length: usize,
    orientation: Orientation,
    /// Never exceeds `length`; zero once destroyed.
    hit_points: usize,
}

impl Vessel {
    /// Construct an undamaged vessel. Panics if `length` is 0.
    pub fn new(head: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0);
        Self {
            head,
            length,
            orientation,
            hit_points: length,
        }
    }

    /// First occupied cell.
    pub fn head(&self) -> Coordinate {
        self.head
    }

    /// Last occupied cell.
    pub fn tail(&self) -> Coordinate {
        let (dx, dy) = self.orientation.step();
        let last = self.length as i32 - 1;
        self.head.offset(dx * last, dy * last)
    }

    /// Number of cells the vessel covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Direction the vessel extends from its head.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits this vessel can still take before it is destroyed.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Returns true once the vessel has no hit points left.
    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    /// Iterate the occupied cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let head = self.head;
        (0..self.length as i32).map(move |i| head.offset(dx * i, dy * i))
    }

    /// Returns true if the vessel occupies the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.bounds().contains(coord)
    }

    /// Rectangle spanned by the head and tail.
    pub fn bounds(&self) -> Rect {
        Rect::spanning(self.head, self.tail())
    }

    /// Record one hit. Hit points bottom out at zero.
    pub fn apply_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }
}
