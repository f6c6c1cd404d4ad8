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
//! Ships and the cells they cover.
use std::fmt;

use thiserror::Error;

use crate::board::{Direction, Vector2};

pub use self::cells::Cells;

mod cells;

/// Index of a ship on the board it was placed on, in placement order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in [`Board::ships`][crate::board::Board::ships].
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned by [`Ship::apply_hit`] once the ship has no health left.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship is already sunk")]
pub struct ShipSunkError;

/// A straight ship: `len` cells starting at `head` and extending along `direction`.
/// Shape is fixed at construction; only health and sunk status change afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    head: Vector2,
    direction: Direction,
    len: usize,
    health: usize,
    sunk: bool,
}

impl Ship {
    /// Construct an undamaged ship. Panics if `len` is 0.
    pub fn new(head: Vector2, direction: Direction, len: usize) -> Self {
        match Self::try_new(head, direction, len) {
            Some(ship) => ship,
            None => panic!("ship length must be nonzero"),
        }
    }

    /// Construct an undamaged ship, or `None` if `len` is 0.
    pub fn try_new(head: Vector2, direction: Direction, len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self {
                head,
                direction,
                len,
                health: len,
                sunk: false,
            })
        }
    }

    /// Anchor cell of the ship.
    pub fn head(&self) -> Vector2 {
        self.head
    }

    /// Direction the ship extends in from its head.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    /// True once every cell has been hit. Never reverts.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Iterate the cells of the ship, head first.
    pub fn cells(&self) -> Cells {
        Cells::new(self.head, self.direction.unit(), self.len)
    }

    /// True if `pos` is one of this ship's cells.
    pub fn occupies_cell(&self, pos: Vector2) -> bool {
        self.cells().any(|cell| cell == pos)
    }

    /// Record a hit on one of this ship's cells. Returns `Ok(true)` if the hit sank the
    /// ship. A sunk ship cannot take further hits and its health stays at 0.
    ///
    /// The ship does not know which cells were hit, so the caller is responsible for
    /// never reporting the same cell twice.
    pub fn apply_hit(&mut self) -> Result<bool, ShipSunkError> {
        if self.sunk {
            return Err(ShipSunkError);
        }
        self.health -= 1;
        if self.health == 0 {
            self.sunk = true;
        }
        Ok(self.sunk)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ship @ {} facing {} with {} hp. sunk? {}",
            self.len, self.head, self.direction, self.health, self.sunk
        )
    }
}
