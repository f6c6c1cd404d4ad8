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
//! Storage for the board's cells.

use std::ops::{Index, IndexMut};

use crate::{
    board::{CellState, OutOfBounds, Vector2},
    ships::ShipId,
};

/// A single cell in the grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(super) struct GridCell {
    /// What a shot at this cell would reveal, and what has already been revealed.
    pub(super) state: CellState,

    /// The ship that covers this cell, if any.
    pub(super) ship: Option<ShipId>,
}

/// Square grid of cells stored row-major: rows by `y`, columns by `x`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Side length of the grid.
    pub(super) size: usize,
    /// `size * size` cells.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    /// Caller guarantees `size * size` does not overflow.
    pub(super) fn new(size: usize) -> Self {
        let cells = (0..size * size).map(|_| Default::default()).collect();
        Self { size, cells }
    }

    /// Convert a coordinate to an index into `cells`. This is the one bounds check every
    /// cell access goes through.
    pub(super) fn try_linearize(&self, coord: Vector2) -> Result<usize, OutOfBounds> {
        let in_range = |v: i32| v >= 0 && (v as usize) < self.size;
        if in_range(coord.x) && in_range(coord.y) {
            Ok(coord.y as usize * self.size + coord.x as usize)
        } else {
            Err(OutOfBounds::new(coord, self.size))
        }
    }

    /// Get a reference to the cell at the given coordinate.
    pub(super) fn get(&self, coord: Vector2) -> Result<&GridCell, OutOfBounds> {
        let i = self.try_linearize(coord)?;
        Ok(&self.cells[i])
    }

    /// Get a mutable reference to the cell at the given coordinate.
    pub(super) fn get_mut(&mut self, coord: Vector2) -> Result<&mut GridCell, OutOfBounds> {
        let i = self.try_linearize(coord)?;
        Ok(&mut self.cells[i])
    }

    /// Iterate rows top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.size)
    }

    /// Reset every cell to open, untargeted water.
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = GridCell::default();
        }
    }
}

impl Index<Vector2> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Vector2) -> &Self::Output {
        match self.get(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<Vector2> for Grid {
    fn index_mut(&mut self, coord: Vector2) -> &mut Self::Output {
        match self.get_mut(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{}", err),
        }
    }
}
