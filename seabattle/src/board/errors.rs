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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::{Direction, Vector2};

/// Error returned when a coordinate falls outside the grid.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord} is outside the {size}x{size} board")]
pub struct OutOfBounds {
    /// Coordinate that was requested.
    coord: Vector2,
    /// Size of the board it was requested from.
    size: usize,
}

impl OutOfBounds {
    pub(super) fn new(coord: Vector2, size: usize) -> Self {
        Self { coord, size }
    }

    /// The coordinate that was out of range.
    pub fn coord(&self) -> Vector2 {
        self.coord
    }

    /// Side length of the board that rejected the coordinate.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Debug for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Ships must cover at least one cell.
    #[error("ship length must be at least 1")]
    ZeroLength,
    /// One or more of the ship's cells would fall off the board.
    #[error("the ship does not fit on the board at that position")]
    OutOfBounds,
    /// One or more of the ship's cells already holds a ship or has been shot at.
    #[error("the requested position overlaps a ship or an earlier shot")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position. Placement is
/// all-or-nothing, so the board is untouched when this is returned.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {length} ship at {head} facing {direction}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    length: usize,
    head: Vector2,
    direction: Direction,
}

impl PlaceError {
    pub(super) fn new(
        reason: CannotPlaceReason,
        length: usize,
        head: Vector2,
        direction: Direction,
    ) -> Self {
        Self {
            reason,
            length,
            head,
            direction,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Length of the ship that was not placed.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Head coordinate where placement was attempted.
    pub fn head(&self) -> Vector2 {
        self.head
    }

    /// Direction placement was attempted in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when random placement gives up.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not find room for a {length} ship after {attempts} attempts")]
pub struct RandomPlaceError {
    length: usize,
    attempts: usize,
}

impl RandomPlaceError {
    pub(super) fn new(length: usize, attempts: usize) -> Self {
        Self { length, attempts }
    }

    /// Length of the ship that could not be placed.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of placements tried before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Debug for RandomPlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a particular cell could not be hit.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotHitReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,

    /// A shot has already been resolved at that cell.
    #[error("the target cell was already targeted")]
    AlreadyTargeted,
}

/// Error returned when trying to hit a cell. The board is not modified.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not hit cell {coord}: {reason}")]
pub struct HitError {
    /// Reason why the cell could not be hit.
    #[source]
    reason: CannotHitReason,

    /// The coordinates of the cell.
    coord: Vector2,
}

impl HitError {
    pub(super) fn new(reason: CannotHitReason, coord: Vector2) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotHitReason {
        self.reason
    }

    /// Get the coordinate of the targeted cell.
    pub fn coord(&self) -> Vector2 {
        self.coord
    }
}

impl Debug for HitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<OutOfBounds> for HitError {
    fn from(err: OutOfBounds) -> Self {
        Self::new(CannotHitReason::OutOfBounds, err.coord)
    }
}

/// Error returned when parsing a [`Direction`] from text fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid direction {input:?}, choose north, south, east or west")]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
