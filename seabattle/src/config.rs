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
//! Game setup: board size, fleet, and placement settings.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::board::{DEFAULT_PLACEMENT_ATTEMPTS, MAX_SIZE};

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 10;

/// Ship lengths of the classic fleet, in the order they are placed.
pub const STANDARD_FLEET: [usize; 5] = [2, 3, 3, 4, 5];

/// Error returned when parsing a [`Fleet`] fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseFleetError {
    /// No lengths were given.
    #[error("fleet must contain at least one ship")]
    Empty,
    /// A length was not a number.
    #[error("invalid ship length {0:?}")]
    InvalidLength(String),
    /// A length was 0.
    #[error("ship lengths must be at least 1")]
    ZeroLength,
}

/// Ordered list of ship lengths to place on a board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fleet(Vec<usize>);

impl Fleet {
    /// Build a fleet from ship lengths. Returns an error if the list is empty or any
    /// length is 0.
    pub fn new(lengths: Vec<usize>) -> Result<Self, ParseFleetError> {
        if lengths.is_empty() {
            Err(ParseFleetError::Empty)
        } else if lengths.contains(&0) {
            Err(ParseFleetError::ZeroLength)
        } else {
            Ok(Fleet(lengths))
        }
    }

    /// The classic five-ship fleet, [`STANDARD_FLEET`].
    pub fn standard() -> Self {
        Fleet(STANDARD_FLEET.to_vec())
    }

    /// Iterate the ship lengths in placement order.
    pub fn iter<'a>(&'a self) -> impl 'a + Iterator<Item = usize> {
        self.0.iter().copied()
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; fleets hold at least one ship.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.0.iter().sum()
    }

    /// Length of the longest ship.
    pub fn longest(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Fleet {
    type Err = ParseFleetError;

    /// Parse lengths separated by commas and/or whitespace, e.g. `"2,3,3,4,5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lengths = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse()
                    .map_err(|_| ParseFleetError::InvalidLength(part.to_owned()))
            })
            .collect::<Result<Vec<usize>, _>>()?;
        Self::new(lengths)
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lengths = self.0.iter();
        if let Some(first) = lengths.next() {
            write!(f, "{}", first)?;
        }
        for len in lengths {
            write!(f, ",{}", len)?;
        }
        Ok(())
    }
}

/// Reason a [`GameConfig`] cannot be played.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Board side length outside `1..=MAX_SIZE`.
    #[error("board size must be between 1 and {}, got {0}", MAX_SIZE)]
    InvalidSize(usize),
    /// A ship is longer than the board is wide.
    #[error("a {length} ship does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    /// The fleet needs more cells than the board has.
    #[error("fleet covers {cells} cells but the board only has {area}")]
    FleetTooLarge { cells: usize, area: usize },
}

/// Everything needed to set up a board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of the board.
    pub size: usize,
    /// Ships to place, in order.
    pub fleet: Fleet,
    /// Whether rendering hides ships that have not been hit.
    pub hidden: bool,
    /// Random placement attempts per ship before giving up.
    pub max_attempts: usize,
}

impl GameConfig {
    /// Check that the fleet can at least in principle fit on the board. Passing this
    /// does not guarantee random placement succeeds; a crowded board can still run out
    /// of attempts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::InvalidSize(self.size));
        }
        let longest = self.fleet.longest();
        if longest > self.size {
            return Err(ConfigError::ShipTooLong {
                length: longest,
                size: self.size,
            });
        }
        let cells = self.fleet.total_cells();
        let area = self.size * self.size;
        if cells > area {
            return Err(ConfigError::FleetTooLarge { cells, area });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// The classic game: a visible 10x10 board with the standard fleet.
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: Fleet::standard(),
            hidden: false,
            max_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}
