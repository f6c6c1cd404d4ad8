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
use std::{fmt, str::FromStr};

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{ParseDirectionError, Vector2};

/// One of the four cardinal directions a ship can point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset for this direction. North is `+y`, so on a grid printed with row 0 at
    /// the top, a north-facing ship extends downward.
    pub fn unit(self) -> Vector2 {
        Vector2::from_direction(self)
    }

    /// Get the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" | "up" | "u" => Ok(Direction::North),
            "south" | "s" | "down" | "d" => Ok(Direction::South),
            "east" | "e" | "right" | "r" => Ok(Direction::East),
            "west" | "w" | "left" | "l" => Ok(Direction::West),
            _ => Err(ParseDirectionError::new(s)),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Direction> for Standard {
    /// Pick one of the four directions with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.gen_range(0, 4) {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::East,
            _ => Direction::West,
        }
    }
}
