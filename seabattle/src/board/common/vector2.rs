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
use std::{
    fmt,
    ops::{Add, Mul},
};

#[cfg(feature = "rng_gen")]
use rand::{distributions::Uniform, Rng};

use crate::board::Direction;

/// Integer coordinate of a cell on the board, or an offset between two cells.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Vector2 {
    /// Horizontal position, the column of the cell.
    pub x: i32,
    /// Vertical position, the row of the cell.
    pub y: i32,
}

impl Vector2 {
    /// The origin, `(0, 0)`.
    pub const ZERO: Vector2 = Vector2 { x: 0, y: 0 };

    /// Construct a [`Vector2`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unit offset pointing along the given [`Direction`].
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(0, 1),
            Direction::South => Self::new(0, -1),
            Direction::East => Self::new(1, 0),
            Direction::West => Self::new(-1, 0),
        }
    }

    /// Componentwise sum.
    pub fn add(self, other: Vector2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Multiply both components by `k`.
    pub fn scale(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// True if both components match.
    pub fn equals(self, other: Vector2) -> bool {
        self == other
    }

    /// Draw a vector whose components are each independently uniform over the
    /// inclusive range `[low, high]`. Panics if `low > high`.
    #[cfg(feature = "rng_gen")]
    pub fn random_uniform<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> Self {
        let range = Uniform::new_inclusive(low, high);
        let x = rng.sample(&range);
        let y = rng.sample(&range);
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::add(self, other)
    }
}

impl Mul<i32> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: i32) -> Vector2 {
        self.scale(k)
    }
}

impl From<Direction> for Vector2 {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl From<(i32, i32)> for Vector2 {
    /// Construct a [`Vector2`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (i32, i32) {
    /// Convert the [`Vector2`] into an `(x, y)` pair.
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vector2::new(2, -3);
        let b = Vector2::new(-1, 5);
        assert_eq!(a.add(b), Vector2::new(1, 2));
        assert_eq!(a + b, Vector2::new(1, 2));
        assert_eq!(a.scale(3), Vector2::new(6, -9));
        assert_eq!(a * 0, Vector2::ZERO);
        assert!(a.equals(Vector2::new(2, -3)));
        assert!(!a.equals(b));
    }

    #[test]
    fn unit_offsets() {
        assert_eq!(Vector2::from(Direction::North), Vector2::new(0, 1));
        assert_eq!(Vector2::from(Direction::South), Vector2::new(0, -1));
        assert_eq!(Vector2::from(Direction::East), Vector2::new(1, 0));
        assert_eq!(Vector2::from(Direction::West), Vector2::new(-1, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(4, -1).to_string(), "(4, -1)");
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_uniform_stays_in_range() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..500 {
            let v = Vector2::random_uniform(&mut rng, 0, 3);
            assert!((0..=3).contains(&v.x) && (0..=3).contains(&v.y));
            seen_low |= v.x == 0 || v.y == 0;
            seen_high |= v.x == 3 || v.y == 3;
        }
        assert!(seen_low && seen_high);
    }
}
