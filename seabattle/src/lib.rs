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
//! Single-board Battleship.
//!
//! A [`Board`][board::Board] is a square grid of cells holding straight
//! [`Ship`][ships::Ship]s. Ships are placed directly with
//! [`place_ship`][board::Board::place_ship] or at random, and cells are fired at with
//! [`hit_cell`][board::Board::hit_cell], which reports misses, hits and sinks and marks
//! every cell of a sunk ship.
//!
//! ```
//! use seabattle::board::{Board, CellState, Direction, ShotOutcome, Vector2};
//!
//! let mut board = Board::new(10);
//! let id = board.place_ship(2, Vector2::new(0, 0), Direction::East).unwrap();
//! assert_eq!(board.hit_cell(Vector2::new(0, 0)).unwrap(), ShotOutcome::Hit(id));
//! assert_eq!(board.hit_cell(Vector2::new(1, 0)).unwrap(), ShotOutcome::Defeated(id));
//! assert_eq!(board.get_cell(Vector2::new(0, 0)).unwrap(), CellState::Sunk);
//! ```
//!
//! Random placement and the [`sim`] driver need the `rng_gen` feature, which is on by
//! default.

pub mod board;
pub mod config;
pub mod ships;
#[cfg(feature = "rng_gen")]
pub mod sim;
