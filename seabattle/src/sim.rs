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
//! Whole-board simulation: place a fleet at random, then fire at every cell.

use std::time::{Duration, Instant};

use log::info;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, RandomPlaceError, ShotOutcome, Vector2},
    config::{ConfigError, GameConfig},
};

/// Error returned when a simulation cannot be set up.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] RandomPlaceError),
}

/// Tally of shots fired during a simulation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ShotTally {
    /// Shots that hit open water.
    pub misses: usize,
    /// Shots that hit a ship without sinking it.
    pub hits: usize,
    /// Shots that sank a ship.
    pub sinks: usize,
}

impl ShotTally {
    /// Count one shot.
    pub fn record(&mut self, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => self.misses += 1,
            ShotOutcome::Hit(_) => self.hits += 1,
            ShotOutcome::Sunk(_) | ShotOutcome::Defeated(_) => self.sinks += 1,
        }
    }

    /// Every shot recorded.
    pub fn shots(&self) -> usize {
        self.misses + self.hits + self.sinks
    }
}

/// Final state of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// The board after every cell was fired at.
    pub board: Board,
    /// What the shots did.
    pub tally: ShotTally,
    /// Wall time spent placing ships and firing.
    pub elapsed: Duration,
}

/// Set up a board from `config`, place its fleet at random and fire at every cell in
/// row-major order.
pub fn simulate<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<SimulationReport, SimulationError> {
    config.validate()?;
    let start = Instant::now();

    // validate() checked the size, so this cannot panic.
    let mut board = Board::new(config.size);
    board.set_hidden(config.hidden);
    board.place_fleet(rng, &config.fleet, config.max_attempts)?;

    let mut tally = ShotTally::default();
    let size = config.size as i32;
    for y in 0..size {
        for x in 0..size {
            match board.hit_cell(Vector2::new(x, y)) {
                Ok(outcome) => tally.record(outcome),
                // Every cell is fired at exactly once on a fresh board.
                Err(err) => unreachable!("{}", err),
            }
        }
    }

    let elapsed = start.elapsed();
    info!(
        "simulated {}x{} board: {} misses, {} hits, {} sinks in {:?}",
        config.size, config.size, tally.misses, tally.hits, tally.sinks, elapsed
    );
    Ok(SimulationReport {
        board,
        tally,
        elapsed,
    })
}
