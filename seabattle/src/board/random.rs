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
//! Random ship placement.

use log::{debug, trace, warn};
use rand::Rng;

use crate::{
    board::{Board, Direction, RandomPlaceError, Vector2, DEFAULT_PLACEMENT_ATTEMPTS},
    config::Fleet,
    ships::ShipId,
};

impl Board {
    /// Place a ship of `length` at a random head and direction, retrying rejected
    /// placements up to [`DEFAULT_PLACEMENT_ATTEMPTS`] times.
    pub fn place_ship_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<ShipId, RandomPlaceError> {
        self.place_ship_random_with_attempts(rng, length, DEFAULT_PLACEMENT_ATTEMPTS)
    }

    /// Place a ship of `length` by drawing a uniformly random head on the board and a
    /// uniformly random direction until a placement succeeds or `max_attempts`
    /// placements have been rejected. Each attempt is independent of the others.
    pub fn place_ship_random_with_attempts<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
        max_attempts: usize,
    ) -> Result<ShipId, RandomPlaceError> {
        if length == 0 || length > self.size() {
            warn!("a {} ship can never fit on a {}x{} board", length, self.size(), self.size());
            return Err(RandomPlaceError::new(length, 0));
        }
        // MAX_SIZE keeps this from truncating.
        let high = self.size() as i32 - 1;
        for attempt in 1..=max_attempts {
            let head = Vector2::random_uniform(rng, 0, high);
            let direction: Direction = rng.gen();
            match self.place_ship(length, head, direction) {
                Ok(id) => {
                    debug!("random placement of {} took {} attempt(s)", id, attempt);
                    return Ok(id);
                }
                Err(err) => trace!("attempt {}: {}", attempt, err),
            }
        }
        warn!(
            "gave up placing a {} ship after {} attempts",
            length, max_attempts
        );
        Err(RandomPlaceError::new(length, max_attempts))
    }

    /// Randomly place every ship of `fleet`, in order. Stops at the first ship that does
    /// not fit; ships placed before it stay on the board.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &Fleet,
        max_attempts: usize,
    ) -> Result<Vec<ShipId>, RandomPlaceError> {
        fleet
            .iter()
            .map(|length| self.place_ship_random_with_attempts(rng, length, max_attempts))
            .collect()
    }
}
