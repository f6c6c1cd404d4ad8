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
//! The game board: a square grid of cells and the ships placed on it.

use log::{debug, trace, warn};

use crate::ships::{Ship, ShipId};

use self::grid::Grid;
pub use self::{
    cell::{render, CellState, GLYPH_WIDTH},
    common::{Direction, Vector2},
    errors::{
        CannotHitReason, CannotPlaceReason, HitError, OutOfBounds, ParseDirectionError,
        PlaceError, RandomPlaceError,
    },
};

mod cell;
pub mod common;
mod display;
mod errors;
mod grid;
#[cfg(feature = "rng_gen")]
mod random;

/// Largest supported side length. Keeps every coordinate a ship can reach from an
/// in-bounds head representable as an `i32`.
pub const MAX_SIZE: usize = 1 << 15;

/// Number of placements random placement tries per ship before giving up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Result of a successful shot on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The shot sank the ship with the given ID, and other ships remain afloat.
    Sunk(ShipId),
    /// The shot sank the ship with the given ID, and it was the last one afloat.
    Defeated(ShipId),
}

impl ShotOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) | ShotOutcome::Defeated(id) => Some(id),
        }
    }

    /// True if the shot sank a ship.
    pub fn is_sunk(&self) -> bool {
        match self {
            ShotOutcome::Sunk(_) | ShotOutcome::Defeated(_) => true,
            ShotOutcome::Miss | ShotOutcome::Hit(_) => false,
        }
    }
}

/// A square board holding a fleet of ships.
///
/// Invariants maintained by [`place_ship`][Board::place_ship] and
/// [`hit_cell`][Board::hit_cell]:
/// - every cell covered by a ship is `Occupied`, `Hit`, or `Sunk`, and is covered by
///   exactly one ship;
/// - `Miss` cells were never covered by a ship;
/// - the cells of a ship are all `Sunk` exactly when the ship is sunk.
///
/// [`set_cell`][Board::set_cell] writes states directly and can break these.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell states plus the ship covering each cell.
    grid: Grid,

    /// Ships in placement order. A [`ShipId`] indexes into this.
    ships: Vec<Ship>,

    /// Whether rendering should conceal untouched ships. Has no effect on game logic.
    hidden: bool,
}

impl Board {
    /// Create an empty `size` x `size` board.
    /// Panics if `size` is 0 or larger than [`MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(board) => board,
            None => panic!("board size must be in 1..={}, got {}", MAX_SIZE, size),
        }
    }

    /// Create an empty `size` x `size` board.
    /// Returns `None` if `size` is 0 or larger than [`MAX_SIZE`].
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_SIZE {
            None
        } else {
            Some(Self {
                grid: Grid::new(size),
                ships: Vec::new(),
                hidden: false,
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Ships on the board in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship with the given ID, if it was placed on this board.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// The ship covering `pos`, if any.
    pub fn ship_at(&self, pos: Vector2) -> Result<Option<ShipId>, OutOfBounds> {
        self.grid.get(pos).map(|cell| cell.ship)
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Returns true if at least one ship was placed and every ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Whether rendering conceals ships that have not been hit.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether rendering conceals ships that have not been hit.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Flip between hidden and visible rendering.
    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Get the state of the cell at `pos`.
    pub fn get_cell(&self, pos: Vector2) -> Result<CellState, OutOfBounds> {
        self.grid.get(pos).map(|cell| cell.state)
    }

    /// Overwrite the state of the cell at `pos`. Nothing changes if `pos` is out of
    /// bounds.
    ///
    /// This is a raw write: it does not touch ship ownership or health, so a state that
    /// disagrees with the ships on the board breaks the board's invariants.
    pub fn set_cell(&mut self, pos: Vector2, state: CellState) -> Result<(), OutOfBounds> {
        self.grid.get_mut(pos).map(|cell| cell.state = state)
    }

    /// Place a straight ship of `length` cells starting at `head` and extending along
    /// `direction`. Every target cell must be on the board and `Unknown`; otherwise the
    /// board is left untouched and the reason is returned.
    pub fn place_ship(
        &mut self,
        length: usize,
        head: Vector2,
        direction: Direction,
    ) -> Result<ShipId, PlaceError> {
        let reject = |reason| Err(PlaceError::new(reason, length, head, direction));
        if length == 0 {
            return reject(CannotPlaceReason::ZeroLength);
        }
        // Check the head and length before walking the cells so the walk stays within a
        // board's width of the grid.
        if length > self.size() || self.grid.get(head).is_err() {
            return reject(CannotPlaceReason::OutOfBounds);
        }
        let ship = Ship::new(head, direction, length);
        for coord in ship.cells() {
            match self.get_cell(coord) {
                Err(_) => return reject(CannotPlaceReason::OutOfBounds),
                Ok(CellState::Unknown) => {}
                Ok(_) => return reject(CannotPlaceReason::AlreadyOccupied),
            }
        }
        // Every cell was checked above, so indexing cannot panic.
        let id = ShipId(self.ships.len());
        for coord in ship.cells() {
            let cell = &mut self.grid[coord];
            cell.state = CellState::Occupied;
            cell.ship = Some(id);
        }
        debug!("placed ship {}: {}", id, ship);
        self.ships.push(ship);
        Ok(id)
    }

    /// Fire at the cell at `pos`.
    ///
    /// Open water becomes `Miss`. A ship cell becomes `Hit` and damages its ship; if that
    /// sinks the ship, all of the ship's cells become `Sunk`. Cells that were already
    /// resolved are rejected with [`CannotHitReason::AlreadyTargeted`] and left as they
    /// are.
    ///
    /// Panics if an `Occupied` cell has no ship, which means the grid and ships are out
    /// of sync.
    pub fn hit_cell(&mut self, pos: Vector2) -> Result<ShotOutcome, HitError> {
        let cell = self.grid.get_mut(pos)?;
        match cell.state {
            CellState::Unknown => {
                cell.state = CellState::Miss;
                trace!("miss at {}", pos);
                return Ok(ShotOutcome::Miss);
            }
            CellState::Occupied => {}
            state @ CellState::Miss | state @ CellState::Hit | state @ CellState::Sunk => {
                warn!("cell {} was already targeted ({:?})", pos, state);
                return Err(HitError::new(CannotHitReason::AlreadyTargeted, pos));
            }
        }
        let id = match cell.ship {
            Some(id) => id,
            None => panic!("cell {} is occupied but no ship covers it", pos),
        };
        cell.state = CellState::Hit;

        let ship = &mut self.ships[id.0];
        debug_assert!(ship.occupies_cell(pos));
        let sunk = match ship.apply_hit() {
            Ok(sunk) => sunk,
            Err(err) => panic!("ship {} was hit at {} after sinking: {}", id, pos, err),
        };
        if !sunk {
            trace!("hit ship {} at {}, {} hp left", id, pos, ship.health());
            return Ok(ShotOutcome::Hit(id));
        }
        for coord in ship.cells() {
            self.grid[coord].state = CellState::Sunk;
        }
        debug!("sunk ship {}: {}", id, ship);
        if self.all_sunk() {
            Ok(ShotOutcome::Defeated(id))
        } else {
            Ok(ShotOutcome::Sunk(id))
        }
    }

    /// Remove every ship and shot, leaving an empty board of the same size. The hidden
    /// flag is kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.ships.clear();
    }

    /// Get an iterator over the board's rows, top (`y = 0`) first. Each row is an
    /// iterator over its cell states, left (`x = 0`) first.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        self.grid
            .rows()
            .map(|row| row.iter().map(|cell| cell.state))
    }

    /// Draw the whole board as text. Same as the [`Display`][std::fmt::Display] output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(board: &Board) -> Vec<CellState> {
        board.iter_rows().flatten().collect()
    }

    #[test]
    fn new_board_is_open_water() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert!(board.ships().is_empty());
        assert!(states(&board).iter().all(|&s| s == CellState::Unknown));
        assert!(!board.all_sunk());
    }

    #[test]
    fn size_limits() {
        assert!(Board::try_new(0).is_none());
        assert!(Board::try_new(MAX_SIZE + 1).is_none());
        assert!(Board::try_new(1).is_some());
    }

    #[test]
    #[should_panic]
    fn zero_size_panics() {
        Board::new(0);
    }

    #[test]
    fn cell_access_bounds() {
        let mut board = Board::new(3);
        for &(x, y) in &[(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            let pos = Vector2::new(x, y);
            let err = board.get_cell(pos).unwrap_err();
            assert_eq!(err.coord(), pos);
            assert_eq!(err.size(), 3);
            assert!(board.set_cell(pos, CellState::Miss).is_err());
        }
        assert!(states(&board).iter().all(|&s| s == CellState::Unknown));

        board.set_cell(Vector2::new(2, 1), CellState::Miss).unwrap();
        assert_eq!(board.get_cell(Vector2::new(2, 1)), Ok(CellState::Miss));
        assert_eq!(board.get_cell(Vector2::new(1, 2)), Ok(CellState::Unknown));
    }

    #[test]
    fn placement_marks_cells_and_owner() {
        let mut board = Board::new(5);
        let id = board
            .place_ship(3, Vector2::new(1, 1), Direction::North)
            .unwrap();
        assert_eq!(id.index(), 0);
        for y in 1..4 {
            let pos = Vector2::new(1, y);
            assert_eq!(board.get_cell(pos), Ok(CellState::Occupied));
            assert_eq!(board.ship_at(pos), Ok(Some(id)));
        }
        assert_eq!(board.get_cell(Vector2::new(1, 4)), Ok(CellState::Unknown));
        assert_eq!(board.ship(id).unwrap().len(), 3);
    }

    #[test]
    fn placement_rejections() {
        let mut board = Board::new(5);
        board
            .place_ship(2, Vector2::new(2, 2), Direction::East)
            .unwrap();
        let before = board.grid.clone();

        let cases = [
            (0, Vector2::new(0, 0), Direction::East, CannotPlaceReason::ZeroLength),
            (6, Vector2::new(0, 0), Direction::East, CannotPlaceReason::OutOfBounds),
            (3, Vector2::new(-1, 0), Direction::East, CannotPlaceReason::OutOfBounds),
            (3, Vector2::new(3, 0), Direction::East, CannotPlaceReason::OutOfBounds),
            (2, Vector2::new(0, 0), Direction::South, CannotPlaceReason::OutOfBounds),
            (3, Vector2::new(3, 0), Direction::North, CannotPlaceReason::AlreadyOccupied),
            (
                3,
                Vector2::new(i32::MAX, 0),
                Direction::East,
                CannotPlaceReason::OutOfBounds,
            ),
        ];
        for &(len, head, dir, reason) in cases.iter() {
            let err = board.place_ship(len, head, dir).unwrap_err();
            assert_eq!(err.reason(), reason, "{}", err);
            assert_eq!(err.length(), len);
            assert_eq!(err.head(), head);
            assert_eq!(err.direction(), dir);
            assert_eq!(board.grid, before);
            assert_eq!(board.ships().len(), 1);
        }
    }

    #[test]
    fn placement_refuses_shot_water() {
        let mut board = Board::new(4);
        board.hit_cell(Vector2::new(1, 0)).unwrap();
        let err = board
            .place_ship(2, Vector2::new(0, 0), Direction::East)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    }

    #[test]
    fn hit_resolution() {
        let mut board = Board::new(6);
        let a = board
            .place_ship(2, Vector2::new(0, 0), Direction::East)
            .unwrap();
        let b = board
            .place_ship(1, Vector2::new(5, 5), Direction::West)
            .unwrap();

        assert_eq!(board.hit_cell(Vector2::new(3, 3)), Ok(ShotOutcome::Miss));
        assert_eq!(board.get_cell(Vector2::new(3, 3)), Ok(CellState::Miss));

        assert_eq!(board.hit_cell(Vector2::new(1, 0)), Ok(ShotOutcome::Hit(a)));
        assert_eq!(board.get_cell(Vector2::new(1, 0)), Ok(CellState::Hit));
        assert_eq!(board.get_cell(Vector2::new(0, 0)), Ok(CellState::Occupied));

        assert_eq!(board.hit_cell(Vector2::new(0, 0)), Ok(ShotOutcome::Sunk(a)));
        assert_eq!(board.get_cell(Vector2::new(0, 0)), Ok(CellState::Sunk));
        assert_eq!(board.get_cell(Vector2::new(1, 0)), Ok(CellState::Sunk));
        assert_eq!(board.ships_afloat(), 1);
        assert!(!board.all_sunk());

        assert_eq!(
            board.hit_cell(Vector2::new(5, 5)),
            Ok(ShotOutcome::Defeated(b))
        );
        assert!(board.all_sunk());
        assert_eq!(board.ships_afloat(), 0);
    }

    #[test]
    fn repeat_targets_are_rejected_without_change() {
        let mut board = Board::new(4);
        board
            .place_ship(2, Vector2::new(0, 0), Direction::North)
            .unwrap();
        board
            .place_ship(2, Vector2::new(3, 0), Direction::North)
            .unwrap();
        board.hit_cell(Vector2::new(2, 2)).unwrap();
        board.hit_cell(Vector2::new(0, 0)).unwrap();
        board.hit_cell(Vector2::new(3, 0)).unwrap();
        board.hit_cell(Vector2::new(3, 1)).unwrap();

        for &(x, y) in &[(2, 2), (0, 0), (3, 0), (3, 1)] {
            let grid = board.grid.clone();
            let ships = board.ships.clone();
            let err = board.hit_cell(Vector2::new(x, y)).unwrap_err();
            assert_eq!(err.reason(), CannotHitReason::AlreadyTargeted);
            assert_eq!(err.coord(), Vector2::new(x, y));
            assert_eq!(board.grid, grid);
            assert_eq!(board.ships, ships);
        }
    }

    #[test]
    fn hit_out_of_bounds() {
        let mut board = Board::new(2);
        let err = board.hit_cell(Vector2::new(2, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotHitReason::OutOfBounds);
        assert_eq!(err.coord(), Vector2::new(2, 0));
        assert!(states(&board).iter().all(|&s| s == CellState::Unknown));
    }

    #[test]
    #[should_panic(expected = "no ship covers it")]
    fn orphaned_occupied_cell_panics() {
        let mut board = Board::new(2);
        board.set_cell(Vector2::new(0, 0), CellState::Occupied).unwrap();
        let _ = board.hit_cell(Vector2::new(0, 0));
    }

    #[test]
    fn reset_clears_everything_but_visibility() {
        let mut board = Board::new(3);
        board
            .place_ship(2, Vector2::new(0, 0), Direction::East)
            .unwrap();
        board.hit_cell(Vector2::new(2, 2)).unwrap();
        board.set_hidden(true);
        board.reset();
        assert!(board.ships().is_empty());
        assert!(states(&board).iter().all(|&s| s == CellState::Unknown));
        assert!(board.is_hidden());
        assert_eq!(board.ship_at(Vector2::new(0, 0)), Ok(None));
    }

    #[test]
    fn visibility_toggle() {
        let mut board = Board::new(1);
        assert!(!board.is_hidden());
        board.toggle_hidden();
        assert!(board.is_hidden());
        board.toggle_hidden();
        assert!(!board.is_hidden());
    }
}
