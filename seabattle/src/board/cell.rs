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
//! State of a single grid cell and how it is drawn.

/// Placeholder for water nobody has fired at, and for ships hidden from the viewer.
const UNKNOWN_GLYPH: &str = " . ";
const MISS_GLYPH: &str = " O ";
const HIT_GLYPH: &str = "[X]";
const SHIP_GLYPH: &str = "[ ]";
const SUNK_GLYPH: &str = "{X}";

/// Width in characters of every glyph returned by [`render`].
pub const GLYPH_WIDTH: usize = 3;

/// Visible and logical state of one cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Never targeted, no ship.
    Unknown,
    /// Targeted, no ship.
    Miss,
    /// Targeted, belongs to a ship that is still afloat.
    Hit,
    /// Holds a ship and has not been targeted.
    Occupied,
    /// Belongs to a ship whose every cell has been hit.
    Sunk,
}

impl CellState {
    /// Glyph for this state. See [`render`].
    pub fn glyph(self, hidden: bool) -> &'static str {
        render(self, hidden)
    }

    /// Whether a shot has already resolved this cell.
    pub fn is_targeted(self) -> bool {
        match self {
            CellState::Miss | CellState::Hit | CellState::Sunk => true,
            CellState::Unknown | CellState::Occupied => false,
        }
    }

    /// Whether a ship covers this cell.
    pub fn has_ship(self) -> bool {
        match self {
            CellState::Occupied | CellState::Hit | CellState::Sunk => true,
            CellState::Unknown | CellState::Miss => false,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

/// Map a cell state to its 3-character glyph. When `hidden` is set, ships that have not
/// been hit are drawn as open water. Sunk ships are always shown.
pub fn render(state: CellState, hidden: bool) -> &'static str {
    match state {
        CellState::Unknown => UNKNOWN_GLYPH,
        CellState::Miss => MISS_GLYPH,
        CellState::Hit => HIT_GLYPH,
        CellState::Occupied if hidden => UNKNOWN_GLYPH,
        CellState::Occupied => SHIP_GLYPH,
        CellState::Sunk => SUNK_GLYPH,
    }
}
