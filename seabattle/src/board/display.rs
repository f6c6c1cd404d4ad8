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
use std::fmt;

use crate::board::{Board, GLYPH_WIDTH};

/// Number of decimal digits needed to print `n`.
fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

impl fmt::Display for Board {
    /// Draws a header of column indices, then one line per row: the row index followed
    /// by one glyph per cell. There is no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = digits(self.size() - 1);
        write!(f, "{:width$}", "", width = label + 2)?;
        for x in 0..self.size() {
            write!(f, "{:^width$}", x, width = GLYPH_WIDTH)?;
        }
        for (y, row) in self.iter_rows().enumerate() {
            writeln!(f)?;
            write!(f, "{:>width$}) ", y, width = label)?;
            for state in row {
                f.write_str(state.glyph(self.is_hidden()))?;
            }
        }
        Ok(())
    }
}
