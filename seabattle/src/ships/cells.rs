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
use std::iter::FusedIterator;

use crate::board::Vector2;

/// Iterator over the cells of a [`Ship`][crate::ships::Ship], head first.
#[derive(Debug, Clone)]
pub struct Cells {
    next: Vector2,
    step: Vector2,
    remaining: usize,
}

impl Cells {
    pub(super) fn new(head: Vector2, step: Vector2, len: usize) -> Self {
        Self {
            next: head,
            step,
            remaining: len,
        }
    }
}

impl Iterator for Cells {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = self.next;
        // Don't step past the tail, so the offset never leaves the range the ship covers.
        if self.remaining > 0 {
            self.next = self.next + self.step;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}
