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
//! Cell storage backing a [`Board`][crate::board::Board].

use std::ops::{Index, IndexMut};

use crate::board::{CellState, Coordinate, Dimensions};

/// Row-major grid of cell states.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[CellState]>,
}

impl Grid {
    /// Build a grid with every cell [`CellState::Empty`].
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| CellState::Empty).collect();
        Self { dim, cells }
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut CellState> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Returns true if the coordinate is on the board and holds an un-hit ship cell.
    pub(super) fn ship_here(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(CellState::Ship)
    }

    /// Count the cells currently in the given state.
    pub(super) fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match self.dim.try_linearize(coord) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for {:?}", coord, self.dim),
        }
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let dim = self.dim;
        match self.get_mut(coord) {
            Some(cell) => cell,
            None => panic!("{} is out of bounds for {:?}", coord, dim),
        }
    }
}
