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
//! Types that make up the game board.

use std::fmt;

use log::debug;

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::{Adjacency, Dimensions, Neighbors},
    errors::{CannotFireReason, CannotPlaceReason, FireError, PlaceError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// State of a single cell. `Hit` and `Miss` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water that has not been fired on.
    Empty,
    /// Part of a ship that has not been hit.
    Ship,
    /// Part of a ship that has been hit.
    Hit,
    /// Open water that has been fired on.
    Miss,
}

/// Result of firing on a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FireOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot hit part of a ship.
    Hit,
}

impl fmt::Display for FireOutcome {
    /// Renders as the verb used in turn reports: "hits" or "misses".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            FireOutcome::Miss => "misses",
            FireOutcome::Hit => "hits",
        })
    }
}

/// What a viewer is allowed to see in a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Open water, or a ship hidden from the viewer.
    Water,
    /// An un-hit ship cell.
    Ship,
    /// A hit ship cell.
    Hit,
    /// A missed shot.
    Miss,
}

/// A labelled snapshot of a board, row by row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderedBoard {
    label: String,
    rows: Vec<Vec<CellView>>,
}

impl RenderedBoard {
    /// Label the board was rendered with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[Vec<CellView>] {
        &self.rows
    }
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cell states.
    grid: Grid,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Buffer rule applied when placing ships.
    adjacency: Adjacency,
}

impl Board {
    /// Create an empty board with the default [`Adjacency`].
    pub fn new(dim: Dimensions) -> Self {
        Self::with_adjacency(dim, Adjacency::default())
    }

    /// Create an empty board that places ships under the given [`Adjacency`] rule.
    pub fn with_adjacency(dim: Dimensions, adjacency: Adjacency) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            adjacency,
        }
    }

    /// Create a board holding the given ships, placed in order. Fails on the first ship
    /// that cannot be placed.
    pub fn with_ships<S>(dim: Dimensions, ships: S) -> Result<Self, PlaceError>
    where
        S: IntoIterator<Item = Ship>,
    {
        Self::with_ships_and_adjacency(dim, ships, Adjacency::default())
    }

    /// Like [`Board::with_ships`], with an explicit [`Adjacency`] rule.
    pub fn with_ships_and_adjacency<S>(
        dim: Dimensions,
        ships: S,
        adjacency: Adjacency,
    ) -> Result<Self, PlaceError>
    where
        S: IntoIterator<Item = Ship>,
    {
        let mut board = Self::with_adjacency(dim, adjacency);
        for ship in ships {
            board.add_ship(ship)?;
        }
        Ok(board)
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// The buffer rule this board places ships under.
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Ships on this board, in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// State of the cell at the given coordinate, or `None` if it is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord)
    }

    /// Place a ship. Either every cell of the ship is marked or, on error, the board is
    /// left untouched and the ship is handed back inside the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        let dim = self.grid.dim;
        if let Some(&coord) = ship.points().iter().find(|&&p| !dim.contains(p)) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, coord, ship));
        }
        if let Some(&coord) = ship.points().iter().find(|&&p| self.has_neighbour(p)) {
            return Err(PlaceError::new(CannotPlaceReason::Adjacent, coord, ship));
        }
        // Already ensured that every position is valid and free.
        for &coord in ship.points() {
            self.grid[coord] = CellState::Ship;
        }
        debug!("placed ship of length {} at {:?}", ship.len(), ship.points());
        self.ships.push(ship);
        Ok(())
    }

    /// Returns true if the cell itself, or any cell adjacent to it under this board's
    /// [`Adjacency`], holds an un-hit ship cell.
    pub fn has_neighbour(&self, coord: Coordinate) -> bool {
        self.grid.ship_here(coord)
            || self
                .grid
                .dim
                .neighbors(coord, self.adjacency)
                .any(|n| self.grid.ship_here(n))
    }

    /// Returns true if the cell is on the board and has not been fired on yet.
    pub fn can_fire(&self, coord: Coordinate) -> bool {
        matches!(
            self.grid.get(coord),
            Some(CellState::Empty) | Some(CellState::Ship)
        )
    }

    /// Fire a shot at the given cell. Callers are expected to check
    /// [`can_fire`](Board::can_fire) first; firing on a resolved or out of bounds cell
    /// is an error and leaves the board unchanged.
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireOutcome, FireError> {
        let cell = self
            .grid
            .get_mut(coord)
            .ok_or_else(|| FireError::new(CannotFireReason::OutOfBounds, coord))?;
        let outcome = match *cell {
            CellState::Empty => {
                *cell = CellState::Miss;
                FireOutcome::Miss
            }
            CellState::Ship => {
                *cell = CellState::Hit;
                FireOutcome::Hit
            }
            CellState::Hit | CellState::Miss => {
                return Err(FireError::new(CannotFireReason::AlreadyFired, coord))
            }
        };
        debug!("shot at {} {}", coord, outcome);
        Ok(outcome)
    }

    /// Returns true while at least one ship cell has not been hit.
    pub fn has_live_ships(&self) -> bool {
        self.grid.cells.iter().any(|&cell| cell == CellState::Ship)
    }

    /// Number of ship cells that have not been hit.
    pub fn live_cells(&self) -> usize {
        self.grid.count(CellState::Ship)
    }

    /// Number of cells that have been fired on.
    pub fn fired_cells(&self) -> usize {
        self.grid.count(CellState::Hit) + self.grid.count(CellState::Miss)
    }

    /// Take a labelled snapshot of the board. With `hide_ships`, un-hit ship cells show
    /// as water; hits and misses are always shown.
    pub fn render(&self, label: &str, hide_ships: bool) -> RenderedBoard {
        let grid = &self.grid;
        let rows = grid
            .dim
            .iter_coordinates()
            .map(|row| {
                row.map(|coord| match grid[coord] {
                    CellState::Empty => CellView::Water,
                    CellState::Ship if hide_ships => CellView::Water,
                    CellState::Ship => CellView::Ship,
                    CellState::Hit => CellView::Hit,
                    CellState::Miss => CellView::Miss,
                })
                .collect()
            })
            .collect();
        RenderedBoard {
            label: label.to_owned(),
            rows,
        }
    }
}
