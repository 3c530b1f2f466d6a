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
//! Fleet layouts: the fixed human fleet and random fleet generation.

use log::{debug, trace, warn};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Adjacency, Board, Dimensions},
    config::{HEIGHT, STANDARD_FLEET, STANDARD_LAYOUT, WIDTH},
    ships::{Ship, ShipError},
};

/// Number of random placements tried for a single ship before the generator gives up
/// on the current board and starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Number of fresh boards tried before the fleet is declared unplaceable.
pub const MAX_RESTARTS: usize = 10;

/// Error returned when a fleet composition can never be placed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The fleet has no ships.
    #[error("the fleet has no ships")]
    Empty,
    /// A ship length of 0 was requested.
    #[error("ships must have at least one cell")]
    ZeroLength,
    /// A ship is longer than both sides of the board.
    #[error("a ship of length {length} does not fit on a {width}x{height} board")]
    TooLong {
        /// Length of the ship that does not fit.
        length: usize,
        /// Width of the board.
        width: usize,
        /// Height of the board.
        height: usize,
    },
    /// The ships together cover more cells than the board has.
    #[error("the fleet needs {cells} cells but the board only has {available}")]
    TooDense {
        /// Cells covered by the whole fleet.
        cells: usize,
        /// Cells on the board.
        available: usize,
    },
    /// Every attempt to place the fleet failed, so it most likely cannot be placed under
    /// the board's spacing rule.
    #[error("could not place fleet {fleet:?} after {restarts} fresh boards")]
    Unplaceable {
        /// Ship lengths that were being placed.
        fleet: Vec<usize>,
        /// Number of boards that were tried.
        restarts: usize,
    },
}

/// Build the designer-authored human fleet.
pub fn standard_layout() -> Result<Vec<Ship>, ShipError> {
    STANDARD_LAYOUT
        .iter()
        .map(|points| Ship::from_one_based(points))
        .collect()
}

/// Places a fixed fleet composition at random positions on an empty board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetGenerator {
    dim: Dimensions,
    /// Ship lengths, longest first.
    fleet: Vec<usize>,
    adjacency: Adjacency,
}

impl FleetGenerator {
    /// Create a generator for the given fleet with the default [`Adjacency`].
    pub fn new(dim: Dimensions, fleet: &[usize]) -> Result<Self, FleetError> {
        Self::with_adjacency(dim, fleet, Adjacency::default())
    }

    /// Create a generator for the given fleet, placing ships under `adjacency`.
    pub fn with_adjacency(
        dim: Dimensions,
        fleet: &[usize],
        adjacency: Adjacency,
    ) -> Result<Self, FleetError> {
        if fleet.is_empty() {
            return Err(FleetError::Empty);
        }
        for &length in fleet {
            if length == 0 {
                return Err(FleetError::ZeroLength);
            }
            if length > dim.width() && length > dim.height() {
                return Err(FleetError::TooLong {
                    length,
                    width: dim.width(),
                    height: dim.height(),
                });
            }
        }
        let cells: usize = fleet.iter().sum();
        if cells > dim.total_size() {
            return Err(FleetError::TooDense {
                cells,
                available: dim.total_size(),
            });
        }

        let mut fleet = fleet.to_vec();
        fleet.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self {
            dim,
            fleet,
            adjacency,
        })
    }

    /// The standard fleet on the standard board.
    pub fn standard() -> Self {
        Self {
            dim: Dimensions::new(WIDTH, HEIGHT),
            fleet: STANDARD_FLEET.to_vec(),
            adjacency: Adjacency::default(),
        }
    }

    /// Ship lengths this generator places, in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Dimensions of the boards this generator produces.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Generate a board holding the whole fleet. Each ship is resampled until the board
    /// accepts it. A ship that runs out of attempts throws the board away, and after
    /// [`MAX_RESTARTS`] boards the fleet is reported as unplaceable.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Board, FleetError> {
        for restart in 0..MAX_RESTARTS {
            if let Some(board) = self.try_generate(rng) {
                debug!("generated fleet {:?}", self.fleet);
                return Ok(board);
            }
            warn!(
                "could not place fleet {:?} within {} attempts per ship (board {} of {})",
                self.fleet,
                MAX_PLACEMENT_ATTEMPTS,
                restart + 1,
                MAX_RESTARTS
            );
        }
        Err(FleetError::Unplaceable {
            fleet: self.fleet.clone(),
            restarts: MAX_RESTARTS,
        })
    }

    /// One pass over the fleet. Returns `None` if some ship ran out of attempts.
    fn try_generate(&self, rng: &mut impl Rng) -> Option<Board> {
        let mut board = Board::with_adjacency(self.dim, self.adjacency);
        'ships: for &length in &self.fleet {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                match board.add_ship(Ship::random(rng, length, &self.dim)) {
                    Ok(()) => continue 'ships,
                    Err(err) => trace!("rejected random ship: {}", err),
                }
            }
            return None;
        }
        Some(board)
    }
}
