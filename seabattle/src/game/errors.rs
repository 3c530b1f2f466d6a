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
use thiserror::Error;

use crate::{
    board::{Coordinate, FireError, PlaceError},
    fleet::FleetError,
    game::Side,
    ships::ShipError,
};

/// Error raised while building a game. Nothing has been played when this happens.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A ship in the fixed fleet layout is malformed.
    #[error(transparent)]
    Ship(#[from] ShipError),
    /// A ship in the fixed fleet layout could not be placed.
    #[error(transparent)]
    Placement(#[from] PlaceError),
    /// The fleet composition cannot be placed.
    #[error("invalid fleet: {0}")]
    Fleet(#[from] FleetError),
    /// The fixed fleet layout holds different ships than the configured fleet.
    #[error("the fixed layout has ships {layout:?} but the fleet is {fleet:?}")]
    LayoutMismatch {
        /// Ship lengths in the fixed layout, longest first.
        layout: Vec<usize>,
        /// Configured ship lengths, longest first.
        fleet: Vec<usize>,
    },
    /// The fixed fleet layout does not fit on the configured board.
    #[error("the fixed layout reaches {coord}, outside the {width}x{height} board")]
    LayoutOutOfBounds {
        /// First cell of the layout that is off the board.
        coord: Coordinate,
        /// Width of the configured board.
        width: usize,
        /// Height of the configured board.
        height: usize,
    },
}

/// Error returned when a turn could not be taken.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The target cannot be fired on. The turn was not consumed; pick another target.
    #[error("you can not fire there: {0}")]
    Rejected(FireError),

    /// The given side tried to move while it was not its turn.
    #[error("it is not the {0}'s turn")]
    OutOfTurn(Side),

    /// The game has already been decided.
    #[error("the game is over, {0} won")]
    GameOver(Side),

    /// Every cell of the target board has already been fired on.
    #[error("there is nothing left to fire at")]
    NoTargets,

    /// A shot was fired at a cell that had already been checked as free. This is a bug
    /// in the turn logic rather than a bad move.
    #[error("internal fault: {0}")]
    Fault(#[from] FireError),
}
