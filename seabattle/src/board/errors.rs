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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells lies outside the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One of the ship's cells is occupied by, or touches, a ship already placed.
    #[error("the ship touches a ship that was already placed")]
    Adjacent,
}

/// Error caused when attempting to place a ship in an invalid position. Carries the
/// rejected ship so the caller can get it back.
#[derive(Error)]
#[error("bad ship placement {coord}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    coord: Coordinate,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, the offending cell and the ship.
    pub(super) fn new(reason: CannotPlaceReason, coord: Coordinate, ship: Ship) -> Self {
        Self {
            reason,
            coord,
            ship,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The first cell of the ship that could not be placed.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Get a reference to the ship whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be fired on.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotFireReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target is out of bounds")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("the target was already fired on")]
    AlreadyFired,
}

/// Error returned when trying to fire on a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not fire at {coord}: {reason}")]
pub struct FireError {
    /// Reason why the cell could not be fired on.
    #[source]
    reason: CannotFireReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl FireError {
    /// Construct a fire error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotFireReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotFireReason {
        self.reason
    }

    /// Get the coordinate of the target cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
