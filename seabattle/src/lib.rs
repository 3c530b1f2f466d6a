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
//! A small game of sea battle: one human against the computer on a 6x6 grid.
//!
//! [`board`] holds the grid and the rules for placing ships and firing on cells.
//! [`ships`] validates ship shapes. [`fleet`] builds the fixed human fleet and places
//! random fleets. [`game`] runs the turns until one fleet is gone.
//!
//! Everything here works in 0-based coordinates. Turning player input into a
//! [`Coordinate`](board::Coordinate) and drawing boards is left to the caller.
//!
//! The `rng_gen` feature (on by default) enables random ships, the [`fleet`] module and
//! the game itself.

pub mod board;
pub mod config;
#[cfg(feature = "rng_gen")]
pub mod fleet;
#[cfg(feature = "rng_gen")]
pub mod game;
pub mod ships;
