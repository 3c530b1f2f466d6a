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
//! Constants and settings for the standard game.

use crate::board::{Adjacency, Dimensions};

/// Width of the standard board.
pub const WIDTH: usize = 6;
/// Height of the standard board.
pub const HEIGHT: usize = 6;

/// Ship lengths every fleet is made of: one 3-length, two 2-length and four 1-length
/// ships.
pub const STANDARD_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// The designer-authored human fleet, as 1-based `(column, row)` points.
pub const STANDARD_LAYOUT: [&[(usize, usize)]; 7] = [
    &[(4, 1), (6, 1), (5, 1)],
    &[(2, 5), (2, 6)],
    &[(4, 5), (4, 6)],
    &[(1, 2)],
    &[(3, 3)],
    &[(6, 6)],
    &[(6, 4)],
];

/// Words that end the session when typed at any prompt.
pub const QUIT_WORDS: [&str; 4] = ["q", "quit", "exit", "-1"];

/// Settings for a single game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Size of both boards.
    pub dimensions: Dimensions,
    /// Ship lengths of the computer's fleet, and of the player's when it is random.
    pub fleet: Vec<usize>,
    /// Buffer rule for ship placement on both boards.
    pub adjacency: Adjacency,
    /// Generate the player's fleet at random instead of using [`STANDARD_LAYOUT`].
    pub random_player_fleet: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(WIDTH, HEIGHT),
            fleet: STANDARD_FLEET.to_vec(),
            adjacency: Adjacency::default(),
            random_player_fleet: false,
        }
    }
}
