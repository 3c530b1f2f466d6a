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
//! The turn loop: one human player against a computer firing at random.
//!
//! A [`Game`] owns both boards and moves through [`GameState`] one shot at a time. The
//! player always moves first. The caller supplies the player's targets (gathering
//! input is not the game's job) and asks the game to take the computer's turn.

use std::fmt;

use log::{debug, info, trace};
use rand::Rng;

use crate::{
    board::{Board, CannotFireReason, Coordinate, FireError, FireOutcome},
    config::GameConfig,
    fleet::{self, FleetGenerator},
    ships::Ship,
};

pub use self::errors::{SetupError, TurnError};

mod errors;

/// One side of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        })
    }
}

/// Where the game currently stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// Waiting for the player to pick a target on the computer's board.
    AwaitingPlayerMove,
    /// Waiting for the computer to fire on the player's board.
    AwaitingOpponentMove,
    /// The given side sank the whole enemy fleet.
    Over(Side),
}

/// A resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Shot {
    /// Side that fired.
    pub by: Side,
    /// Cell that was fired on, on the opponent's board.
    pub target: Coordinate,
    /// What the shot hit.
    pub outcome: FireOutcome,
}

/// A game in progress.
#[derive(Debug)]
pub struct Game<R> {
    /// Board the player's ships are on. The computer fires here.
    player: Board,
    /// Board the computer's ships are on. The player fires here.
    computer: Board,
    state: GameState,
    /// Number of shots resolved so far.
    turns: usize,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a game on the given boards. The player moves first.
    pub fn new(player: Board, computer: Board, rng: R) -> Self {
        Self {
            player,
            computer,
            state: GameState::AwaitingPlayerMove,
            turns: 0,
            rng,
        }
    }

    /// Set up the standard game: the player gets the designer-authored fleet (or a
    /// random one if the config asks for it) and the computer a random fleet.
    pub fn standard(config: &GameConfig, mut rng: R) -> Result<Self, SetupError> {
        let generator =
            FleetGenerator::with_adjacency(config.dimensions, &config.fleet, config.adjacency)?;
        let player = if config.random_player_fleet {
            generator.generate(&mut rng)?
        } else {
            fixed_player_board(config, generator.fleet())?
        };
        let computer = generator.generate(&mut rng)?;
        info!(
            "game set up on a {}x{} board",
            config.dimensions.width(),
            config.dimensions.height()
        );
        Ok(Self::new(player, computer, rng))
    }

    /// Current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::Over(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns true once one side has won.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Number of shots resolved so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The board holding the player's ships.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// The board holding the computer's ships.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// The board holding the given side's ships.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Fire the player's shot at the computer's board. A target that cannot be fired on
    /// is rejected without using up the player's turn.
    pub fn player_fire(&mut self, target: Coordinate) -> Result<Shot, TurnError> {
        self.check_turn(Side::Player)?;
        if !self.computer.can_fire(target) {
            let reason = if self.computer.dimensions().contains(target) {
                CannotFireReason::AlreadyFired
            } else {
                CannotFireReason::OutOfBounds
            };
            return Err(TurnError::Rejected(FireError::new(reason, target)));
        }
        self.resolve(Side::Player, target)
    }

    /// Take the computer's turn: pick uniformly random cells on the player's board until
    /// one can be fired on, then fire there.
    pub fn computer_fire(&mut self) -> Result<Shot, TurnError> {
        self.check_turn(Side::Computer)?;
        let dim = *self.player.dimensions();
        let player = &self.player;
        if !dim.iter_coordinates().flatten().any(|c| player.can_fire(c)) {
            return Err(TurnError::NoTargets);
        }
        let target = loop {
            let candidate = Coordinate::new(
                self.rng.gen_range(0, dim.width()),
                self.rng.gen_range(0, dim.height()),
            );
            if self.player.can_fire(candidate) {
                break candidate;
            }
            trace!("computer resampling, {} already fired on", candidate);
        };
        self.resolve(Side::Computer, target)
    }

    /// Check that it is `side`'s turn.
    fn check_turn(&self, side: Side) -> Result<(), TurnError> {
        match (self.state, side) {
            (GameState::Over(winner), _) => Err(TurnError::GameOver(winner)),
            (GameState::AwaitingPlayerMove, Side::Player)
            | (GameState::AwaitingOpponentMove, Side::Computer) => Ok(()),
            _ => Err(TurnError::OutOfTurn(side)),
        }
    }

    /// Fire `by`'s shot at the opponent's board and advance the state.
    fn resolve(&mut self, by: Side, target: Coordinate) -> Result<Shot, TurnError> {
        let board = self.board_mut(by.opponent());
        let outcome = board.fire(target)?;
        let defeated = !board.has_live_ships();

        self.turns += 1;
        self.state = if defeated {
            GameState::Over(by)
        } else {
            match by {
                Side::Player => GameState::AwaitingOpponentMove,
                Side::Computer => GameState::AwaitingPlayerMove,
            }
        };
        debug!("{} fires at {} and {}", by, target, outcome);
        if defeated {
            info!("{} won after {} shots", by, self.turns);
        }
        Ok(Shot { by, target, outcome })
    }
}

/// Build the player's board from the designer-authored layout. The layout must hold
/// exactly the configured fleet and fit the configured board.
fn fixed_player_board(config: &GameConfig, fleet: &[usize]) -> Result<Board, SetupError> {
    let ships = fleet::standard_layout()?;
    let mut layout: Vec<_> = ships.iter().map(Ship::len).collect();
    layout.sort_unstable_by(|a, b| b.cmp(a));
    if layout != fleet {
        return Err(SetupError::LayoutMismatch {
            layout,
            fleet: fleet.to_vec(),
        });
    }
    let dim = config.dimensions;
    if let Some(&coord) = ships
        .iter()
        .flat_map(Ship::points)
        .find(|&&p| !dim.contains(p))
    {
        return Err(SetupError::LayoutOutOfBounds {
            coord,
            width: dim.width(),
            height: dim.height(),
        });
    }
    Ok(Board::with_ships_and_adjacency(
        dim,
        ships,
        config.adjacency,
    )?)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{CellState, Dimensions},
        fleet::FleetError,
    };

    fn board(ships: &[&[(usize, usize)]]) -> Board {
        Board::with_ships(
            Dimensions::new(6, 6),
            ships.iter().map(|points| Ship::from_one_based(points).unwrap()),
        )
        .unwrap()
    }

    fn game(player: Board, computer: Board) -> Game<StdRng> {
        Game::new(player, computer, StdRng::seed_from_u64(3))
    }

    #[test]
    fn standard_setup_succeeds() {
        let game = Game::standard(&GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.state(), GameState::AwaitingPlayerMove);
        assert_eq!(game.player_board().ships().len(), 7);
        assert_eq!(game.computer_board().ships().len(), 7);
        assert_eq!(game.player_board().live_cells(), 10);
        assert_eq!(game.computer_board().live_cells(), 10);
    }

    #[test]
    fn random_player_fleet_setup() {
        let config = GameConfig {
            random_player_fleet: true,
            ..GameConfig::default()
        };
        let game = Game::standard(&config, StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(game.player_board().live_cells(), 10);
    }

    #[test]
    fn bad_fleet_fails_setup() {
        let config = GameConfig {
            fleet: vec![9],
            ..GameConfig::default()
        };
        let err = Game::standard(&config, StdRng::seed_from_u64(2)).unwrap_err();
        assert!(matches!(err, SetupError::Fleet(FleetError::TooLong { .. })));
    }

    #[test]
    fn unplaceable_fleet_fails_setup() {
        let config = GameConfig {
            fleet: vec![6, 6, 6, 6],
            random_player_fleet: true,
            ..GameConfig::default()
        };
        let err = Game::standard(&config, StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(
            err,
            SetupError::Fleet(FleetError::Unplaceable { .. })
        ));
    }

    #[test]
    fn fixed_layout_must_match_fleet() {
        let config = GameConfig {
            fleet: vec![2],
            ..GameConfig::default()
        };
        match Game::standard(&config, StdRng::seed_from_u64(1)).unwrap_err() {
            SetupError::LayoutMismatch { layout, fleet } => {
                assert_eq!(layout, vec![3, 2, 2, 1, 1, 1, 1]);
                assert_eq!(fleet, vec![2]);
            }
            err => panic!("unexpected error: {}", err),
        }

        // The same fleet is fine when the player's ships are random too.
        let config = GameConfig {
            random_player_fleet: true,
            ..config
        };
        let game = Game::standard(&config, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.player_board().live_cells(), 2);
        assert_eq!(game.computer_board().live_cells(), 2);
    }

    #[test]
    fn fixed_layout_must_fit_board() {
        let config = GameConfig {
            dimensions: Dimensions::new(5, 6),
            ..GameConfig::default()
        };
        match Game::standard(&config, StdRng::seed_from_u64(1)).unwrap_err() {
            SetupError::LayoutOutOfBounds {
                coord,
                width,
                height,
            } => {
                assert_eq!(coord, Coordinate::new(5, 0));
                assert_eq!((width, height), (5, 6));
            }
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn player_hit_then_refire_is_rejected() {
        let mut game = game(board(&[&[(1, 1)], &[(3, 3)]]), board(&[&[(4, 1), (5, 1)]]));
        let target = Coordinate::from_one_based(4, 1).unwrap();

        let shot = game.player_fire(target).unwrap();
        assert_eq!(shot.outcome, FireOutcome::Hit);
        assert_eq!(shot.outcome.to_string(), "hits");
        assert_eq!(game.computer_board().cell(target), Some(CellState::Hit));
        assert_eq!(game.state(), GameState::AwaitingOpponentMove);

        game.computer_fire().unwrap();
        assert_eq!(game.state(), GameState::AwaitingPlayerMove);

        let err = game.player_fire(target).unwrap_err();
        assert!(matches!(err, TurnError::Rejected(e) if e.reason() == CannotFireReason::AlreadyFired));
        // Rejection does not use up the turn.
        assert_eq!(game.state(), GameState::AwaitingPlayerMove);
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn out_of_bounds_target_is_rejected() {
        let mut game = game(board(&[&[(1, 1)]]), board(&[&[(4, 1)]]));
        let err = game.player_fire(Coordinate::new(6, 0)).unwrap_err();
        assert!(matches!(err, TurnError::Rejected(e) if e.reason() == CannotFireReason::OutOfBounds));
    }

    #[test]
    fn moves_out_of_turn_are_refused() {
        let mut game = game(board(&[&[(1, 1)]]), board(&[&[(4, 1)]]));
        assert_eq!(
            game.computer_fire().unwrap_err(),
            TurnError::OutOfTurn(Side::Computer)
        );
        game.player_fire(Coordinate::new(0, 5)).unwrap();
        assert_eq!(
            game.player_fire(Coordinate::new(1, 5)).unwrap_err(),
            TurnError::OutOfTurn(Side::Player)
        );
    }

    #[test]
    fn sinking_the_last_ship_ends_the_game() {
        let mut game = game(board(&[&[(1, 1)]]), board(&[&[(4, 1)]]));
        let shot = game
            .player_fire(Coordinate::from_one_based(4, 1).unwrap())
            .unwrap();
        assert_eq!(shot.by, Side::Player);
        assert!(!game.computer_board().has_live_ships());
        assert_eq!(game.state(), GameState::Over(Side::Player));
        assert_eq!(game.winner(), Some(Side::Player));
        assert_eq!(
            game.computer_fire().unwrap_err(),
            TurnError::GameOver(Side::Player)
        );
    }

    #[test]
    fn computer_only_fires_on_open_cells() {
        let player = Board::with_ships(
            Dimensions::new(2, 2),
            vec![Ship::new(vec![Coordinate::new(0, 0)]).unwrap()],
        )
        .unwrap();
        let mut game = game(player, board(&[&[(1, 1)], &[(6, 6)]]));
        let mut fired = Vec::new();
        // The player keeps missing in the middle of the board while the computer works
        // through the player's board.
        let mut misses = Dimensions::new(6, 6)
            .iter_coordinates()
            .flatten()
            .filter(|c| c.x > 0 && c.x < 5);
        while !game.is_over() {
            game.player_fire(misses.next().unwrap()).unwrap();
            let shot = game.computer_fire().unwrap();
            assert!(!fired.contains(&shot.target));
            fired.push(shot.target);
        }
        assert!(fired.len() <= 4);
        assert_eq!(game.winner(), Some(Side::Computer));
        assert_eq!(
            game.player_board().cell(Coordinate::new(0, 0)),
            Some(CellState::Hit)
        );
    }

    #[test]
    fn computer_with_nothing_to_fire_at() {
        let mut player = Board::new(Dimensions::new(1, 1));
        player.fire(Coordinate::new(0, 0)).unwrap();
        let mut game = game(player, board(&[&[(1, 1)], &[(6, 6)]]));
        game.player_fire(Coordinate::new(0, 0)).unwrap();
        assert_eq!(game.computer_fire().unwrap_err(), TurnError::NoTargets);
    }
}
