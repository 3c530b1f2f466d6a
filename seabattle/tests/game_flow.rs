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
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    board::{Adjacency, Board, CellState, Coordinate, Dimensions, FireOutcome},
    config::GameConfig,
    fleet::FleetGenerator,
    game::{Game, GameState, Side, TurnError},
};

/// Play a whole game where the player sweeps the computer's board row by row.
fn play_sweep(seed: u64, config: &GameConfig) -> Game<StdRng> {
    let mut game = Game::standard(config, StdRng::seed_from_u64(seed)).unwrap();
    let mut targets = config.dimensions.iter_coordinates().flatten();
    while !game.is_over() {
        let shot = game.player_fire(targets.next().unwrap()).unwrap();
        assert_eq!(shot.by, Side::Player);
        if !game.is_over() {
            let shot = game.computer_fire().unwrap();
            assert_eq!(shot.by, Side::Computer);
        }
    }
    game
}

#[test]
fn full_games_end_with_exactly_one_fleet_sunk() {
    for seed in 0..20 {
        let game = play_sweep(seed, &GameConfig::default());
        let winner = game.winner().unwrap();
        assert!(!game.board(winner.opponent()).has_live_ships());
        assert!(game.board(winner).has_live_ships());
        assert_eq!(game.state(), GameState::Over(winner));
        assert_eq!(
            game.player_board().fired_cells() + game.computer_board().fired_cells(),
            game.turns()
        );
    }
}

#[test]
fn strict_spacing_games_play_out() {
    let config = GameConfig {
        adjacency: Adjacency::Full,
        random_player_fleet: true,
        ..GameConfig::default()
    };
    let game = play_sweep(99, &config);
    assert!(game.winner().is_some());
    assert_eq!(game.player_board().adjacency(), Adjacency::Full);
}

#[test]
fn hit_at_four_one_then_refire_is_refused() {
    let mut rng = StdRng::seed_from_u64(5);
    let player = FleetGenerator::standard().generate(&mut rng).unwrap();
    // The player fires on the fixed fleet, which covers (4, 1).
    let computer = Board::with_ships(
        Dimensions::new(6, 6),
        seabattle::fleet::standard_layout().unwrap(),
    )
    .unwrap();
    let mut game = Game::new(player, computer, rng);

    let target = Coordinate::from_one_based(4, 1).unwrap();
    let shot = game.player_fire(target).unwrap();
    assert_eq!(shot.outcome, FireOutcome::Hit);
    assert_eq!(format!("{}", shot.outcome), "hits");
    assert_eq!(game.computer_board().cell(target), Some(CellState::Hit));
    assert!(!game.computer_board().can_fire(target));

    game.computer_fire().unwrap();
    assert_eq!(game.state(), GameState::AwaitingPlayerMove);
    assert!(matches!(
        game.player_fire(target),
        Err(TurnError::Rejected(_))
    ));
    assert_eq!(game.state(), GameState::AwaitingPlayerMove);
}

#[test]
fn sunk_fleet_hands_the_win_to_the_other_side() {
    let dim = Dimensions::new(6, 6);
    let ships = seabattle::fleet::standard_layout().unwrap();
    let mut computer = Board::with_ships(dim, ships.clone()).unwrap();
    let player = Board::with_ships(dim, ships).unwrap();

    // Hit every ship cell but one ahead of time.
    let cells: Vec<_> = computer
        .ships()
        .iter()
        .flat_map(|s| s.points().to_vec())
        .collect();
    let (last, rest) = cells.split_last().unwrap();
    for &cell in rest {
        computer.fire(cell).unwrap();
    }
    assert!(computer.has_live_ships());

    let mut game = Game::new(player, computer, StdRng::seed_from_u64(0));
    game.player_fire(*last).unwrap();
    assert!(!game.computer_board().has_live_ships());
    assert_eq!(game.winner(), Some(Side::Player));
}
