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
use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use seabattle::{
    board::{Adjacency, Coordinate, Dimensions},
    config::GameConfig,
    game::{Game, GameState, SetupError, Shot, Side, TurnError},
};

use crate::{
    display::show_board,
    input::{InputError, InputReader},
};

mod display;
mod input;
mod logging;

/// Reasons a session ends without a winner.
#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Turn(#[from] TurnError),
}

fn main() {
    logging::init_logging();

    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sea battle against the computer on a 6x6 grid.")
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator for a repeatable game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random_fleet")
                .long("random-fleet")
                .help("place your ships at random instead of using the fixed layout"),
        )
        .arg(
            Arg::with_name("strict_spacing")
                .long("strict-spacing")
                .help("forbid ships from touching diagonally too"),
        )
        .get_matches();

    let config = config_from_args(&matches);
    let rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock(), io::stdout());

    match play(&config, rng, &mut input) {
        Ok(winner) => println!("{} won!", winner),
        Err(err) => println!("{}", err),
    }
}

/// Build the game settings from the command line.
fn config_from_args(matches: &ArgMatches) -> GameConfig {
    GameConfig {
        adjacency: if matches.is_present("strict_spacing") {
            Adjacency::Full
        } else {
            Adjacency::Orthogonal
        },
        random_player_fleet: matches.is_present("random_fleet"),
        ..GameConfig::default()
    }
}

/// Set up a game and play it to the end, returning the winner.
fn play<B: BufRead, W: Write>(
    config: &GameConfig,
    rng: StdRng,
    input: &mut InputReader<B, W>,
) -> Result<Side, SessionError> {
    let mut game = Game::standard(config, rng)?;
    loop {
        match game.state() {
            GameState::AwaitingPlayerMove => player_turn(&mut game, input)?,
            GameState::AwaitingOpponentMove => computer_turn(&mut game)?,
            GameState::Over(winner) => return Ok(winner),
        }
    }
}

/// Show both boards and fire where the player asks until a shot lands.
fn player_turn<B: BufRead, W: Write>(
    game: &mut Game<StdRng>,
    input: &mut InputReader<B, W>,
) -> Result<(), SessionError> {
    show_board(&game.player_board().render("Player:", false));
    show_board(&game.computer_board().render("Computer:", true));
    println!("Your turn.");
    let dim = *game.computer_board().dimensions();
    let shot = loop {
        let target = read_target(input, &dim)?;
        match game.player_fire(target) {
            Ok(shot) => break shot,
            Err(TurnError::Rejected(_)) => println!("You can not fire there."),
            Err(err) => return Err(err.into()),
        }
    };
    report(&shot);
    Ok(())
}

/// Let the computer take its shot.
fn computer_turn(game: &mut Game<StdRng>) -> Result<(), SessionError> {
    println!("Computer's turn.");
    let shot = game.computer_fire()?;
    report(&shot);
    Ok(())
}

/// Ask for a 1-based target and convert it to a board coordinate.
fn read_target<B: BufRead, W: Write>(
    input: &mut InputReader<B, W>,
    dim: &Dimensions,
) -> Result<Coordinate, InputError> {
    let x = input.read_int("X", 1, dim.width())?;
    let y = input.read_int("Y", 1, dim.height())?;
    // read_int never returns less than 1.
    Ok(Coordinate::new(x - 1, y - 1))
}

/// Print the result of a shot.
fn report(shot: &Shot) {
    let (x, y) = shot.target.to_one_based();
    println!("{} fires at ({}, {}) and {}.", shot.by, x, y, shot.outcome);
}
