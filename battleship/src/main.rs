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
use std::{
    fmt::{self, Debug},
    io::{self, BufRead},
};

use clap::{value_t, App, Arg, ArgMatches, SubCommand};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use seabattle::{
    board::{Board, RandomPlaceError, ShotOutcome, Vector2, MAX_SIZE},
    config::{ConfigError, Fleet, GameConfig, DEFAULT_SIZE},
    sim::{self, SimulationError},
};

use crate::input::{parse_command, Command, InputReader, HELP};

mod input;
mod logging;

/// Errors that end the program.
#[derive(Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] RandomPlaceError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn main() -> Result<(), CliError> {
    logging::init_logging();

    let default_size = DEFAULT_SIZE.to_string();
    let default_fleet = Fleet::standard().to_string();
    let default_attempts = GameConfig::default().max_attempts.to_string();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-board battleship: random fleets, hit resolution and sinking.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the square board")
                .takes_value(true)
                .default_value(&default_size)
                .validator(|v| match v.parse::<usize>() {
                    Ok(size) if size >= 1 && size <= MAX_SIZE => Ok(()),
                    _ => Err(format!("size must be a number in 1..={}", MAX_SIZE)),
                }),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("LENGTHS")
                .help("comma-separated ship lengths, placed in order")
                .takes_value(true)
                .default_value(&default_fleet)
                .validator(|v| v.parse::<Fleet>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("hidden")
                .long("hidden")
                .help("hide ships that have not been hit when drawing the board"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("fix the random seed for reproducible placements")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("N")
                .help("random placement attempts per ship before giving up")
                .takes_value(true)
                .default_value(&default_attempts)
                .validator(|v| v.parse::<usize>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .subcommand(
            SubCommand::with_name("simulate")
                .about("place a random fleet, fire at every cell and print the result (default)"),
        )
        .subcommand(SubCommand::with_name("play").about("fire at a random fleet interactively"))
        .get_matches();

    let config = config_from_args(&matches);
    let mut rng = make_rng(&matches);

    match matches.subcommand_name() {
        Some("play") => {
            let stdin = io::stdin();
            let mut input = InputReader::new(stdin.lock());
            play(&config, &mut rng, &mut input)
        }
        _ => simulate(&config, &mut rng),
    }
}

/// Build the [`GameConfig`] from validated arguments.
fn config_from_args(matches: &ArgMatches) -> GameConfig {
    GameConfig {
        size: value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit()),
        fleet: value_t!(matches, "fleet", Fleet).unwrap_or_else(|e| e.exit()),
        hidden: matches.is_present("hidden"),
        max_attempts: value_t!(matches, "max_attempts", usize).unwrap_or_else(|e| e.exit()),
    }
}

/// Seeded generator if `--seed` was given, otherwise one seeded from the OS.
fn make_rng(matches: &ArgMatches) -> StdRng {
    if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Run the whole-board simulation and print the final board.
fn simulate(config: &GameConfig, rng: &mut impl Rng) -> Result<(), CliError> {
    let report = sim::simulate(config, rng)?;
    println!("{}", report.board);
    println!(
        "{} shots: {} misses, {} hits, {} ships sunk",
        report.tally.shots(),
        report.tally.misses,
        report.tally.hits,
        report.tally.sinks
    );
    println!(
        "took {} milliseconds",
        report.elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Place a random fleet and let the player fire at it until every ship is sunk or they
/// quit.
fn play(
    config: &GameConfig,
    rng: &mut impl Rng,
    input: &mut InputReader<impl BufRead>,
) -> Result<(), CliError> {
    config.validate()?;
    let mut board = Board::new(config.size);
    board.set_hidden(config.hidden);
    board.place_fleet(rng, &config.fleet, config.max_attempts)?;

    println!();
    println!(
        "{} ships are hiding on a {}x{} board. Type help or ? for commands.",
        board.ships().len(),
        board.size(),
        board.size()
    );
    println!("{}", board);

    let mut shots = 0;
    while !board.all_sunk() {
        println!();
        let cmd = input.read_input_lower(">", |line| match parse_command(line) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;
        match cmd {
            None | Some(Command::Quit) => {
                println!("Leaving with {} ships afloat.", board.ships_afloat());
                return Ok(());
            }
            Some(Command::Fire(pos)) => match board.hit_cell(pos) {
                Ok(outcome) => {
                    shots += 1;
                    report_shot(&board, pos, outcome);
                    println!("{}", board);
                }
                Err(err) => println!("{}", err),
            },
            Some(Command::Ships) => {
                for (i, ship) in board.ships().iter().enumerate() {
                    println!("{}: {}", i, ship);
                }
            }
            Some(Command::Toggle) => {
                board.toggle_hidden();
                println!("{}", board);
            }
            Some(Command::Show) => println!("{}", board),
            Some(Command::Help) => println!("{}", HELP),
        }
    }
    println!();
    println!("Every ship sunk in {} shots.", shots);
    Ok(())
}

/// Describe a shot that landed.
fn report_shot(board: &Board, pos: Vector2, outcome: ShotOutcome) {
    match outcome {
        ShotOutcome::Miss => println!("{}: miss.", pos),
        ShotOutcome::Hit(_) => println!("{}: hit!", pos),
        ShotOutcome::Sunk(id) | ShotOutcome::Defeated(id) => {
            if let Some(ship) = board.ship(id) {
                println!("{}: you sunk my {} length ship!", pos, ship.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn tiny_config() -> GameConfig {
        GameConfig {
            size: 2,
            fleet: Fleet::new(vec![1]).unwrap(),
            hidden: true,
            max_attempts: 50,
        }
    }

    #[test]
    fn play_ends_when_fleet_is_sunk() {
        let mut rng = StdRng::seed_from_u64(5);
        // Repeats and out-of-range shots are refused and the loop carries on.
        let script = "0 0\n0 0\n9 9\nships\ntoggle\n1 0\n0,1\n1,1\n";
        let mut input = InputReader::new(Cursor::new(script));
        assert!(play(&tiny_config(), &mut rng, &mut input).is_ok());
    }

    #[test]
    fn play_stops_at_end_of_input() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut input = InputReader::new(Cursor::new("help\n"));
        assert!(play(&tiny_config(), &mut rng, &mut input).is_ok());
    }

    #[test]
    fn play_rejects_impossible_config() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GameConfig {
            size: 2,
            ..GameConfig::default()
        };
        let mut input = InputReader::new(Cursor::new(""));
        match play(&config, &mut rng, &mut input) {
            Err(CliError::Config(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn simulate_default_config() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(simulate(&GameConfig::default(), &mut rng).is_ok());
    }
}
