use std::{
    io::{self, BufRead},
    process,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use battlegrid::{
    board::{PlacementGenerator, RandomizationExhausted, ShotOutcome},
    config::GameConfig,
    game::{RandomAgent, Round, RoundState, Side, TargetedAgent, TurnError, TurnReport},
};

use crate::{
    console::{ConsoleSink, InputReader},
    render::{show_grid, ShipNames},
};

mod console;
mod logging;
mod render;

/// Error that ends the session.
#[derive(Debug, Error)]
enum SessionError {
    #[error("could not set up the fleets: {0}")]
    Setup(#[from] RandomizationExhausted),
    #[error(transparent)]
    Turn(#[from] TurnError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Who opens each round.
#[derive(Debug, Copy, Clone)]
enum FirstPlayer {
    Fixed(Side),
    Random,
}

impl FirstPlayer {
    fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> Side {
        match self {
            FirstPlayer::Fixed(side) => side,
            FirstPlayer::Random => rng.gen(),
        }
    }
}

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against a computer that fires at random.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random source for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("SIZE")
                .help("side length of each board")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("attempts")
                .long("attempts")
                .value_name("ATTEMPTS")
                .help("retry budget for random placement and computer shots")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log debug output to stderr"),
        )
        .get_matches();

    logging::init(matches.is_present("verbose"));

    let config = build_config(&matches);
    let generator = match config.placement_generator() {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("Invalid settings: {}", err);
            process::exit(2);
        }
    };
    let first = choose_first(&matches);
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let names = ShipNames::default();

    greet(&config);
    match run_session(&mut rng, &generator, &config, first, &mut input, &names) {
        Ok(()) => Ok(()),
        Err(SessionError::Turn(TurnError::Input(err))) | Err(SessionError::Io(err))
            if err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            println!();
            Ok(())
        }
        Err(SessionError::Turn(TurnError::Input(err))) | Err(SessionError::Io(err)) => Err(err),
        Err(err) => {
            error!("{}", err);
            eprintln!("Game over: {}", err);
            process::exit(1);
        }
    }
}

/// Build the game settings from defaults overridden by args.
fn build_config(matches: &ArgMatches) -> GameConfig {
    let mut config = GameConfig::default();
    if matches.is_present("size") {
        config.board_size = value_t!(matches, "size", i32).unwrap_or_else(|e| e.exit());
    }
    if matches.is_present("attempts") {
        config.max_attempts = value_t!(matches, "attempts", usize).unwrap_or_else(|e| e.exit());
    }
    config
}

/// Choose which side opens each round, based on args.
fn choose_first(matches: &ArgMatches) -> FirstPlayer {
    match matches.value_of("first_player").map(str::to_ascii_lowercase) {
        None => FirstPlayer::Fixed(Side::Human),
        Some(choice) => match choice.as_str() {
            "human" | "me" => FirstPlayer::Fixed(Side::Human),
            "computer" | "bot" => FirstPlayer::Fixed(Side::Computer),
            "random" | "rand" => FirstPlayer::Random,
            _ => unreachable!(),
        },
    }
}

fn greet(config: &GameConfig) {
    println!("Welcome to Battleship!");
    println!();
    println!(
        "Both fleets are hidden on {0}x{0} boards. Vessels never touch, not even at the corners.",
        config.board_size
    );
    println!(
        "Aim by typing the column then the row, e.g. \"0 {}\". Columns and rows count from 0.",
        config.board_size - 1
    );
    println!("Keep firing as long as you hit. The first to sink the whole enemy fleet wins.");
    println!("Legend: O water, ■ ship, X hit, T miss, · clear water next to a sunk ship.");
}

/// Play rounds until the player declines another.
fn run_session<R: Rng + ?Sized, B: BufRead>(
    rng: &mut R,
    generator: &PlacementGenerator,
    config: &GameConfig,
    first: FirstPlayer,
    input: &mut InputReader<B>,
    names: &ShipNames,
) -> Result<(), SessionError> {
    loop {
        let human_grid = generator.generate(rng)?;
        let computer_grid = generator.generate(rng)?;
        let round = Round::new(human_grid, computer_grid, first.choose(rng));
        info!("new round on {0}x{0} boards", config.board_size);

        match play_round(round, rng, config.max_attempts, input, names)? {
            Side::Human => println!("\nThe enemy fleet is at the bottom of the sea. You win!"),
            Side::Computer => println!("\nYour fleet has been sunk. The computer wins."),
        }

        let again = input.read_input_lower("\nPlay again? (Y/n)", |input| match input {
            "yes" | "y" | "" => Some(true),
            "no" | "n" => Some(false),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?;
        if !again {
            return Ok(());
        }
    }
}

/// Run one round on the console and return the winner.
fn play_round<R: Rng + ?Sized, B: BufRead>(
    mut round: Round,
    rng: &mut R,
    max_attempts: usize,
    input: &mut InputReader<B>,
    names: &ShipNames,
) -> Result<Side, SessionError> {
    let mut computer = RandomAgent::new(rng, max_attempts);
    let mut human = TargetedAgent::new(input, ConsoleSink);
    let winner = loop {
        if let Some(winner) = round.state().winner() {
            break winner;
        }
        if round.state() == RoundState::HumanTurn {
            show_grid(round.grid(Side::Computer), true);
        }
        let report = match round.step(&mut human, &mut computer)? {
            Some(report) => report,
            None => continue,
        };
        narrate(&round, &report, names);
        if report.shooter == Side::Computer {
            show_grid(round.grid(Side::Human), false);
            if !report.state.is_over() {
                human.input_mut().pause()?;
            }
        }
    };

    println!("\nYour fleet:");
    show_grid(round.grid(Side::Human), false);
    println!("\nThe enemy fleet:");
    show_grid(round.grid(Side::Computer), false);
    Ok(winner)
}

/// Describe the outcome of a shot to the player.
fn narrate(round: &Round, report: &TurnReport, names: &ShipNames) {
    let target = round.grid(report.shooter.opponent());
    let name = |outcome: &ShotOutcome| {
        outcome
            .vessel()
            .and_then(|id| target.vessel(id))
            .map(|vessel| names.describe(vessel.length()).into_owned())
            .unwrap_or_default()
    };
    let outcome = &report.shot.outcome;
    match report.shooter {
        Side::Human => match outcome {
            ShotOutcome::Miss => println!("\nYou missed! The computer strikes back ..."),
            ShotOutcome::Hit(_) => {
                println!("\nHit! The enemy vessel is damaged but still afloat!");
                println!("Great shot! Fire again!");
            }
            ShotOutcome::Destroyed(_) => {
                println!("\nHit! The enemy {} is destroyed!", name(outcome));
                if !report.state.is_over() {
                    println!("Great shot! Fire again!");
                }
            }
        },
        Side::Computer => {
            println!("\nThe computer fires at {} ...", report.shot.coord);
            match outcome {
                ShotOutcome::Miss => println!("The enemy missed! Your turn to fire."),
                ShotOutcome::Hit(_) => {
                    println!("Hit! Your {} is damaged but still afloat!", name(outcome));
                    println!("They are reloading the guns ...");
                }
                ShotOutcome::Destroyed(_) => {
                    println!("Hit! Your {} is destroyed!", name(outcome));
                    if !report.state.is_over() {
                        println!("They are reloading the guns ...");
                    }
                }
            }
        }
    }
}
