//! Strategies that choose where to shoot.
use std::io;

use log::trace;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::{
    board::{Coordinate, Grid, RandomizationExhausted, ShotOutcome},
    game::{MalformedInput, Rejection, TurnError},
};

/// Prompt shown to the human before every targeting attempt.
pub const TARGET_PROMPT: &str = "Enter target coordinates as \"X Y\":";

/// A resolved shot: where it landed and what it hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Shot {
    pub coord: Coordinate,
    pub outcome: ShotOutcome,
}

/// Something that can take a turn against an opponent's grid.
///
/// Implementations absorb every invalid attempt themselves and only return once a shot
/// has been resolved, or when no shot can be produced at all.
pub trait TurnAgent {
    fn take_shot(&mut self, target: &mut Grid) -> Result<Shot, TurnError>;
}

impl<T: TurnAgent + ?Sized> TurnAgent for &mut T {
    fn take_shot(&mut self, target: &mut Grid) -> Result<Shot, TurnError> {
        (**self).take_shot(target)
    }
}

/// Source of raw text typed by the human.
pub trait InputSource {
    /// Show the prompt and return the next line of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }
}

/// Receives the reasons a targeting attempt was turned down.
pub trait RejectionSink {
    fn reject(&mut self, rejection: &Rejection);
}

impl<T: RejectionSink + ?Sized> RejectionSink for &mut T {
    fn reject(&mut self, rejection: &Rejection) {
        (**self).reject(rejection)
    }
}

/// Parse a target typed as two integers, `x` then `y`, separated by whitespace.
pub fn parse_target(input: &str) -> Result<Coordinate, MalformedInput> {
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<x>[+-]?[0-9]+)\s+(?P<y>[+-]?[0-9]+)$").unwrap());

    let input = input.trim();
    let captures = TARGET
        .captures(input)
        .ok_or_else(|| MalformedInput::new(input))?;
    let x = captures["x"]
        .parse()
        .map_err(|_| MalformedInput::new(input))?;
    let y = captures["y"]
        .parse()
        .map_err(|_| MalformedInput::new(input))?;
    Ok(Coordinate::new(x, y))
}

/// Shoots wherever the human says, asking again until the target is valid.
pub struct TargetedAgent<I, S> {
    input: I,
    sink: S,
}

impl<I: InputSource, S: RejectionSink> TargetedAgent<I, S> {
    pub fn new(input: I, sink: S) -> Self {
        Self { input, sink }
    }

    /// Access the input source between turns.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Release the input source and sink.
    pub fn into_inner(self) -> (I, S) {
        (self.input, self.sink)
    }
}

impl<I: InputSource, S: RejectionSink> TurnAgent for TargetedAgent<I, S> {
    fn take_shot(&mut self, target: &mut Grid) -> Result<Shot, TurnError> {
        loop {
            let line = self.input.read_line(TARGET_PROMPT)?;
            let coord = match parse_target(&line) {
                Ok(coord) => coord,
                Err(err) => {
                    self.sink.reject(&err.into());
                    continue;
                }
            };
            match target.fire_at(coord) {
                Ok(outcome) => return Ok(Shot { coord, outcome }),
                Err(err) => self.sink.reject(&err.into()),
            }
        }
    }
}

/// Shoots at uniformly random cells, with no memory of earlier shots.
pub struct RandomAgent<'r, R: ?Sized> {
    rng: &'r mut R,
    max_attempts: usize,
}

impl<'r, R: Rng + ?Sized> RandomAgent<'r, R> {
    pub fn new(rng: &'r mut R, max_attempts: usize) -> Self {
        Self { rng, max_attempts }
    }
}

impl<R: Rng + ?Sized> TurnAgent for RandomAgent<'_, R> {
    fn take_shot(&mut self, target: &mut Grid) -> Result<Shot, TurnError> {
        let area = target.area();
        for _ in 0..self.max_attempts {
            let coord = self.rng.sample(area);
            match target.fire_at(coord) {
                Ok(outcome) => return Ok(Shot { coord, outcome }),
                Err(err) => trace!("random shot rejected: {}", err),
            }
        }
        Err(RandomizationExhausted::new(self.max_attempts).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_integers() {
        assert_eq!(parse_target("3 4"), Ok(Coordinate::new(3, 4)));
        assert_eq!(parse_target("  0\t5\n"), Ok(Coordinate::new(0, 5)));
        assert_eq!(parse_target("-1 +2"), Ok(Coordinate::new(-1, 2)));
    }

    #[test]
    fn rejects_other_shapes() {
        for input in &["", "3", "3 4 5", "a b", "3,4", "3 x", "99999999999 1"] {
            let err = parse_target(input).unwrap_err();
            assert_eq!(err.input(), input.trim());
        }
    }
}
