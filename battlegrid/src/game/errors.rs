use std::io;

use thiserror::Error;

use crate::board::{RandomizationExhausted, ShotError};

/// Human input that does not name a target as two integers.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("expected two whole numbers separated by a space, got {input:?}")]
pub struct MalformedInput {
    input: String,
}

impl MalformedInput {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input, with surrounding whitespace removed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Why a targeting attempt did not produce a shot. Reported back to the human, who then
/// picks another target.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Rejection {
    #[error("invalid target: {0}")]
    Malformed(#[from] MalformedInput),
    #[error("{0}")]
    Shot(#[from] ShotError),
}

/// Error that ends a turn without a resolved shot.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The computer could not find a cell left to shoot.
    #[error("no target found: {0}")]
    Exhausted(#[from] RandomizationExhausted),
    /// Reading the human's input failed, including reaching the end of input.
    #[error("could not read input: {0}")]
    Input(#[from] io::Error),
}
