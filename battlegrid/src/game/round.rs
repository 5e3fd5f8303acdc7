//! Turn sequencing for one round between the human and the computer.
use log::debug;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    board::{Grid, ShotOutcome},
    game::{Shot, TurnAgent, TurnError},
};

/// One of the two sides of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl Distribution<Side> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::Human
        } else {
            Side::Computer
        }
    }
}

/// Where a round stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RoundState {
    HumanTurn,
    ComputerTurn,
    HumanWon,
    ComputerWon,
}

impl RoundState {
    fn turn_of(side: Side) -> Self {
        match side {
            Side::Human => RoundState::HumanTurn,
            Side::Computer => RoundState::ComputerTurn,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::Human => RoundState::HumanWon,
            Side::Computer => RoundState::ComputerWon,
        }
    }

    /// The side due to shoot, or `None` once the round is over.
    pub fn turn(self) -> Option<Side> {
        match self {
            RoundState::HumanTurn => Some(Side::Human),
            RoundState::ComputerTurn => Some(Side::Computer),
            RoundState::HumanWon | RoundState::ComputerWon => None,
        }
    }

    /// The winning side, or `None` while the round is in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundState::HumanWon => Some(Side::Human),
            RoundState::ComputerWon => Some(Side::Computer),
            RoundState::HumanTurn | RoundState::ComputerTurn => None,
        }
    }

    /// Returns true once one side has won.
    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// What happened in one call to [`Round::step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Side that fired.
    pub shooter: Side,
    /// The resolved shot.
    pub shot: Shot,
    /// State of the round after the shot.
    pub state: RoundState,
}

/// A single round. Each side keeps shooting until it misses; the first side to destroy
/// the whole opposing fleet wins.
#[derive(Debug, Clone)]
pub struct Round {
    human: Grid,
    computer: Grid,
    state: RoundState,
}

impl Round {
    /// Start a round on the two grids, with `first` to shoot.
    pub fn new(human: Grid, computer: Grid, first: Side) -> Self {
        debug!("round starts, {:?} shoots first", first);
        Self {
            human,
            computer,
            state: RoundState::turn_of(first),
        }
    }

    /// Get the current state of the round.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Get the grid that holds the given side's fleet.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Resolve one shot by whichever side is due to fire.
    ///
    /// Destroying a vessel marks its contour on the target grid. Returns `None` if the
    /// round was already over.
    pub fn step<H, C>(
        &mut self,
        human: &mut H,
        computer: &mut C,
    ) -> Result<Option<TurnReport>, TurnError>
    where
        H: TurnAgent + ?Sized,
        C: TurnAgent + ?Sized,
    {
        let shooter = match self.state.turn() {
            Some(side) => side,
            None => return Ok(None),
        };
        let target = match shooter {
            Side::Human => &mut self.computer,
            Side::Computer => &mut self.human,
        };
        let shot = match shooter {
            Side::Human => human.take_shot(target)?,
            Side::Computer => computer.take_shot(target)?,
        };
        if let ShotOutcome::Destroyed(id) = shot.outcome {
            target.mark_contour(id);
        }

        self.state = if target.is_defeated() {
            debug!("round over, {:?} won", shooter);
            RoundState::won_by(shooter)
        } else if shot.outcome.is_hit() {
            RoundState::turn_of(shooter)
        } else {
            RoundState::turn_of(shooter.opponent())
        };
        Ok(Some(TurnReport {
            shooter,
            shot,
            state: self.state,
        }))
    }

    /// Play the round to the end and return the winner.
    pub fn play<H, C>(&mut self, human: &mut H, computer: &mut C) -> Result<Side, TurnError>
    where
        H: TurnAgent + ?Sized,
        C: TurnAgent + ?Sized,
    {
        loop {
            if let Some(winner) = self.state.winner() {
                return Ok(winner);
            }
            self.step(&mut *human, &mut *computer)?;
        }
    }

    /// End the round and hand back the grids as `(human, computer)`.
    pub fn into_grids(self) -> (Grid, Grid) {
        (self.human, self.computer)
    }
}
