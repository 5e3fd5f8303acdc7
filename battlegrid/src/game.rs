//! Playing the game: the strategies that pick targets and the round that alternates
//! between them.
//!
//! [`TargetedAgent`] shoots where the human tells it to, [`RandomAgent`] shoots at
//! uniformly random cells. A [`Round`] only depends on the [`TurnAgent`] capability, and
//! keeps handing the turn to the same side until it misses.

pub use self::{
    agent::{
        parse_target, InputSource, RandomAgent, RejectionSink, Shot, TargetedAgent, TurnAgent,
        TARGET_PROMPT,
    },
    errors::{MalformedInput, Rejection, TurnError},
    round::{Round, RoundState, Side, TurnReport},
};

mod agent;
mod errors;
mod round;
