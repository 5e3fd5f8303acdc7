//! A small game of battleship between a human and a computer that shoots at random.
//!
//! Each side owns a [`Grid`][board::Grid] filled by a
//! [`PlacementGenerator`][board::PlacementGenerator]. Vessels may not touch, not even
//! diagonally. A [`Round`][game::Round] alternates between two
//! [`TurnAgent`][game::TurnAgent]s until one fleet is destroyed.
//!
//! Rendering boards and reading input are left to the caller, through
//! [`InputSource`][game::InputSource] and [`RejectionSink`][game::RejectionSink].

pub mod board;
pub mod config;
pub mod game;
pub mod ships;
