//! Append-only match history with round playback.
//!
//! [`GameHistory`] records every turn and round winner as play happens and
//! serves them back for the between-rounds history browser. Queries for
//! rounds that were never archived fail with [`RoundNotFound`].

mod recorder;

pub use recorder::{GameHistory, RoundLog, RoundNotFound, TurnEntry};
