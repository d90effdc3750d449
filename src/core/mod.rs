//! Core game types: the move domain, seats and players, deterministic RNG.
//!
//! Everything in this module is headless and free of I/O. The interactive
//! layers build on these types without the types knowing about them.

pub mod moves;
pub mod player;
pub mod rng;

pub use moves::{InvalidMove, Move};
pub use player::{Player, Seat, TurnOutcome};
pub use rng::GameRng;
