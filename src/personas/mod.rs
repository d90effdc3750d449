//! Computer-opponent personas: selection strategies and the stock roster.
//!
//! A [`Persona`] is a named identity around a [`MoveStrategy`]. The stock
//! cast lives in [`roster`] along with the random draws the session uses
//! to field an opening challenger and to rotate between rounds.

pub mod roster;
pub mod strategy;

pub use roster::{draw, draw_distinct, Persona, ROSTER_SIZE};
pub use strategy::{MoveStrategy, MoveTable};
