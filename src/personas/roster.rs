//! The stock persona roster and rotation draws.
//!
//! Five personas ship with the game, each a named identity wrapped around
//! a [`MoveStrategy`]:
//!
//! | Persona  | Strategy                                            |
//! |----------|-----------------------------------------------------|
//! | R2D2     | uniform over the whole domain                       |
//! | Hal      | weighted: spock x3, lizard x2, scissors x1          |
//! | Chappie  | weighted: rock, paper, scissors (the classic trio)  |
//! | Sonny    | weighted: rock x2, scissors x1, lizard x1           |
//! | Number5  | cyclic six-move pattern with a frozen wildcard slot |
//!
//! [`draw`] fields one at random; [`draw_distinct`] is the rotation draw
//! used between rounds, guaranteed to name a different opponent.

use serde::{Deserialize, Serialize};

use super::strategy::MoveStrategy;
use crate::core::{GameRng, Move};

/// Number of personas in the stock roster.
pub const ROSTER_SIZE: usize = 5;

/// A named computer opponent: an identity plus a move-selection strategy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Persona {
    name: String,
    strategy: MoveStrategy,
}

impl Persona {
    /// Create a persona from a name and a strategy.
    pub fn new(name: impl Into<String>, strategy: MoveStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// The persona's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce this persona's next move.
    pub fn select_move(&mut self, rng: &mut GameRng) -> Move {
        self.strategy.select(rng)
    }

    /// Uniform over the whole domain.
    #[must_use]
    pub fn r2d2() -> Persona {
        Persona::new("R2D2", MoveStrategy::Uniform)
    }

    /// Heavy spock bias with lizard and scissors mixed in.
    #[must_use]
    pub fn hal() -> Persona {
        Persona::new(
            "Hal",
            MoveStrategy::weighted(&[
                Move::Spock,
                Move::Spock,
                Move::Scissors,
                Move::Lizard,
                Move::Spock,
                Move::Lizard,
            ]),
        )
    }

    /// Plays the classic three values only: rock, paper, scissors.
    #[must_use]
    pub fn chappie() -> Persona {
        Persona::new(
            "Chappie",
            MoveStrategy::weighted(&[Move::Rock, Move::Paper, Move::Scissors]),
        )
    }

    /// Rock-leaning, with occasional scissors and lizard. Never paper or
    /// spock.
    #[must_use]
    pub fn sonny() -> Persona {
        Persona::new(
            "Sonny",
            MoveStrategy::weighted(&[Move::Rock, Move::Rock, Move::Scissors, Move::Lizard]),
        )
    }

    /// Six-move cycle with its third slot drawn uniformly at construction
    /// and frozen for the persona's lifetime.
    #[must_use]
    pub fn number5(rng: &mut GameRng) -> Persona {
        let wildcard = Move::random(rng);
        Persona::new(
            "Number5",
            MoveStrategy::cyclic(&[
                Move::Paper,
                Move::Spock,
                wildcard,
                Move::Lizard,
                Move::Lizard,
                Move::Spock,
            ]),
        )
    }
}

// Identity comparison only: the strategy, including Number5's frozen
// wildcard slot, is not part of persona equality.
impl PartialEq for Persona {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Persona {}

/// Draw one stock persona uniformly at random.
pub fn draw(rng: &mut GameRng) -> Persona {
    match rng.gen_range_usize(0..ROSTER_SIZE) {
        0 => Persona::r2d2(),
        1 => Persona::hal(),
        2 => Persona::chappie(),
        3 => Persona::sonny(),
        _ => Persona::number5(rng),
    }
}

/// Draw a stock persona whose name differs from `previous`.
///
/// Draws fresh candidates until one differs, so each non-matching persona
/// keeps its uniform odds.
pub fn draw_distinct(rng: &mut GameRng, previous: &str) -> Persona {
    loop {
        let candidate = draw(rng);
        if candidate.name() != previous {
            return candidate;
        }
    }
}
