//! The move domain and the beats-relation between moves.
//!
//! ## Move
//!
//! One enum covers the whole five-value domain: rock, paper, scissors,
//! lizard, spock. The beats-relation is table-driven: each value defeats
//! exactly two others and loses to the remaining two, so the relation is
//! non-transitive and deliberately does NOT implement `PartialOrd`.
//!
//! ## Parsing
//!
//! `FromStr` accepts exactly the lowercase domain names and rejects
//! everything else with [`InvalidMove`]. Interactive input goes through
//! [`Move::from_token`], which additionally accepts the shorthand tokens
//! (`r`, `p`, `sc`, `l`, `sp`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rng::GameRng;

/// A single move in the five-value domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Every value in the domain, in canonical display order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Shorthand tokens accepted by interactive input.
    pub const SHORTHANDS: [(&'static str, Move); 5] = [
        ("r", Move::Rock),
        ("p", Move::Paper),
        ("sc", Move::Scissors),
        ("l", Move::Lizard),
        ("sp", Move::Spock),
    ];

    /// The lowercase domain name of this value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// The two values this one defeats.
    #[must_use]
    pub const fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Spock, Move::Paper],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// Whether this move beats `other`.
    ///
    /// Irreflexive and asymmetric: `a.beats(a)` is always false, and at
    /// most one of `a.beats(b)` / `b.beats(a)` holds. Neither holding
    /// means the pair is a tie.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        let [first, second] = self.defeats();
        other == first || other == second
    }

    /// Draw a value uniformly from the whole domain.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Move {
        Move::ALL[rng.gen_range_usize(0..Move::ALL.len())]
    }

    /// Parse a raw interactive token: a full domain name or a shorthand.
    pub fn from_token(token: &str) -> Result<Move, InvalidMove> {
        if let Ok(parsed) = token.parse() {
            return Ok(parsed);
        }
        Move::SHORTHANDS
            .iter()
            .find(|(short, _)| *short == token)
            .map(|&(_, value)| value)
            .ok_or_else(|| InvalidMove::new(token))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .copied()
            .find(|value| value.name() == s)
            .ok_or_else(|| InvalidMove::new(s))
    }
}

/// Error for a token that names no value in the domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMove {
    token: String,
}

impl InvalidMove {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// The rejected token, exactly as entered.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a move", self.token)
    }
}

impl std::error::Error for InvalidMove {}
