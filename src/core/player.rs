//! Seats, turn outcomes, and the player model.
//!
//! A session seats exactly two players: the human and the computer.
//! [`Player`] carries what both seats share: a display name, the running
//! score, and the move chosen this turn. Move *selection* lives elsewhere:
//! the state machine collects the human's move through the console seam
//! and the computer's from its persona.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::moves::Move;

/// Which side of the table an identity occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Human,
    Computer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Computer => f.write_str("computer"),
        }
    }
}

/// Outcome of comparing both seats' moves for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Exactly one seat's move beat the other's.
    Winner(Seat),
    /// Both seats chose the identical value.
    Tie,
}

impl TurnOutcome {
    /// Resolve a pair of moves, human seat first.
    #[must_use]
    pub fn from_moves(human: Move, computer: Move) -> TurnOutcome {
        if human.beats(computer) {
            TurnOutcome::Winner(Seat::Human)
        } else if computer.beats(human) {
            TurnOutcome::Winner(Seat::Computer)
        } else {
            TurnOutcome::Tie
        }
    }

    /// The winning seat, if the turn was not a tie.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            TurnOutcome::Winner(seat) => Some(seat),
            TurnOutcome::Tie => None,
        }
    }
}

/// One seat's identity and per-round state.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    score: u32,
    current: Option<Move>,
}

impl Player {
    /// Create a player with a zero score and no move chosen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            current: None,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points won so far in the current round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The move chosen this turn, if one has been set.
    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        self.current
    }

    /// Record the move chosen for the current turn, replacing any earlier
    /// choice.
    pub fn set_move(&mut self, value: Move) {
        self.current = Some(value);
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    /// Compare current moves and credit the winner with one point.
    ///
    /// At most one score changes: the winner's by exactly one, or neither
    /// on a tie.
    ///
    /// # Panics
    ///
    /// Panics if either seat has not chosen a move this turn.
    pub fn award_point_if_winner(&mut self, opponent: &mut Player) {
        let mine = self.current.expect("player has not chosen a move this turn");
        let theirs = opponent
            .current
            .expect("opponent has not chosen a move this turn");

        if mine.beats(theirs) {
            self.add_point();
        } else if theirs.beats(mine) {
            opponent.add_point();
        }
    }

    /// Reset the score to zero. Identity and current move are untouched.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
