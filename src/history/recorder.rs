//! Append-only recording of turns and round winners.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Move, Seat};

/// One recorded exchange of moves.
///
/// Identity names are baked in at record time, so a later persona
/// rotation cannot rewrite what an archived turn says.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    turn: u32,
    human: String,
    human_move: Move,
    computer: String,
    computer_move: Move,
}

impl TurnEntry {
    /// 1-based turn number within its round.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The human identity as recorded for this turn.
    #[must_use]
    pub fn human_name(&self) -> &str {
        &self.human
    }

    /// The human's move.
    #[must_use]
    pub fn human_move(&self) -> Move {
        self.human_move
    }

    /// The computer identity as recorded for this turn.
    #[must_use]
    pub fn computer_name(&self) -> &str {
        &self.computer
    }

    /// The computer's move.
    #[must_use]
    pub fn computer_move(&self) -> Move {
        self.computer_move
    }
}

impl fmt::Display for TurnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn {}\n{} chose {}\n{} chose {}",
            self.turn, self.human, self.human_move, self.computer, self.computer_move
        )
    }
}

/// The record of a single round: its number, turns in order, and the
/// winner once one was recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    round: u32,
    turns: Vec<TurnEntry>,
    winner: Option<String>,
}

impl RoundLog {
    fn new(round: u32) -> Self {
        Self {
            round,
            turns: Vec::new(),
            winner: None,
        }
    }

    /// 1-based round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turn records in play order; entry `k` carries turn number `k + 1`.
    #[must_use]
    pub fn turns(&self) -> &[TurnEntry] {
        &self.turns
    }

    /// Name of the round winner, if one was recorded.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }
}

impl fmt::Display for RoundLog {
    // Playback text: the start marker, every turn, then the winner line,
    // separated by blank lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start of round {}", self.round)?;
        for turn in &self.turns {
            write!(f, "\n\n{}", turn)?;
        }
        if let Some(winner) = &self.winner {
            write!(f, "\n\n{} won round {}", winner, self.round)?;
        }
        Ok(())
    }
}

/// Error for a playback query naming a round that is not in the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundNotFound {
    requested: u32,
    archived: u32,
}

impl RoundNotFound {
    /// The round number that was asked for.
    #[must_use]
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// How many rounds were archived at query time.
    #[must_use]
    pub fn archived(&self) -> u32 {
        self.archived
    }
}

impl fmt::Display for RoundNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {} is not in the archive ({} rounds archived)",
            self.requested, self.archived
        )
    }
}

impl std::error::Error for RoundNotFound {}

/// Append-only recorder for a whole session.
///
/// The active round accumulates [`TurnEntry`] records as turns resolve.
/// Closing a round moves its log into the archive under the round number
/// and opens the next round at turn 1. Nothing is ever deleted; a persona
/// rotation only changes which computer name future entries bake in.
#[derive(Clone, Debug)]
pub struct GameHistory {
    human: String,
    computer: String,
    current: u32,
    next_turn: u32,
    active: RoundLog,
    archive: FxHashMap<u32, RoundLog>,
    human_rounds: u32,
    computer_rounds: u32,
}

impl GameHistory {
    /// Start a recorder bound to the two identities, at round 1, turn 1.
    pub fn new(human: impl Into<String>, computer: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            computer: computer.into(),
            current: 1,
            next_turn: 1,
            active: RoundLog::new(1),
            archive: FxHashMap::default(),
            human_rounds: 0,
            computer_rounds: 0,
        }
    }

    /// The tracked human identity.
    #[must_use]
    pub fn human_name(&self) -> &str {
        &self.human
    }

    /// The tracked computer identity.
    #[must_use]
    pub fn computer_name(&self) -> &str {
        &self.computer
    }

    /// 1-based number of the round currently being recorded.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current
    }

    /// How many rounds have been archived so far.
    #[must_use]
    pub fn archived_rounds(&self) -> u32 {
        self.current - 1
    }

    /// The round currently being recorded.
    #[must_use]
    pub fn active_round(&self) -> &RoundLog {
        &self.active
    }

    /// Rounds won by `seat` across the whole session.
    #[must_use]
    pub fn rounds_won(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human_rounds,
            Seat::Computer => self.computer_rounds,
        }
    }

    /// Append the next turn's record to the active round.
    pub fn record_turn(&mut self, human_move: Move, computer_move: Move) {
        self.active.turns.push(TurnEntry {
            turn: self.next_turn,
            human: self.human.clone(),
            human_move,
            computer: self.computer.clone(),
            computer_move,
        });
        self.next_turn += 1;
    }

    /// Attribute the active round to `winner` and bump that side's tally.
    ///
    /// The name must match one of the tracked identities; anything else is
    /// ignored.
    pub fn record_round_winner(&mut self, winner: &str) {
        if winner == self.human {
            self.active.winner = Some(self.human.clone());
            self.human_rounds += 1;
        } else if winner == self.computer {
            self.active.winner = Some(self.computer.clone());
            self.computer_rounds += 1;
        }
    }

    /// Close the active round: archive its log and open the next round at
    /// turn 1.
    pub fn archive_round(&mut self) {
        let closed = std::mem::replace(&mut self.active, RoundLog::new(self.current + 1));
        self.archive.insert(self.current, closed);
        self.current += 1;
        self.next_turn = 1;
    }

    /// Replace the tracked computer identity after a persona rotation.
    ///
    /// Already-recorded entries keep the name they were recorded under;
    /// only future entries use the new one. Tallies are untouched.
    pub fn rebind_computer(&mut self, name: impl Into<String>) {
        self.computer = name.into();
    }

    /// Fetch the archived log for `round`.
    ///
    /// Only completed rounds can be played back, so `round` must satisfy
    /// `1 <= round < current_round()`.
    pub fn round(&self, round: u32) -> Result<&RoundLog, RoundNotFound> {
        self.archive.get(&round).ok_or(RoundNotFound {
            requested: round,
            archived: self.archived_rounds(),
        })
    }
}
