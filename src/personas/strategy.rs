//! Move-selection policies for computer personas.
//!
//! The computer opponents differ only in how they pick their next move,
//! so selection is a closed enum rather than a type per persona:
//!
//! - [`MoveStrategy::Uniform`] draws every value with equal probability
//! - [`MoveStrategy::Weighted`] draws from a fixed multiset; weights are
//!   encoded by repetition, so four rocks and two papers is a 2:1 skew
//! - [`MoveStrategy::Cyclic`] replays a fixed sequence forever from an
//!   internal wrapping cursor

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Move};

/// Inline storage for strategy tables. The stock personas need at most
/// six entries, so these never spill to the heap.
pub type MoveTable = SmallVec<[Move; 6]>;

/// How a computer persona picks its next move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStrategy {
    /// Independent uniform draw over the whole domain.
    Uniform,
    /// Independent draw from a fixed multiset.
    Weighted(MoveTable),
    /// Fixed sequence replayed from a wrapping cursor.
    Cyclic { sequence: MoveTable, cursor: usize },
}

impl MoveStrategy {
    /// Weighted draw over `pool`. Duplicate a value to raise its odds.
    ///
    /// # Panics
    ///
    /// Panics if `pool` is empty.
    #[must_use]
    pub fn weighted(pool: &[Move]) -> Self {
        assert!(!pool.is_empty(), "weighted strategy needs a non-empty pool");
        MoveStrategy::Weighted(MoveTable::from_slice(pool))
    }

    /// Cyclic replay of `sequence`, starting at its first entry.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    #[must_use]
    pub fn cyclic(sequence: &[Move]) -> Self {
        assert!(
            !sequence.is_empty(),
            "cyclic strategy needs a non-empty sequence"
        );
        MoveStrategy::Cyclic {
            sequence: MoveTable::from_slice(sequence),
            cursor: 0,
        }
    }

    /// Produce the next move.
    ///
    /// Uniform and weighted variants draw independently on every call. The
    /// cyclic variant returns `sequence[k % len]` on its k-th call and
    /// advances its own cursor; the RNG is untouched.
    pub fn select(&mut self, rng: &mut GameRng) -> Move {
        match self {
            MoveStrategy::Uniform => Move::random(rng),
            MoveStrategy::Weighted(pool) => pool[rng.gen_range_usize(0..pool.len())],
            MoveStrategy::Cyclic { sequence, cursor } => {
                let pick = sequence[*cursor];
                *cursor = (*cursor + 1) % sequence.len();
                pick
            }
        }
    }
}
