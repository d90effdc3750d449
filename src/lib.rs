//! # rpsls
//!
//! A Rock-Paper-Scissors-Lizard-Spock match engine with scripted opponent
//! personas and a terminal frontend.
//!
//! ## Design Principles
//!
//! 1. **Closed Domain**: One `Move` enum and a table-driven beats-relation.
//!    No per-value types for a fixed five-value game, and no `PartialOrd`:
//!    the relation is non-transitive.
//!
//! 2. **Deterministic Core**: Every random draw flows through an injected
//!    [`GameRng`]. A session built from a fixed seed replays identically.
//!
//! 3. **I/O at the Seam**: The state machine talks to the player only
//!    through the [`Console`] trait, so the engine runs headless under test
//!    and interactive behind the `frontend` feature.
//!
//! ## Modules
//!
//! - `core`: the move domain, seats and players, deterministic RNG
//! - `personas`: move-selection strategies and the stock opponent roster
//! - `history`: append-only turn/round recorder with playback queries
//! - `session`: the round/match state machine and its builder
//! - `console`: the player-facing seam and the terminal frontend

pub mod console;
pub mod core;
pub mod history;
pub mod personas;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, InvalidMove, Move, Player, Seat, TurnOutcome};

pub use crate::personas::{MoveStrategy, MoveTable, Persona};

pub use crate::history::{GameHistory, RoundLog, RoundNotFound, TurnEntry};

pub use crate::session::{Session, SessionBuilder, WIN_THRESHOLD};

pub use crate::console::{Console, Pace};

#[cfg(feature = "frontend")]
pub use crate::console::Terminal;
