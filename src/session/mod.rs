//! Round/match orchestration.
//!
//! [`Session`] drives the interactive loop: collect a move from each seat,
//! resolve the exchange, accumulate score to the threshold, close the
//! round, rotate the challenger, and ask whether to go again. Sessions are
//! configured through [`SessionBuilder`].

mod engine;

pub use engine::{Session, SessionBuilder, WIN_THRESHOLD};
