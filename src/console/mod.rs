//! The seam between the engine and the player.
//!
//! The state machine never touches stdin or stdout. Every prompt, line of
//! output, and pacing beat flows through the [`Console`] trait, so the
//! engine runs headless under test and interactive behind the `frontend`
//! feature. [`Terminal`] is the interactive implementation; tests script
//! their own.

use crate::core::Move;
use crate::history::GameHistory;

#[cfg(feature = "frontend")]
mod terminal;

#[cfg(feature = "frontend")]
pub use terminal::Terminal;

/// Pacing cue attached to a [`Console::pause`] call. Purely cosmetic;
/// implementations may ignore it entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// Short animated beat between lines of play.
    Loading,
    /// Block until the player presses enter. The label names the action
    /// being waited on, e.g. "start" or "continue".
    Enter(&'static str),
}

/// Blocking, line-oriented player interface.
///
/// Move tokens are returned raw: the engine parses and re-prompts on
/// invalid input, so implementations only collect what was typed. Yes/no
/// questions, by contrast, are resolved inside the implementation and
/// always come back as a definite answer.
pub trait Console {
    /// Prompt for a move and return the token exactly as entered.
    ///
    /// `domain` lists the values the prompt should offer.
    fn read_move_token(&mut self, domain: &[Move]) -> String;

    /// Ask a yes/no question, re-prompting until the answer parses.
    fn read_yes_no(&mut self, prompt: &str) -> bool;

    /// Write one line to the player.
    fn display(&mut self, text: &str);

    /// Cosmetic pacing between beats of play.
    fn pause(&mut self, pace: Pace);

    /// Post-round hook for browsing the archive. The default does nothing,
    /// which suits headless consoles.
    fn review_history(&mut self, history: &GameHistory) {
        let _ = history;
    }
}
