//! Shared scripted console for session scenario tests.

use std::collections::VecDeque;

use rpsls::{Console, GameHistory, Move, Pace};

/// Console double driven by pre-scripted input; records the transcript.
///
/// Move tokens are served from a queue. With [`ScriptedConsole::looping`]
/// the queue recycles instead of running dry, which lets a scenario play
/// an unknown number of turns against a random persona.
pub struct ScriptedConsole {
    moves: VecDeque<String>,
    answers: VecDeque<bool>,
    looping: bool,
    pub transcript: Vec<String>,
    pub reviews: u32,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self {
            moves: VecDeque::new(),
            answers: VecDeque::new(),
            looping: false,
            transcript: Vec::new(),
            reviews: 0,
        }
    }

    /// Queue move tokens to serve, in order.
    pub fn moves(mut self, tokens: &[&str]) -> Self {
        self.moves.extend(tokens.iter().map(|t| t.to_string()));
        self
    }

    /// Queue yes/no answers to serve, in order.
    pub fn answers(mut self, answers: &[bool]) -> Self {
        self.answers.extend(answers.iter().copied());
        self
    }

    /// Recycle served move tokens instead of exhausting them.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Whether any displayed line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_move_token(&mut self, _domain: &[Move]) -> String {
        let token = self.moves.pop_front().expect("script ran out of moves");
        if self.looping {
            self.moves.push_back(token.clone());
        }
        token
    }

    fn read_yes_no(&mut self, _prompt: &str) -> bool {
        self.answers.pop_front().expect("script ran out of answers")
    }

    fn display(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn pause(&mut self, _pace: Pace) {}

    fn review_history(&mut self, _history: &GameHistory) {
        self.reviews += 1;
    }
}
