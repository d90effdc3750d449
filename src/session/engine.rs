//! The round/match state machine.

use log::{debug, info};

use crate::console::{Console, Pace};
use crate::core::{GameRng, Move, Player, Seat, TurnOutcome};
use crate::history::GameHistory;
use crate::personas::{self, Persona};

/// Score at which a match concludes with a winner.
pub const WIN_THRESHOLD: u32 = 3;

const TURN_SEPARATOR: &str = "---------------------";

/// Configures and builds a [`Session`].
///
/// ```
/// use rpsls::session::Session;
///
/// let session = Session::builder("Ada").seed(42).build();
/// assert_eq!(session.human().name(), "Ada");
/// ```
pub struct SessionBuilder {
    human_name: String,
    threshold: u32,
    seed: Option<u64>,
    persona: Option<Persona>,
}

impl SessionBuilder {
    /// Start configuring a session for the named human player.
    pub fn new(human_name: impl Into<String>) -> Self {
        Self {
            human_name: human_name.into(),
            threshold: WIN_THRESHOLD,
            seed: None,
            persona: None,
        }
    }

    /// Override the score threshold at which a match concludes.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is zero.
    #[must_use]
    pub fn threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "threshold must be at least 1");
        self.threshold = threshold;
        self
    }

    /// Seed the session RNG for reproducible play. Unseeded sessions draw
    /// from entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Field a specific opening persona instead of a random draw.
    #[must_use]
    pub fn persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    /// Build the session: both seats, the opening challenger, an empty
    /// history.
    #[must_use]
    pub fn build(self) -> Session {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let persona = self
            .persona
            .unwrap_or_else(|| personas::draw(&mut rng));
        let human = Player::new(self.human_name);
        let computer = Player::new(persona.name());
        let history = GameHistory::new(human.name(), computer.name());

        info!(
            "session start: seed {}, opening challenger {}",
            rng.seed(),
            persona.name()
        );

        Session {
            human,
            computer,
            persona,
            history,
            rng,
            threshold: self.threshold,
        }
    }
}

/// The match/round state machine for one interactive session.
///
/// A session plays rounds; a round plays turns until one seat's score
/// reaches the threshold; each turn is one exchange of moves. All player
/// interaction flows through the [`Console`] passed to the driving
/// methods, so the machine is deterministic given a seed and a scripted
/// console.
pub struct Session {
    human: Player,
    computer: Player,
    persona: Persona,
    history: GameHistory,
    rng: GameRng,
    threshold: u32,
}

impl Session {
    /// Builder entry point.
    pub fn builder(human_name: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(human_name)
    }

    /// The human seat.
    #[must_use]
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The computer seat.
    #[must_use]
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// The persona currently bound to the computer seat.
    #[must_use]
    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// The session's history recorder.
    #[must_use]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The score at which a match concludes.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Play rounds until the human declines to continue.
    pub fn run(&mut self, console: &mut impl Console) {
        loop {
            console.pause(Pace::Enter("start"));
            self.play_round(console);
            if !console.read_yes_no("Would you like to play again?") {
                break;
            }
        }
        info!(
            "session over after {} rounds",
            self.history.archived_rounds()
        );
    }

    /// Play turns until the threshold is reached, then resolve the round.
    pub fn play_round(&mut self, console: &mut impl Console) {
        loop {
            self.play_turn(console);
            console.pause(Pace::Enter("continue"));
            if self.win_condition() {
                break;
            }
        }
        self.resolve_round(console);
    }

    /// One exchange of moves: collect, resolve, record, score, report.
    pub fn play_turn(&mut self, console: &mut impl Console) {
        console.display(TURN_SEPARATOR);
        self.display_score(console);

        let human_move = self.prompt_human_move(console);
        let computer_move = self.persona.select_move(&mut self.rng);
        self.human.set_move(human_move);
        self.computer.set_move(computer_move);
        self.history.record_turn(human_move, computer_move);

        console.display(&format!("{} chose {}", self.human.name(), human_move));
        console.pause(Pace::Loading);
        console.display(&format!("{} chose {}", self.computer.name(), computer_move));
        console.pause(Pace::Loading);

        let outcome = TurnOutcome::from_moves(human_move, computer_move);
        debug!(
            "turn {}: {} vs {} -> {:?}",
            self.history.active_round().turns().len(),
            human_move,
            computer_move,
            outcome
        );
        match outcome {
            TurnOutcome::Winner(Seat::Human) => {
                console.display(&format!("{} beats {}", human_move, computer_move));
                console.display(&format!("{} won!", self.human.name()));
            }
            TurnOutcome::Winner(Seat::Computer) => {
                console.display(&format!("{} beats {}", computer_move, human_move));
                console.display(&format!("{} won!", self.computer.name()));
            }
            TurnOutcome::Tie => console.display("It's a tie"),
        }

        self.human.award_point_if_winner(&mut self.computer);
        self.display_score(console);
    }

    /// The seat whose score has reached the threshold, if any.
    ///
    /// The human seat is checked first. Only one score changes per turn,
    /// so both seats can never qualify at once; the order is still the
    /// fixed tie-break policy.
    #[must_use]
    pub fn match_winner(&self) -> Option<Seat> {
        if self.human.score() >= self.threshold {
            return Some(Seat::Human);
        }
        if self.computer.score() >= self.threshold {
            return Some(Seat::Computer);
        }
        None
    }

    /// Whether the current match has concluded.
    #[must_use]
    pub fn win_condition(&self) -> bool {
        self.match_winner().is_some()
    }

    /// Close the round: announce and record the winner, archive the log,
    /// offer the history browser, reset scores, rotate the challenger.
    fn resolve_round(&mut self, console: &mut impl Console) {
        if let Some(winner) = self.match_winner() {
            let name = self.seat_name(winner).to_string();
            console.display(&format!("{} wins the match!", name));
            info!("round {} won by {}", self.history.current_round(), name);
            self.history.record_round_winner(&name);
        }
        self.history.archive_round();
        console.review_history(&self.history);

        self.human.reset_score();
        self.computer.reset_score();
        self.rotate_challenger();
    }

    /// Field a fresh persona, guaranteed by name to differ from the
    /// current one, and rebind the computer seat and history to it.
    fn rotate_challenger(&mut self) {
        let next = personas::draw_distinct(&mut self.rng, self.persona.name());
        debug!(
            "challenger rotated: {} -> {}",
            self.persona.name(),
            next.name()
        );
        self.computer = Player::new(next.name());
        self.history.rebind_computer(next.name());
        self.persona = next;
    }

    /// Re-prompt through the console until the entered token parses.
    fn prompt_human_move(&self, console: &mut impl Console) -> Move {
        loop {
            let raw = console.read_move_token(&Move::ALL);
            match Move::from_token(raw.trim()) {
                Ok(value) => return value,
                Err(err) => {
                    debug!("{} entered an invalid move: {}", self.human.name(), err);
                    console.display(&format!("Sorry, {}", err));
                }
            }
        }
    }

    fn seat_name(&self, seat: Seat) -> &str {
        match seat {
            Seat::Human => self.human.name(),
            Seat::Computer => self.computer.name(),
        }
    }

    fn display_score(&self, console: &mut impl Console) {
        console.display(&format!("{}: {}", self.human.name(), self.human.score()));
        console.display(&format!(
            "{}: {}",
            self.computer.name(),
            self.computer.score()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personas::MoveStrategy;
    use std::collections::VecDeque;

    /// Minimal scripted console for driving the machine headless.
    struct Script {
        moves: VecDeque<&'static str>,
        answers: VecDeque<bool>,
        lines: Vec<String>,
    }

    impl Script {
        fn new(moves: &[&'static str], answers: &[bool]) -> Self {
            Self {
                moves: moves.iter().copied().collect(),
                answers: answers.iter().copied().collect(),
                lines: Vec::new(),
            }
        }

        fn saw(&self, needle: &str) -> bool {
            self.lines.iter().any(|line| line.contains(needle))
        }
    }

    impl Console for Script {
        fn read_move_token(&mut self, _domain: &[Move]) -> String {
            self.moves.pop_front().expect("script ran out of moves").to_string()
        }

        fn read_yes_no(&mut self, _prompt: &str) -> bool {
            self.answers.pop_front().expect("script ran out of answers")
        }

        fn display(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn pause(&mut self, _pace: Pace) {}
    }

    fn scissors_bot() -> Persona {
        Persona::new("Scripty", MoveStrategy::cyclic(&[Move::Scissors]))
    }

    #[test]
    fn test_builder_defaults() {
        let session = Session::builder("Ada").seed(1).build();
        assert_eq!(session.threshold(), WIN_THRESHOLD);
        assert_eq!(session.human().name(), "Ada");
        assert_eq!(session.computer().name(), session.persona().name());
        assert_eq!(session.history().current_round(), 1);
    }

    #[test]
    fn test_builder_persona_override() {
        let session = Session::builder("Ada").seed(1).persona(scissors_bot()).build();
        assert_eq!(session.persona().name(), "Scripty");
        assert_eq!(session.computer().name(), "Scripty");
        assert_eq!(session.history().computer_name(), "Scripty");
    }

    #[test]
    #[should_panic(expected = "threshold must be at least 1")]
    fn test_builder_rejects_zero_threshold() {
        let _ = Session::builder("Ada").threshold(0);
    }

    #[test]
    fn test_match_winner_checks_human_seat_first() {
        let mut session = Session::builder("Ada").seed(1).build();
        assert_eq!(session.match_winner(), None);

        for _ in 0..session.threshold() {
            session.human.add_point();
            session.computer.add_point();
        }
        assert_eq!(session.match_winner(), Some(Seat::Human));
    }

    #[test]
    fn test_match_winner_holds_without_mutation() {
        let mut session = Session::builder("Ada").seed(1).build();
        for _ in 0..session.threshold() {
            session.computer.add_point();
        }

        assert_eq!(session.match_winner(), Some(Seat::Computer));
        assert!(session.win_condition());
        assert_eq!(session.match_winner(), Some(Seat::Computer));
    }

    #[test]
    fn test_turn_awards_winner_and_records() {
        let mut session = Session::builder("Ada")
            .seed(1)
            .persona(scissors_bot())
            .build();
        let mut console = Script::new(&["rock"], &[]);

        session.play_turn(&mut console);

        assert_eq!(session.human().score(), 1);
        assert_eq!(session.computer().score(), 0);
        assert_eq!(session.history().active_round().turns().len(), 1);
        assert!(console.saw("rock beats scissors"));
        assert!(console.saw("Ada won!"));
    }

    #[test]
    fn test_turn_reports_tie_without_scoring() {
        let mut session = Session::builder("Ada")
            .seed(1)
            .persona(Persona::new(
                "Scripty",
                MoveStrategy::cyclic(&[Move::Spock]),
            ))
            .build();
        let mut console = Script::new(&["spock"], &[]);

        session.play_turn(&mut console);

        assert_eq!(session.human().score(), 0);
        assert_eq!(session.computer().score(), 0);
        assert!(console.saw("It's a tie"));
    }

    #[test]
    fn test_invalid_token_is_retried() {
        let mut session = Session::builder("Ada")
            .seed(1)
            .persona(scissors_bot())
            .build();
        let mut console = Script::new(&["banana", "sp"], &[]);

        session.play_turn(&mut console);

        assert!(console.saw("Sorry, 'banana' is not a move"));
        assert_eq!(session.human().score(), 1); // spock beats scissors
    }

    #[test]
    fn test_round_resolution_resets_and_rotates() {
        let mut session = Session::builder("Ada")
            .seed(1)
            .persona(scissors_bot())
            .build();
        let mut console = Script::new(&["rock", "rock", "rock"], &[false]);

        session.run(&mut console);

        assert_eq!(session.human().score(), 0);
        assert_eq!(session.computer().score(), 0);
        assert_ne!(session.persona().name(), "Scripty");
        assert_eq!(session.computer().name(), session.persona().name());
        assert_eq!(session.history().computer_name(), session.persona().name());

        assert_eq!(session.history().archived_rounds(), 1);
        let round = session.history().round(1).unwrap();
        assert_eq!(round.turns().len(), 3);
        assert_eq!(round.winner(), Some("Ada"));
        assert_eq!(session.history().rounds_won(Seat::Human), 1);
        assert!(console.saw("Ada wins the match!"));
    }
}
