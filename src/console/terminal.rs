//! Interactive terminal implementation of the console seam.

use std::thread;
use std::time::Duration;

use colored::Colorize;
use dialoguer::{Confirm, Input};

use super::{Console, Pace};
use crate::core::Move;
use crate::history::GameHistory;

const LOADING_DOTS: usize = 3;
const LOADING_BEAT: Duration = Duration::from_millis(350);

/// Real-terminal frontend: `dialoguer` prompts, paced output, and the
/// between-rounds history browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Create a terminal frontend.
    #[must_use]
    pub fn new() -> Self {
        Terminal
    }

    fn show_round(&mut self, history: &GameHistory, round: u32) {
        match history.round(round) {
            Ok(log) => println!("\n{}\n", log),
            Err(err) => println!("{}", err),
        }
    }

    fn prompt_round_number(&mut self, max: u32) -> u32 {
        Input::new()
            .with_prompt(format!("Choose a round to view (1 to {})", max))
            .validate_with(|round: &u32| -> Result<(), String> {
                if (1..=max).contains(round) {
                    Ok(())
                } else {
                    Err(format!("Pick a number from 1 to {}", max))
                }
            })
            .interact_text()
            .expect("terminal input failed")
    }
}

impl Console for Terminal {
    fn read_move_token(&mut self, domain: &[Move]) -> String {
        let names: Vec<&str> = domain.iter().map(|value| value.name()).collect();
        println!("Please choose {}:", names.join(", "));

        let shorthands: Vec<String> = Move::SHORTHANDS
            .iter()
            .map(|(short, value)| format!("'{}' = {}", short, value))
            .collect();
        println!("{}", format!("Shorthands: {}", shorthands.join(", ")).dimmed());

        Input::new()
            .with_prompt("Your move")
            .interact_text()
            .expect("terminal input failed")
    }

    fn read_yes_no(&mut self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .interact()
            .expect("terminal input failed")
    }

    fn display(&mut self, text: &str) {
        println!("{}", text);
    }

    fn pause(&mut self, pace: Pace) {
        match pace {
            Pace::Loading => {
                for _ in 0..LOADING_DOTS {
                    print!("{}", ".".dimmed());
                    let _ = std::io::Write::flush(&mut std::io::stdout());
                    thread::sleep(LOADING_BEAT);
                }
                println!();
            }
            Pace::Enter(action) => {
                let _: String = Input::new()
                    .with_prompt(format!("Press enter to {}", action))
                    .allow_empty(true)
                    .interact_text()
                    .expect("terminal input failed");
            }
        }
    }

    fn review_history(&mut self, history: &GameHistory) {
        let archived = history.archived_rounds();
        if archived == 0 {
            return;
        }
        if !self.read_yes_no("Would you like to view the move history?") {
            return;
        }

        if archived == 1 {
            self.show_round(history, 1);
            return;
        }

        loop {
            let round = self.prompt_round_number(archived);
            self.show_round(history, round);
            if !self.read_yes_no("Would you like to view another round?") {
                return;
            }
        }
    }
}
