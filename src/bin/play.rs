//! Interactive Rock-Paper-Scissors-Lizard-Spock at the terminal.
//!
//! Run with `RUST_LOG=debug` to watch the engine's event log alongside
//! the game.

use colored::Colorize;
use dialoguer::Input;

use rpsls::{Move, Session, Terminal};

fn main() {
    env_logger::init();

    println!("{}", format!("Welcome to {}!", roll_call()).bold().cyan());

    let name = prompt_name();
    let mut session = Session::builder(name).build();
    let mut terminal = Terminal::new();

    session.run(&mut terminal);

    println!("Thanks for playing {}.", roll_call());
    println!("{}", "Good bye!".bold());
}

/// The full domain, title-cased: "Rock, Paper, Scissors, Lizard, Spock".
fn roll_call() -> String {
    Move::ALL
        .iter()
        .map(|value| title_case(value.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn prompt_name() -> String {
    let name: String = Input::new()
        .with_prompt("What's your name?")
        .validate_with(|entered: &String| -> Result<(), &str> {
            if entered.trim().is_empty() {
                Err("Sorry, you must enter a name")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .expect("terminal input failed");
    name.trim().to_string()
}
