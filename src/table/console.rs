//! Line-based console implementation of the interaction boundary.
//!
//! All validation and retry lives here: the engine only ever receives a
//! positive player count and resolved yes/no answers. A closed stdin is
//! treated as a request to quit, per the boundary contract (cancellation is
//! not the engine's concern).

use std::io::{self, BufRead, Write};

use crate::core::{Player, PlayerStatus};
use crate::table::CardTable;

/// Stdin/stdout interaction boundary for the CLI.
#[derive(Debug, Default)]
pub struct ConsoleTable;

impl ConsoleTable {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Print a prompt and read one trimmed line. Exits the process cleanly
    /// if stdin is closed.
    fn prompt(&self, message: &str) -> String {
        print!("{message}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                std::process::exit(0);
            }
            Ok(_) => line.trim().to_string(),
        }
    }

    /// Ask a yes/no question, re-prompting until a recognized token arrives.
    fn prompt_yes_no(&self, message: &str) -> bool {
        loop {
            let answer = self.prompt(message).to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer Y or N."),
            }
        }
    }

    fn describe_hand(player: &Player) -> String {
        if player.hand.is_empty() {
            "no cards".to_string()
        } else {
            let cards: Vec<String> = player.hand.iter().map(|c| c.to_string()).collect();
            format!("{} ({} points)", cards.join(" "), player.score)
        }
    }
}

impl CardTable for ConsoleTable {
    fn get_player_count(&mut self) -> usize {
        loop {
            let answer = self.prompt("How many players? ");
            match answer.parse::<usize>() {
                Ok(count) if count > 0 => return count,
                _ => println!("Please enter a positive number."),
            }
        }
    }

    fn get_player_name(&mut self, ordinal: usize) -> String {
        loop {
            let name = self.prompt(&format!("Name of player {ordinal}: "));
            if !name.is_empty() {
                return name;
            }
        }
    }

    fn show_players(&mut self, players: &[Player]) {
        println!("================================");
        println!("Racing to 21:");
        for player in players {
            println!("  {}", player.name);
        }
    }

    fn offer_card(&mut self, player: &Player) -> bool {
        self.prompt_yes_no(&format!("{}, draw a card? (Y/N) ", player.name))
    }

    fn show_hand(&mut self, player: &Player) {
        let status = match player.status {
            PlayerStatus::Active => "",
            PlayerStatus::Stay => " [stays]",
            PlayerStatus::Bust => " [busted]",
            PlayerStatus::Win => " [21!]",
        };
        println!("{}: {}{}", player.name, Self::describe_hand(player), status);
    }

    fn announce_winner(&mut self, winner: Option<&Player>) {
        match winner {
            Some(player) => println!("*** {} wins! ***", player.name),
            None => println!("*** Nobody wins this round. ***"),
        }
    }

    fn ask_continue(&mut self, player: &Player) -> bool {
        self.prompt_yes_no(&format!("{}, play another round? (Y/N) ", player.name))
    }

    fn ask_restart(&mut self) -> bool {
        self.prompt_yes_no("Start a fresh game with new players? (Y/N) ")
    }
}
