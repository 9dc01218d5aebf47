use std::io::{self, BufRead, Write};

use colored::Colorize;

use odyssey_core::{Character, Race, Role};
use odyssey_engine::{GameConfig, GameSession};

pub fn run(name: &str, race: &str, role: &str, seed: u64) -> Result<(), String> {
    let race = Race::parse(race).ok_or_else(|| {
        format!("unknown race '{race}'. Choose one of: human, cyborg, android")
    })?;
    let role = Role::parse(role).ok_or_else(|| {
        format!("unknown role '{role}'. Choose one of: warrior, rogue, scientist")
    })?;

    let character = Character::new(name, race, role);
    let mut session = GameSession::new(character, GameConfig::with_seed(seed));

    println!(
        "  {} Welcome, {name} the {race} {role}! Your journey begins...",
        "Starting".bold()
    );
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
