//! CLI frontend for the Galactic Odyssey combat engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "odyssey",
    about = "Galactic Odyssey — a turn-based sci-fi adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive play session
    Play {
        /// Character name
        #[arg(short, long, default_value = "Traveler")]
        name: String,

        /// Character race: human, cyborg, android
        #[arg(long, default_value = "human")]
        race: String,

        /// Character role: warrior, rogue, scientist
        #[arg(long, default_value = "warrior")]
        role: String,

        /// RNG seed for a deterministic session
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List the enemies roaming the sector
    Roster,

    /// List available quests
    Quests,

    /// List the item catalog
    Items,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            race,
            role,
            seed,
        } => commands::play::run(&name, &race, &role, seed),
        Commands::Roster => commands::roster::run(),
        Commands::Quests => commands::quests::run(),
        Commands::Items => commands::items::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
