//! Mutable session state.
//!
//! Everything a running game owns lives in one place: the character and
//! inventory, any in-flight encounter, the phase machine, the message log,
//! and the session RNG. The engine borrows this mutably for each action;
//! nothing here is global.

use odyssey_core::{Character, Enemy, Inventory, StatusEffects};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::log::MessageLog;

/// What the session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Out of combat; free actions are available.
    #[default]
    Exploring,
    /// An encounter is in progress.
    Combat,
    /// The character has fallen; only inspection commands work.
    Defeated,
}

/// A single enemy engagement and its enemy-side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    /// The spawned enemy.
    pub enemy: Enemy,
    /// Timed effects on the enemy.
    pub enemy_effects: StatusEffects,
}

impl Encounter {
    /// Start an encounter against an enemy, with no effects active.
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            enemy_effects: StatusEffects::new(),
        }
    }
}

/// The full mutable state of one game session.
#[derive(Debug)]
pub struct SessionState {
    /// The player character.
    pub character: Character,
    /// The player's inventory.
    pub inventory: Inventory,
    /// Timed effects on the player.
    pub player_effects: StatusEffects,
    /// The current encounter, if any.
    pub encounter: Option<Encounter>,
    /// Current phase.
    pub phase: GamePhase,
    /// The narrative log.
    pub log: MessageLog,
    /// Session RNG, seeded from [`GameConfig`].
    pub rng: StdRng,
}

impl SessionState {
    /// Create a fresh exploring state for a character.
    pub fn new(character: Character, config: GameConfig) -> Self {
        Self {
            character,
            inventory: Inventory::new(),
            player_effects: StatusEffects::new(),
            encounter: None,
            phase: GamePhase::Exploring,
            log: MessageLog::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Returns true while an encounter is in progress.
    pub fn in_combat(&self) -> bool {
        self.phase == GamePhase::Combat
    }
}
