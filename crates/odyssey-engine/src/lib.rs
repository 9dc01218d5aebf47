//! Turn resolution and progression engine for Galactic Odyssey.
//!
//! Everything here is synchronous: a player action resolves completely,
//! including the enemy's reaction and any quest or leveling side effects,
//! before control returns. Randomness comes from one seeded RNG owned by
//! the session state, so whole sessions replay deterministically.

/// Combat turn resolution.
pub mod combat;
/// Engine configuration.
pub mod config;
/// Error types for the command surface.
pub mod error;
/// The append-only message log.
pub mod log;
/// Experience and leveling.
pub mod progression;
/// Quest acceptance, progress, and completion.
pub mod quests;
/// The interactive command session.
pub mod session;
/// Mutable session state.
pub mod state;
/// Effective stat resolution.
pub mod stats;
/// Encounter and loot tables.
pub mod tables;

/// Re-export combat types.
pub use combat::{CombatEngine, SPECIAL_ABILITY_COST, TurnResult};
/// Re-export the configuration type.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export log types.
pub use log::{LogEntry, MessageLog};
/// Re-export progression types.
pub use progression::{LEVEL_GROWTH, LevelUp, StatGrowth, gain_xp};
/// Re-export quest tracking types.
pub use quests::{QuestEvent, QuestTracker};
/// Re-export the session type.
pub use session::GameSession;
/// Re-export session state types.
pub use state::{Encounter, GamePhase, SessionState};
/// Re-export stat resolution.
pub use stats::{EffectiveStats, effective_stats};
/// Re-export encounter tables.
pub use tables::{EncounterTables, EnemyTemplate};
