//! Core types for Galactic Odyssey: characters, enemies, items, and quests.
//!
//! This crate defines the data model the combat engine operates on. It is
//! deliberately free of randomness and I/O: any state can be constructed
//! programmatically or deserialized from JSON.

/// The player character, races, and roles.
pub mod character;
/// Per-encounter enemy combatants.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// Timed status effects keyed by kind.
pub mod effect;
/// The player's item inventory.
pub mod inventory;
/// Items, the item catalog, and equipment slots.
pub mod item;
/// Clamped resource meters (HP, energy).
pub mod meter;
/// Quest definitions and the quest catalog.
pub mod quest;

/// Re-export character types.
pub use character::{Character, Race, Role, RoleStats};
/// Re-export the enemy type.
pub use enemy::Enemy;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export status effect types.
pub use effect::{ActiveEffect, EffectKind, StatusEffects};
/// Re-export the inventory type.
pub use inventory::Inventory;
/// Re-export item and equipment types.
pub use item::{ConsumableEffect, EquipSlot, Equipment, ItemCatalog, ItemDef, ItemKind};
/// Re-export the meter type.
pub use meter::Meter;
/// Re-export quest types.
pub use quest::{
    Dialog, Objective, ObjectiveKind, Quest, QuestCatalog, QuestProgress, QuestState, QuestStep,
    Rewards,
};
