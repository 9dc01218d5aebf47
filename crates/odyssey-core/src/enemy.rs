//! Enemies spawned for a single encounter.
//!
//! An enemy has no identity outside the encounter that spawned it. Its HP
//! is a raw value rather than a clamped meter: damage may push it below
//! zero within an action, and the win check is `hp <= 0`, never `== 0`.

use serde::{Deserialize, Serialize};

/// One enemy combatant, alive only for the duration of an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name (also the target key for kill-quest progress).
    pub name: String,
    /// Current HP; may be transiently negative after a lethal hit.
    pub hp: i32,
    /// HP the enemy spawned with.
    pub max_hp: i32,
    /// Attack stat.
    pub attack: i32,
    /// Defense stat.
    pub defense: i32,
}

impl Enemy {
    /// Create an enemy at full HP.
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            attack,
            defense,
        }
    }

    /// Subtract damage from HP without clamping.
    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    /// Returns true once HP has reached or passed zero.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// HP for display, never below zero.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }
}
