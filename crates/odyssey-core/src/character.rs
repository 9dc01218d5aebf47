//! The player character: race, role, stats, and quest bookkeeping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Equipment;
use crate::meter::Meter;
use crate::quest::{QuestProgress, QuestState};

/// The character's species. Cosmetic only; stats come from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    /// Baseline human colonist.
    Human,
    /// Augmented human.
    Cyborg,
    /// Fully synthetic being.
    Android,
}

impl Race {
    /// Parse a race from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "cyborg" => Some(Self::Cyborg),
            "android" => Some(Self::Android),
            _ => None,
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Human => "Human",
            Self::Cyborg => "Cyborg",
            Self::Android => "Android",
        };
        write!(f, "{name}")
    }
}

/// Base stats granted by a role at character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStats {
    /// Starting (and maximum) HP.
    pub hp: i32,
    /// Starting attack.
    pub attack: i32,
    /// Starting defense.
    pub defense: i32,
    /// Starting (and maximum) energy.
    pub max_energy: i32,
}

/// The character's combat role, which fixes base stats, crit chance, and
/// the special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Durable frontline fighter. Special: Power Strike (1.5x damage).
    Warrior,
    /// Fragile high-damage striker. Special: Assassinate (2.5x damage).
    Rogue,
    /// Balanced support. Special: Shield Boost (+5 defense for 3 turns).
    Scientist,
}

impl Role {
    /// Parse a role from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Some(Self::Warrior),
            "rogue" => Some(Self::Rogue),
            "scientist" => Some(Self::Scientist),
            _ => None,
        }
    }

    /// Base stats for a fresh character of this role.
    pub fn base_stats(&self) -> RoleStats {
        match self {
            Self::Warrior => RoleStats {
                hp: 120,
                attack: 12,
                defense: 8,
                max_energy: 100,
            },
            Self::Rogue => RoleStats {
                hp: 90,
                attack: 15,
                defense: 5,
                max_energy: 120,
            },
            Self::Scientist => RoleStats {
                hp: 100,
                attack: 10,
                defense: 10,
                max_energy: 150,
            },
        }
    }

    /// Chance of a critical hit on a basic attack.
    pub fn crit_chance(&self) -> f64 {
        match self {
            Self::Rogue => 0.25,
            Self::Warrior | Self::Scientist => 0.15,
        }
    }

    /// Display name of this role's special ability.
    pub fn special_name(&self) -> &'static str {
        match self {
            Self::Warrior => "Power Strike",
            Self::Rogue => "Assassinate",
            Self::Scientist => "Shield Boost",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Warrior => "Warrior",
            Self::Rogue => "Rogue",
            Self::Scientist => "Scientist",
        };
        write!(f, "{name}")
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Species (cosmetic).
    pub race: Race,
    /// Combat role.
    pub role: Role,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Health meter.
    pub hp: Meter,
    /// Energy meter, spent on special abilities.
    pub energy: Meter,
    /// Base attack, before equipment and buffs.
    pub attack: i32,
    /// Base defense, before equipment and buffs.
    pub defense: i32,
    /// Equipped items.
    pub equipment: Equipment,
    /// Progress per accepted quest, keyed by quest id.
    pub active_quests: BTreeMap<String, QuestProgress>,
    /// Ids of completed quests, in completion order.
    pub completed_quests: Vec<String>,
}

impl Character {
    /// Create a level-1 character with the role's base stats.
    pub fn new(name: impl Into<String>, race: Race, role: Role) -> Self {
        let base = role.base_stats();
        Self {
            name: name.into(),
            race,
            role,
            level: 1,
            xp: 0,
            hp: Meter::full(base.hp),
            energy: Meter::full(base.max_energy),
            attack: base.attack,
            defense: base.defense,
            equipment: Equipment::new(),
            active_quests: BTreeMap::new(),
            completed_quests: Vec::new(),
        }
    }

    /// XP required to reach the next level from the current one.
    pub fn xp_to_next(&self) -> u32 {
        self.level * 100
    }

    /// Returns true while the character has HP remaining.
    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    /// Where the given quest sits in its lifecycle for this character.
    pub fn quest_state(&self, quest_id: &str) -> QuestState {
        if self.completed_quests.iter().any(|q| q == quest_id) {
            QuestState::Completed
        } else if self.active_quests.contains_key(quest_id) {
            QuestState::Active
        } else {
            QuestState::NotAccepted
        }
    }
}
