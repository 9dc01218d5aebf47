//! Encounter and loot tables.
//!
//! Enemy templates hold nominal stats; spawning scales HP by a random
//! factor in `[0.8, 1.2)` so repeat encounters with the same species vary.
//! Attack and defense are never scaled.

use odyssey_core::Enemy;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A spawnable enemy species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Display name.
    pub name: String,
    /// Nominal HP before spawn scaling.
    pub hp: i32,
    /// Attack stat.
    pub attack: i32,
    /// Defense stat.
    pub defense: i32,
    /// Regions where the species roams.
    pub locations: Vec<String>,
}

impl EnemyTemplate {
    fn new(name: &str, hp: i32, attack: i32, defense: i32, locations: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            hp,
            attack,
            defense,
            locations: locations.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The static encounter and loot tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterTables {
    /// Spawnable enemy species.
    pub enemies: Vec<EnemyTemplate>,
    /// Items an enemy may drop on defeat.
    pub loot: Vec<String>,
}

impl EncounterTables {
    /// The standard bestiary and loot pool.
    pub fn standard() -> Self {
        Self {
            enemies: vec![
                EnemyTemplate::new("Xenobot", 50, 10, 3, &["Crash Site", "Scrap Fields"]),
                EnemyTemplate::new("Plasmavore", 40, 12, 2, &["Crystal Caves"]),
                EnemyTemplate::new("Nano Swarm", 30, 8, 1, &["Scrap Fields", "Ruined Station"]),
                EnemyTemplate::new("Sand Worm", 120, 15, 5, &["Dune Sea"]),
                EnemyTemplate::new("Void Stalker", 80, 18, 2, &["Ruined Station"]),
            ],
            loot: vec![
                "Energy Cell".to_string(),
                "Alien Crystal".to_string(),
                "Data Chip".to_string(),
            ],
        }
    }

    /// Spawn a random enemy, or `None` if the bestiary is empty.
    ///
    /// HP is scaled by a factor drawn uniformly from `[0.8, 1.2)` and
    /// floored; the scaled value becomes both current and max HP.
    pub fn spawn(&self, rng: &mut StdRng) -> Option<Enemy> {
        if self.enemies.is_empty() {
            return None;
        }
        let template = &self.enemies[rng.random_range(0..self.enemies.len())];
        let factor = 0.8 + rng.random::<f64>() * 0.4;
        let hp = (f64::from(template.hp) * factor).floor() as i32;
        Some(Enemy::new(
            &template.name,
            hp,
            template.attack,
            template.defense,
        ))
    }

    /// Pick a random loot drop, or `None` if the pool is empty.
    pub fn random_loot(&self, rng: &mut StdRng) -> Option<&str> {
        if self.loot.is_empty() {
            return None;
        }
        Some(&self.loot[rng.random_range(0..self.loot.len())])
    }
}
