//! Effective stat resolution.
//!
//! Effective attack and defense are the character's base stats plus
//! equipment bonuses plus active buff magnitudes. This is a pure function
//! of state: it is called for both display and damage math within the same
//! turn and must return the same answer each time.

use odyssey_core::{Character, EffectKind, EquipSlot, ItemCatalog, StatusEffects};

/// Resolved attack and defense after equipment and buffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStats {
    /// Effective attack.
    pub attack: i32,
    /// Effective defense.
    pub defense: i32,
}

/// Compute effective stats for a character.
///
/// Equipment contributes per slot: weapon adds attack, armor adds defense,
/// and an accessory may add either or both. An equipped item missing from
/// the catalog contributes nothing rather than failing.
pub fn effective_stats(
    character: &Character,
    effects: &StatusEffects,
    catalog: &ItemCatalog,
) -> EffectiveStats {
    let mut attack = character.attack;
    let mut defense = character.defense;

    if let Some(def) = character
        .equipment
        .in_slot(EquipSlot::Weapon)
        .and_then(|name| catalog.get(name))
    {
        attack += def.attack;
    }
    if let Some(def) = character
        .equipment
        .in_slot(EquipSlot::Armor)
        .and_then(|name| catalog.get(name))
    {
        defense += def.defense;
    }
    if let Some(def) = character
        .equipment
        .in_slot(EquipSlot::Accessory)
        .and_then(|name| catalog.get(name))
    {
        attack += def.attack;
        defense += def.defense;
    }

    attack += effects.bonus(EffectKind::AttackBoost);
    defense += effects.bonus(EffectKind::DefenseBoost);

    EffectiveStats { attack, defense }
}
