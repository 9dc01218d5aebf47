//! Items, the item catalog, and equipment slots.
//!
//! Items are identified by display name. The catalog is static definition
//! data: the engine looks bonuses and consumable effects up here and treats
//! a missing entry as contributing nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;

/// The three equipment slots a character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    /// Main weapon; contributes attack.
    Weapon,
    /// Body armor; contributes defense.
    Armor,
    /// Accessory; may contribute attack, defense, or both.
    Accessory,
}

impl EquipSlot {
    /// Parse a slot name from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weapon" => Some(Self::Weapon),
            "armor" => Some(Self::Armor),
            "accessory" => Some(Self::Accessory),
            _ => None,
        }
    }
}

impl std::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Accessory => "accessory",
        };
        write!(f, "{name}")
    }
}

/// What broad category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon,
    /// Equippable armor.
    Armor,
    /// Equippable accessory.
    Accessory,
    /// Single-use item with an immediate effect.
    Consumable,
    /// Crafting or quest material with no direct use.
    Material,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Accessory => "accessory",
            Self::Consumable => "consumable",
            Self::Material => "material",
        };
        write!(f, "{name}")
    }
}

impl ItemKind {
    /// The equipment slot this kind goes into, if it is equippable.
    pub fn slot(&self) -> Option<EquipSlot> {
        match self {
            Self::Weapon => Some(EquipSlot::Weapon),
            Self::Armor => Some(EquipSlot::Armor),
            Self::Accessory => Some(EquipSlot::Accessory),
            Self::Consumable | Self::Material => None,
        }
    }
}

/// The immediate effect of using a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    /// Restore up to this much HP.
    Heal(i32),
    /// Restore up to this much energy.
    Energy(i32),
}

/// Static definition of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    /// Item category.
    pub kind: ItemKind,
    /// Attack bonus granted while equipped.
    pub attack: i32,
    /// Defense bonus granted while equipped.
    pub defense: i32,
    /// Effect when consumed, for consumables.
    pub effect: Option<ConsumableEffect>,
    /// Flavor description.
    pub description: String,
    /// Shop price in credits.
    pub price: u32,
}

impl ItemDef {
    fn weapon(attack: i32, description: &str, price: u32) -> Self {
        Self {
            kind: ItemKind::Weapon,
            attack,
            defense: 0,
            effect: None,
            description: description.to_string(),
            price,
        }
    }

    fn armor(defense: i32, description: &str, price: u32) -> Self {
        Self {
            kind: ItemKind::Armor,
            attack: 0,
            defense,
            effect: None,
            description: description.to_string(),
            price,
        }
    }

    fn accessory(attack: i32, defense: i32, description: &str, price: u32) -> Self {
        Self {
            kind: ItemKind::Accessory,
            attack,
            defense,
            effect: None,
            description: description.to_string(),
            price,
        }
    }

    fn consumable(effect: ConsumableEffect, description: &str, price: u32) -> Self {
        Self {
            kind: ItemKind::Consumable,
            attack: 0,
            defense: 0,
            effect: Some(effect),
            description: description.to_string(),
            price,
        }
    }

    fn material(description: &str, price: u32) -> Self {
        Self {
            kind: ItemKind::Material,
            attack: 0,
            defense: 0,
            effect: None,
            description: description.to_string(),
            price,
        }
    }
}

/// The static item catalog, keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemDef>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard item set the game ships with.
    pub fn standard() -> Self {
        let mut items = BTreeMap::new();

        items.insert(
            "Energy Cell".to_string(),
            ItemDef::consumable(ConsumableEffect::Heal(30), "Restores 30 HP", 50),
        );
        items.insert(
            "Nano Stimpack".to_string(),
            ItemDef::consumable(ConsumableEffect::Heal(50), "Restores 50 HP", 100),
        );
        items.insert(
            "Alien Crystal".to_string(),
            ItemDef::material("A mysterious glowing crystal.", 200),
        );
        items.insert(
            "Data Chip".to_string(),
            ItemDef::material("Contains encrypted data.", 150),
        );
        items.insert(
            "Scrap Metal".to_string(),
            ItemDef::material("Useful for crafting.", 20),
        );
        items.insert(
            "Rusty Pipe".to_string(),
            ItemDef::material("An old metal pipe.", 10),
        );
        items.insert(
            "Plasma Rifle".to_string(),
            ItemDef::weapon(5, "A powerful energy weapon.", 500),
        );
        items.insert(
            "Laser Blade".to_string(),
            ItemDef::weapon(7, "A high-tech melee weapon.", 750),
        );
        items.insert(
            "Photon Cannon".to_string(),
            ItemDef::weapon(10, "Devastating ranged weapon.", 1200),
        );
        items.insert(
            "Kevlar Vest".to_string(),
            ItemDef::armor(4, "Basic protective armor.", 400),
        );
        items.insert(
            "Titanium Plating".to_string(),
            ItemDef::armor(6, "Heavy-duty armor plating.", 800),
        );
        items.insert(
            "Exoskeleton".to_string(),
            ItemDef::armor(8, "Powered armor that enhances strength.", 1500),
        );
        items.insert(
            "Shield Generator".to_string(),
            ItemDef::accessory(0, 3, "Generates a personal forcefield.", 600),
        );
        items.insert(
            "Targeting HUD".to_string(),
            ItemDef::accessory(3, 0, "Improves accuracy and damage.", 600),
        );

        Self { items }
    }

    /// Insert or replace an item definition.
    pub fn insert(&mut self, name: impl Into<String>, def: ItemDef) {
        self.items.insert(name.into(), def);
    }

    /// Look up an item definition by name.
    pub fn get(&self, name: &str) -> Option<&ItemDef> {
        self.items.get(name)
    }

    /// Returns true if the named item exists and is equippable.
    pub fn is_equippable(&self, name: &str) -> bool {
        self.get(name).is_some_and(|d| d.kind.slot().is_some())
    }

    /// Returns true if the named item exists and is a consumable.
    pub fn is_consumable(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|d| d.kind == ItemKind::Consumable)
    }

    /// Iterate over catalog entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemDef)> {
        self.items.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Number of items defined.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A character's three equipment slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Equipped weapon, if any.
    pub weapon: Option<String>,
    /// Equipped armor, if any.
    pub armor: Option<String>,
    /// Equipped accessory, if any.
    pub accessory: Option<String>,
}

impl Equipment {
    /// Create an empty set of slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// The item currently in a slot.
    pub fn in_slot(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_deref(),
            EquipSlot::Armor => self.armor.as_deref(),
            EquipSlot::Accessory => self.accessory.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<String> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }

    /// Equip a named item out of the inventory.
    ///
    /// The item must exist in the catalog, be equippable, and be held in the
    /// inventory. Anything previously in the slot is returned to the
    /// inventory and also returned to the caller for messaging.
    pub fn equip(
        &mut self,
        inventory: &mut Inventory,
        catalog: &ItemCatalog,
        name: &str,
    ) -> CoreResult<Option<String>> {
        let def = catalog
            .get(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;
        let slot = def
            .kind
            .slot()
            .ok_or_else(|| CoreError::NotEquippable(name.to_string()))?;
        if !inventory.remove_one(name) {
            return Err(CoreError::NotInInventory(name.to_string()));
        }

        let previous = self.slot_mut(slot).replace(name.to_string());
        if let Some(prev) = &previous {
            inventory.add(prev.clone());
        }
        Ok(previous)
    }

    /// Empty a slot, returning its item to the inventory.
    pub fn unequip(&mut self, inventory: &mut Inventory, slot: EquipSlot) -> Option<String> {
        let removed = self.slot_mut(slot).take();
        if let Some(name) = &removed {
            inventory.add(name.clone());
        }
        removed
    }
}
