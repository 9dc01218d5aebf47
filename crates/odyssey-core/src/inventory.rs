//! The player's item inventory.
//!
//! Items are identified by catalog name and may be held in multiples, so
//! the inventory is an ordered multiset of names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered collection of item names, with duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    pub fn add(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    /// Remove one unit of an item. Returns false if none was held.
    pub fn remove_one(&mut self, name: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == name) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns true if at least one unit of the item is held.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// How many units of the item are held.
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|i| *i == name).count()
    }

    /// Item names grouped with their counts, in name order.
    pub fn counted(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate over held item names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Total number of units held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_count() {
        let mut inv = Inventory::new();
        inv.add("Energy Cell");
        inv.add("Energy Cell");
        inv.add("Scrap Metal");
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.count("Energy Cell"), 2);
        assert!(inv.contains("Scrap Metal"));
    }

    #[test]
    fn remove_one_takes_single_unit() {
        let mut inv = Inventory::new();
        inv.add("Energy Cell");
        inv.add("Energy Cell");
        assert!(inv.remove_one("Energy Cell"));
        assert_eq!(inv.count("Energy Cell"), 1);
    }

    #[test]
    fn remove_missing_is_false() {
        let mut inv = Inventory::new();
        assert!(!inv.remove_one("Data Chip"));
    }

    #[test]
    fn counted_groups_duplicates() {
        let mut inv = Inventory::new();
        inv.add("Data Chip");
        inv.add("Energy Cell");
        inv.add("Data Chip");
        let counts = inv.counted();
        assert_eq!(counts.get("Data Chip"), Some(&2));
        assert_eq!(counts.get("Energy Cell"), Some(&1));
    }

    #[test]
    fn serde_roundtrip() {
        let mut inv = Inventory::new();
        inv.add("Alien Crystal");
        let json = serde_json::to_string(&inv).unwrap();
        let inv2: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(inv, inv2);
    }
}
