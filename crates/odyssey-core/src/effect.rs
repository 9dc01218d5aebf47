//! Timed status effects on a combatant.
//!
//! Effects are keyed by kind: at most one effect of a given kind is live at
//! a time, and applying a new one replaces the old rather than stacking.
//! Durations count down once per player-initiated action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The kind of a timed status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    /// Halves incoming damage for the duration.
    Blocking,
    /// Grants a chance to fully avoid the next enemy attack.
    Dodging,
    /// Adds its magnitude to effective attack.
    AttackBoost,
    /// Adds its magnitude to effective defense.
    DefenseBoost,
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Blocking => "Blocking",
            Self::Dodging => "Dodging",
            Self::AttackBoost => "Attack Boost",
            Self::DefenseBoost => "Defense Boost",
        };
        write!(f, "{name}")
    }
}

/// A live effect: how long it lasts and how strong it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Turns remaining before the effect expires.
    pub duration: i32,
    /// Magnitude, used by the boost kinds (zero for block/dodge).
    pub magnitude: i32,
}

/// The set of effects active on one combatant, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: BTreeMap<EffectKind, ActiveEffect>,
}

impl StatusEffects {
    /// Create an empty effect set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect, replacing any existing effect of the same kind.
    pub fn apply(&mut self, kind: EffectKind, duration: i32, magnitude: i32) {
        self.effects.insert(
            kind,
            ActiveEffect {
                duration,
                magnitude,
            },
        );
    }

    /// Advance one turn: decrement every duration and drop expired effects.
    pub fn tick(&mut self) {
        for effect in self.effects.values_mut() {
            effect.duration -= 1;
        }
        self.effects.retain(|_, e| e.duration > 0);
    }

    /// Returns true if an effect of the given kind is live.
    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.effects.contains_key(&kind)
    }

    /// The magnitude of the given effect kind, or zero if not active.
    pub fn bonus(&self, kind: EffectKind) -> i32 {
        self.effects.get(&kind).map_or(0, |e| e.magnitude)
    }

    /// Look up a live effect by kind.
    pub fn get(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.effects.get(&kind)
    }

    /// Remove every effect.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Iterate over live effects in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (EffectKind, &ActiveEffect)> {
        self.effects.iter().map(|(k, e)| (*k, e))
    }

    /// Number of live effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns true if no effect is live.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_same_kind() {
        let mut fx = StatusEffects::new();
        fx.apply(EffectKind::DefenseBoost, 3, 5);
        fx.apply(EffectKind::DefenseBoost, 1, 9);
        assert_eq!(fx.len(), 1);
        assert_eq!(fx.bonus(EffectKind::DefenseBoost), 9);
        assert_eq!(fx.get(EffectKind::DefenseBoost).unwrap().duration, 1);
    }

    #[test]
    fn tick_expires_at_zero() {
        let mut fx = StatusEffects::new();
        fx.apply(EffectKind::Blocking, 1, 0);
        fx.apply(EffectKind::DefenseBoost, 3, 5);
        fx.tick();
        assert!(!fx.is_active(EffectKind::Blocking));
        assert!(fx.is_active(EffectKind::DefenseBoost));
        assert_eq!(fx.get(EffectKind::DefenseBoost).unwrap().duration, 2);
    }

    #[test]
    fn bonus_defaults_to_zero() {
        let fx = StatusEffects::new();
        assert_eq!(fx.bonus(EffectKind::AttackBoost), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let mut fx = StatusEffects::new();
        fx.apply(EffectKind::Dodging, 1, 0);
        fx.apply(EffectKind::AttackBoost, 2, 3);
        fx.clear();
        assert!(fx.is_empty());
    }

    #[test]
    fn tick_drops_nonpositive_durations() {
        let mut fx = StatusEffects::new();
        fx.apply(EffectKind::Dodging, 0, 0);
        fx.tick();
        assert!(fx.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut fx = StatusEffects::new();
        fx.apply(EffectKind::AttackBoost, 2, 4);
        let json = serde_json::to_string(&fx).unwrap();
        let fx2: StatusEffects = serde_json::from_str(&json).unwrap();
        assert_eq!(fx, fx2);
    }
}
