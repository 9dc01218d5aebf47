//! Experience and leveling.
//!
//! The per-level threshold is `level * 100`, recomputed from the current
//! level on every pass so one large award can cross several levels. Excess
//! XP always carries over.

use odyssey_core::Character;

/// Stat growth applied on each level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGrowth {
    /// Max HP gained.
    pub max_hp: i32,
    /// Attack gained.
    pub attack: i32,
    /// Defense gained.
    pub defense: i32,
    /// Max energy gained.
    pub max_energy: i32,
}

/// The fixed growth every level-up grants.
pub const LEVEL_GROWTH: StatGrowth = StatGrowth {
    max_hp: 10,
    attack: 2,
    defense: 1,
    max_energy: 10,
};

/// Notification that the character gained a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// The level just reached.
    pub level: u32,
    /// The stat growth applied for this level.
    pub growth: StatGrowth,
}

/// Award XP and resolve any level-ups, returning one event per level gained.
///
/// Each level gained applies [`LEVEL_GROWTH`], fully heals the character,
/// and fully restores energy.
pub fn gain_xp(character: &mut Character, amount: u32) -> Vec<LevelUp> {
    character.xp += amount;

    let mut level_ups = Vec::new();
    while character.xp >= character.xp_to_next() {
        character.xp -= character.xp_to_next();
        character.level += 1;

        character.hp.raise_max(LEVEL_GROWTH.max_hp);
        character.hp.refill();
        character.attack += LEVEL_GROWTH.attack;
        character.defense += LEVEL_GROWTH.defense;
        character.energy.raise_max(LEVEL_GROWTH.max_energy);
        character.energy.refill();

        level_ups.push(LevelUp {
            level: character.level,
            growth: LEVEL_GROWTH,
        });
    }
    level_ups
}

#[cfg(test)]
mod tests {
    use super::*;
    use odyssey_core::{Race, Role};

    fn warrior() -> Character {
        Character::new("Rook", Race::Human, Role::Warrior)
    }

    #[test]
    fn small_award_does_not_level() {
        let mut c = warrior();
        let ups = gain_xp(&mut c, 60);
        assert!(ups.is_empty());
        assert_eq!(c.level, 1);
        assert_eq!(c.xp, 60);
    }

    #[test]
    fn single_level_with_carry_over() {
        let mut c = warrior();
        let ups = gain_xp(&mut c, 130);
        assert_eq!(ups.len(), 1);
        assert_eq!(c.level, 2);
        assert_eq!(c.xp, 30);
    }

    #[test]
    fn large_award_crosses_multiple_levels() {
        // 250 XP from level 1: 250 - 100 - 200... the second threshold is
        // 200, so only one more level fits after the first.
        let mut c = warrior();
        let ups = gain_xp(&mut c, 250);
        assert_eq!(c.level, 2);
        assert_eq!(c.xp, 150);
        assert_eq!(ups.len(), 1);

        // Top up past the level-2 threshold as well.
        let ups = gain_xp(&mut c, 50);
        assert_eq!(c.level, 3);
        assert_eq!(c.xp, 0);
        assert_eq!(ups.len(), 1);
    }

    #[test]
    fn growth_applies_per_level() {
        let mut c = warrior();
        gain_xp(&mut c, 130);
        assert_eq!(c.hp.max(), 130);
        assert_eq!(c.attack, 14);
        assert_eq!(c.defense, 9);
        assert_eq!(c.energy.max(), 110);
    }

    #[test]
    fn level_up_fully_restores() {
        let mut c = warrior();
        c.hp.adjust(-100);
        c.energy.adjust(-50);
        gain_xp(&mut c, 100);
        assert!(c.hp.is_full());
        assert!(c.energy.is_full());
    }

    #[test]
    fn events_carry_new_levels() {
        let mut c = warrior();
        c.xp = 99;
        let ups = gain_xp(&mut c, 1);
        assert_eq!(ups.len(), 1);
        assert_eq!(ups[0].level, 2);
        assert_eq!(ups[0].growth, LEVEL_GROWTH);
    }

    #[test]
    fn xp_stays_below_threshold_after_resolution() {
        let mut c = warrior();
        gain_xp(&mut c, 399);
        assert!(c.xp < c.xp_to_next());
    }
}
