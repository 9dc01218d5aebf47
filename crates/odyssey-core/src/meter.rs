//! Clamped resource meters (HP, energy).
//!
//! A meter is a numeric value clamped between zero and a maximum, used for
//! the mutable resources a combatant spends and regenerates during play.

use serde::{Deserialize, Serialize};

/// A numeric resource clamped between 0 and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    /// Current value.
    current: i32,
    /// Maximum value.
    max: i32,
}

impl Meter {
    /// Create a new meter starting at its maximum value.
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a meter with an explicit current value, clamped to bounds.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(0, self.max);
        self.current
    }

    /// Raise the maximum by a delta. The current value is left untouched
    /// (other than re-clamping when the maximum shrinks).
    pub fn raise_max(&mut self, delta: i32) {
        self.max = (self.max + delta).max(0);
        self.current = self.current.clamp(0, self.max);
    }

    /// Set the current value to the maximum.
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Returns true if the meter is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the meter is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// The fraction of the meter that is filled (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}
