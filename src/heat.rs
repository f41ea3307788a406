//! Heat: the bounded, decaying suspicion accumulator.
//!
//! Heat is a scalar, not an entity, but everything else keys off it: deal
//! risk and cost, investigation spawn probability, and the host economy's
//! income penalty all read the current heat level.

use crate::catalog::heat_levels::{level_for, HeatLevelDef};
use crate::core::constants::{HEAT_DECAY_PER_TICK, MAX_HEAT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatTracker {
    /// Current heat, clamped to [0, MAX_HEAT] on every mutation.
    current: f64,
    /// Lifetime heat ever accumulated; unclamped, monotone, statistics only.
    lifetime: f64,
}

impl HeatTracker {
    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn lifetime_accumulated(&self) -> f64 {
        self.lifetime
    }

    pub fn level(&self) -> &'static HeatLevelDef {
        level_for(self.current)
    }

    /// Adds heat from a risky action. Negative amounts are ignored; use
    /// [`HeatTracker::relieve`] for reductions so the lifetime counter
    /// stays monotone.
    pub fn add(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.lifetime += amount;
        self.current = (self.current + amount).min(MAX_HEAT);
    }

    /// Reduces current heat (dodged investigations, narrative relief).
    pub fn relieve(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.current = (self.current - amount).max(0.0);
    }

    /// Passive decay for `delta` elapsed ticks.
    pub fn decay(&mut self, delta: u64) {
        self.relieve(HEAT_DECAY_PER_TICK * delta as f64);
    }

    /// Clears current heat but keeps the lifetime statistic. Used by the
    /// soft reset; the full reset replaces the whole tracker.
    pub fn reset_current(&mut self) {
        self.current = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn with_value(value: f64) -> Self {
        HeatTracker {
            current: value.clamp(0.0, MAX_HEAT),
            lifetime: value.max(0.0),
        }
    }
}
