//! Per-contact mutable relationship state.

use crate::catalog::contacts::{AbilityId, ContactDef};
use crate::core::constants::{LOYALTY_INITIAL, LOYALTY_LOSS_BETRAYAL, LOYALTY_LOSS_SCAM};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything that changes about a contact over a run: loyalty, usage
/// counters, and per-ability cooldown/daily bookkeeping. The static side
/// (costs, limits, unlock requirements) lives in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactState {
    #[serde(default)]
    pub loyalty: u32,
    /// Lifetime count of successful ability uses.
    #[serde(default)]
    pub interactions: u64,
    /// Tick at which each ability becomes usable again.
    #[serde(default)]
    pub cooldown_until: HashMap<AbilityId, u64>,
    /// Uses consumed in the current daily cycle; wiped at cycle boundaries.
    #[serde(default)]
    pub daily_uses: HashMap<AbilityId, u32>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            loyalty: LOYALTY_INITIAL,
            interactions: 0,
            cooldown_until: HashMap::new(),
            daily_uses: HashMap::new(),
        }
    }
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ability_ready(&self, ability: AbilityId, tick: u64) -> bool {
        self.cooldown_until
            .get(&ability)
            .is_none_or(|until| tick >= *until)
    }

    pub fn daily_uses_of(&self, ability: AbilityId) -> u32 {
        self.daily_uses.get(&ability).copied().unwrap_or(0)
    }

    /// Records a successful use: bumps loyalty (capped by the contact's
    /// maximum), starts the cooldown, and consumes a daily slot.
    pub fn record_use(&mut self, def: &ContactDef, ability: AbilityId, tick: u64, cooldown: u64) {
        self.loyalty = (self.loyalty + def.loyalty_per_use).min(def.max_loyalty);
        self.interactions += 1;
        self.cooldown_until.insert(ability, tick + cooldown);
        *self.daily_uses.entry(ability).or_insert(0) += 1;
    }

    /// Loyalty hit for a contact who turned on the player.
    pub fn punish_betrayal(&mut self) {
        self.loyalty = self.loyalty.saturating_sub(LOYALTY_LOSS_BETRAYAL);
    }

    /// Loyalty hit for a contact who pocketed the fee.
    pub fn punish_scam(&mut self) {
        self.loyalty = self.loyalty.saturating_sub(LOYALTY_LOSS_SCAM);
    }

    /// Periodic trickle back toward the contact's cap.
    pub fn heal(&mut self, amount: u32, max: u32) {
        self.loyalty = (self.loyalty + amount).min(max);
    }

    pub fn reset_daily_uses(&mut self) {
        self.daily_uses.clear();
    }

    /// Soft-reset hook: usage bookkeeping goes, the relationship stays.
    pub fn clear_timers(&mut self) {
        self.cooldown_until.clear();
        self.daily_uses.clear();
    }
}
