//! Timed economic modifiers produced by successful deals and abilities.
//!
//! Effects are the engine's outbound lever on the rest of the economy:
//! sibling subsystems query an aggregate multiplier per effect kind (and
//! optional target scope) instead of reading individual effects.

use crate::core::constants::{EFFECT_MULTIPLIER_FLOOR, MAX_ACTIVE_EFFECTS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of economic modifier an effect applies.
///
/// Magnitudes are signed fractions: `0.10` on `IncomeBoost` means +10%
/// income, `-0.08` on `CostReduction` means costs drop by 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    IncomeBoost,
    CostReduction,
    StockReturn,
    CryptoReturn,
    RentBoost,
    XpGain,
}

/// Scope an effect can be restricted to. `None` on the effect means the
/// modifier applies to every target of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    Business,
    Stocks,
    Crypto,
    RealEstate,
}

/// A live timed modifier. Created on deal success or ability grant,
/// counted down every tick, removed at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub id: Uuid,
    pub kind: EffectKind,
    pub magnitude: f64,
    pub target: Option<EffectTarget>,
    pub remaining_ticks: u64,
    pub total_ticks: u64,
}

/// The bounded set of concurrently active effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectSet {
    effects: Vec<ActiveEffect>,
}

impl EffectSet {
    /// Adds an effect unless the concurrency cap is reached, in which case
    /// the new effect is silently dropped (the cap is a balance valve, not
    /// an error condition).
    pub fn add(
        &mut self,
        kind: EffectKind,
        magnitude: f64,
        duration_ticks: u64,
        target: Option<EffectTarget>,
    ) -> bool {
        if self.effects.len() >= MAX_ACTIVE_EFFECTS {
            tracing::debug!(?kind, "effect cap reached, dropping new effect");
            return false;
        }
        self.effects.push(ActiveEffect {
            id: Uuid::new_v4(),
            kind,
            magnitude,
            target,
            remaining_ticks: duration_ticks,
            total_ticks: duration_ticks,
        });
        true
    }

    /// Counts all effects down by `delta` ticks and drops the expired ones.
    /// Returns the kinds that expired this call.
    pub fn advance(&mut self, delta: u64) -> Vec<EffectKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            effect.remaining_ticks = effect.remaining_ticks.saturating_sub(delta);
            if effect.remaining_ticks == 0 {
                expired.push(effect.kind);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Aggregate multiplier for one effect kind and an optional target.
    ///
    /// Untargeted effects apply to every query of their kind; targeted
    /// effects only when the query names the same target. Magnitudes sum
    /// into `1.0 + total`, floored so stacked reductions cannot go negative.
    pub fn multiplier(&self, kind: EffectKind, target: Option<EffectTarget>) -> f64 {
        let total: f64 = self
            .effects
            .iter()
            .filter(|e| e.kind == kind)
            .filter(|e| e.target.is_none() || e.target == target)
            .map(|e| e.magnitude)
            .sum();
        (1.0 + total).max(EFFECT_MULTIPLIER_FLOOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub(crate) fn restore(effects: Vec<ActiveEffect>) -> Self {
        let mut effects = effects;
        effects.truncate(MAX_ACTIVE_EFFECTS);
        EffectSet { effects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_expire() {
        let mut set = EffectSet::default();
        assert!(set.add(EffectKind::IncomeBoost, 0.10, 3, None));
        assert_eq!(set.len(), 1);

        assert!(set.advance(1).is_empty());
        assert!(set.advance(1).is_empty());
        let expired = set.advance(1);
        assert_eq!(expired, vec![EffectKind::IncomeBoost]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_advance_with_large_delta_expires_everything_due() {
        let mut set = EffectSet::default();
        set.add(EffectKind::IncomeBoost, 0.10, 5, None);
        set.add(EffectKind::XpGain, 0.15, 100, None);
        let expired = set.advance(50);
        assert_eq!(expired, vec![EffectKind::IncomeBoost]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_cap_silently_drops() {
        let mut set = EffectSet::default();
        for _ in 0..MAX_ACTIVE_EFFECTS {
            assert!(set.add(EffectKind::IncomeBoost, 0.01, 100, None));
        }
        assert!(!set.add(EffectKind::XpGain, 0.01, 100, None));
        assert_eq!(set.len(), MAX_ACTIVE_EFFECTS);
    }

    #[test]
    fn test_multiplier_sums_matching_kinds() {
        let mut set = EffectSet::default();
        set.add(EffectKind::IncomeBoost, 0.10, 100, None);
        set.add(EffectKind::IncomeBoost, 0.15, 100, None);
        set.add(EffectKind::XpGain, 0.50, 100, None);
        let m = set.multiplier(EffectKind::IncomeBoost, None);
        assert!((m - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_target_scoping() {
        let mut set = EffectSet::default();
        set.add(EffectKind::IncomeBoost, 0.10, 100, None);
        set.add(
            EffectKind::IncomeBoost,
            0.20,
            100,
            Some(EffectTarget::Business),
        );

        // Untargeted query sees only the untargeted effect.
        let global = set.multiplier(EffectKind::IncomeBoost, None);
        assert!((global - 1.10).abs() < 1e-9);

        // Business query sees both.
        let business = set.multiplier(EffectKind::IncomeBoost, Some(EffectTarget::Business));
        assert!((business - 1.30).abs() < 1e-9);

        // Other targets see only the untargeted effect.
        let stocks = set.multiplier(EffectKind::IncomeBoost, Some(EffectTarget::Stocks));
        assert!((stocks - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_floor() {
        let mut set = EffectSet::default();
        set.add(EffectKind::CostReduction, -0.60, 100, None);
        set.add(EffectKind::CostReduction, -0.60, 100, None);
        assert_eq!(set.multiplier(EffectKind::CostReduction, None), 0.1);
    }

    #[test]
    fn test_no_effects_means_identity() {
        let set = EffectSet::default();
        assert_eq!(set.multiplier(EffectKind::RentBoost, None), 1.0);
    }
}
