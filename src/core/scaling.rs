//! Pure randomness and scaling helpers.
//!
//! Everything here is stateless: given the same inputs (and RNG draws) the
//! outputs are identical, which is what the property tests lean on.

use crate::core::constants::{
    BETRAYAL_BASE_CHANCE, BETRAYAL_CHANCE_CAP, BETRAYAL_PER_HEAT, BETRAYAL_PER_LOYALTY,
    RISK_MAX, RISK_MIN, RISK_VARIANCE, SCAM_BASE_CHANCE, SCAM_CHANCE_CAP, SCAM_PER_HEAT,
    SCAM_PER_LOYALTY, TIP_ACCURACY_CAP, TIP_ACCURACY_PER_LOYALTY, TIP_BASE_ACCURACY,
    WEALTH_FACTOR_CAP, WEALTH_REFERENCE, WEALTH_SCALE_EXPONENT,
};
use crate::money::Money;
use rand::Rng;

/// Uniform roll in [0, 100).
pub fn percent_roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..100)
}

/// Factor by which catalog base values are multiplied so that costs and
/// rewards stay a meaningful fraction of net worth at any game stage.
/// 1.0 below the reference wealth, sub-linear growth above it.
pub fn wealth_factor(wealth: Money) -> f64 {
    let w = wealth.to_f64().max(0.0);
    if w <= WEALTH_REFERENCE {
        1.0
    } else {
        (w / WEALTH_REFERENCE)
            .powf(WEALTH_SCALE_EXPONENT)
            .min(WEALTH_FACTOR_CAP)
    }
}

/// Scales a catalog base amount against current player wealth.
pub fn wealth_scale(base_units: i64, wealth: Money) -> Money {
    Money::from_f64(base_units as f64 * wealth_factor(wealth))
}

/// Probability that a contact betrays the player on this ability use.
/// Rises with heat, falls with loyalty, clamped to [0, cap].
pub fn betrayal_chance(heat: f64, loyalty: u32) -> f64 {
    (BETRAYAL_BASE_CHANCE + heat * BETRAYAL_PER_HEAT - loyalty as f64 * BETRAYAL_PER_LOYALTY)
        .clamp(0.0, BETRAYAL_CHANCE_CAP)
}

/// Probability that a contact pockets the payment without delivering.
pub fn scam_chance(heat: f64, loyalty: u32) -> f64 {
    (SCAM_BASE_CHANCE + heat * SCAM_PER_HEAT - loyalty as f64 * SCAM_PER_LOYALTY)
        .clamp(0.0, SCAM_CHANCE_CAP)
}

/// Accuracy of a market tip for a contact at the given loyalty.
pub fn tip_accuracy(loyalty: u32) -> f64 {
    (TIP_BASE_ACCURACY + loyalty as f64 * TIP_ACCURACY_PER_LOYALTY).min(TIP_ACCURACY_CAP)
}

/// Rolls an independent probability in [0, 1].
pub fn chance_hits<R: Rng + ?Sized>(chance: f64, rng: &mut R) -> bool {
    rng.random_bool(chance.clamp(0.0, 1.0))
}

/// Base risk plus bounded random variance, minus the tier's risk reduction,
/// plus the heat level's risk increase, clamped to [RISK_MIN, RISK_MAX].
pub fn effective_risk<R: Rng + ?Sized>(
    base_risk: u8,
    tier_reduction: u8,
    heat_increase: u8,
    rng: &mut R,
) -> u8 {
    let variance = rng.random_range(-RISK_VARIANCE..=RISK_VARIANCE);
    let risk = base_risk as i32 + variance - tier_reduction as i32 + heat_increase as i32;
    risk.clamp(RISK_MIN as i32, RISK_MAX as i32) as u8
}

/// Weighted random index into `weights`. Returns `None` for an empty slice
/// or an all-zero weight table.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[u32], rng: &mut R) -> Option<usize> {
    let total: u64 = weights.iter().map(|w| *w as u64).sum();
    if total == 0 {
        return None;
    }
    let mut pick = rng.random_range(0..total);
    for (idx, weight) in weights.iter().enumerate() {
        let weight = *weight as u64;
        if pick < weight {
            return Some(idx);
        }
        pick -= weight;
    }
    // Unreachable for a correct total; guard anyway.
    Some(weights.len() - 1)
}
