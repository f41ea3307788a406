//! Outcome math for accepted deals.
//!
//! The engine owns sequencing (payment, logging, state mutation); the
//! functions here are the pure rules, kept separate so tests can pin the
//! numbers without driving a whole engine.

use crate::core::constants::{HEAT_ON_FAILURE, HEAT_PER_DEAL_BASE, PARTIAL_XP_FRACTION};
use crate::core::scaling::percent_roll;
use crate::deals::types::{Consequence, Deal};
use rand::Rng;

/// Success rule: the percent roll must meet or beat the deal's risk.
///
/// A risk-40 deal succeeds on rolls 40..=99, a 60% chance. Risk is clamped
/// to 1..=95 at generation time, so every deal retains both outcomes.
pub fn roll_succeeds(risk: u8, roll: u8) -> bool {
    roll >= risk
}

/// Heat generated by pulling off a deal, proportional to how risky it was.
pub fn heat_for_success(risk: u8) -> f64 {
    HEAT_PER_DEAL_BASE * f64::from(risk) / 50.0
}

/// Heat generated by a botched deal, flat and worse than any success.
pub fn heat_for_failure() -> f64 {
    HEAT_ON_FAILURE
}

/// Consolation experience for a failed deal.
pub fn partial_xp(xp_reward: u64) -> u64 {
    (xp_reward as f64 * PARTIAL_XP_FRACTION).floor() as u64
}

/// Rolls each consequence independently and returns the ones that fire.
///
/// Listed order is preserved so that downstream application (and the
/// activity log) is deterministic given the rolls.
pub fn fired_consequences<R: Rng + ?Sized>(deal: &Deal, rng: &mut R) -> Vec<Consequence> {
    deal.consequences
        .iter()
        .filter(|c| percent_roll(rng) < c.chance)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::heat_levels::HEAT_LEVELS;
    use crate::catalog::tiers::TIERS;
    use crate::deals::generation::generate_rotation;
    use crate::deals::types::ConsequenceKind;
    use crate::money::Money;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_boundary_roll_succeeds() {
        // Equal roll wins: risk 40 succeeds at 40, fails at 39.
        assert!(roll_succeeds(40, 40));
        assert!(!roll_succeeds(40, 39));
        assert!(roll_succeeds(1, 99));
        assert!(!roll_succeeds(95, 0));
    }

    #[test]
    fn test_heat_scales_with_risk() {
        assert_eq!(heat_for_success(50), HEAT_PER_DEAL_BASE);
        assert_eq!(heat_for_success(25), HEAT_PER_DEAL_BASE * 0.5);
        assert!(heat_for_success(95) < heat_for_failure());
    }

    #[test]
    fn test_partial_xp_floors() {
        assert_eq!(partial_xp(100), 30);
        assert_eq!(partial_xp(25), 7);
        assert_eq!(partial_xp(0), 0);
    }

    #[test]
    fn test_consequence_rolls_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let deals = generate_rotation(
            &TIERS[4],
            &HEAT_LEVELS[0],
            &HashMap::new(),
            Money::from_units(10_000),
            0,
            &mut rng,
        );
        // Over many draws a 100%-chance consequence always fires and the
        // fired set stays a subset of the listed set.
        for deal in &deals {
            for _ in 0..50 {
                let fired = fired_consequences(deal, &mut rng);
                assert!(fired.len() <= deal.consequences.len());
                for c in &fired {
                    assert!(deal
                        .consequences
                        .iter()
                        .any(|listed| listed.chance == c.chance));
                }
            }
        }
    }

    #[test]
    fn test_certain_consequence_always_fires() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deals = generate_rotation(
            &TIERS[4],
            &HEAT_LEVELS[0],
            &HashMap::new(),
            Money::from_units(10_000),
            0,
            &mut rng,
        );
        // Force a deal with a rigged 100%-chance consequence.
        if let Some(deal) = deals.first_mut() {
            deal.consequences = vec![Consequence {
                kind: ConsequenceKind::ExtraHeat { amount: 5.0 },
                chance: 100,
            }];
            for _ in 0..20 {
                assert_eq!(fired_consequences(deal, &mut rng).len(), 1);
            }
        }
    }
}
