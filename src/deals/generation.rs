//! Deal rotation: turning catalog templates into concrete offers.

use crate::catalog::deals::{ConsequenceEffect, DealTemplate, DealTemplateId, ALL_TEMPLATES};
use crate::catalog::heat_levels::HeatLevelDef;
use crate::catalog::tiers::TierDef;
use crate::core::constants::{
    DEAL_LIFETIME_MAX, DEAL_LIFETIME_MIN, DUPLICATE_DRAW_ATTEMPTS, MAX_DEALS_PER_ROTATION,
    MIN_DEALS_PER_ROTATION,
};
use crate::core::scaling::{effective_risk, wealth_scale, weighted_index};
use crate::deals::types::{Consequence, ConsequenceKind, Deal, DealStatus, PendingEffect};
use crate::money::Money;
use rand::Rng;
use std::collections::HashMap;
use uuid::Uuid;

/// Templates currently offerable: tier-gated, category-unlocked, off cooldown.
fn eligible_templates(
    tier: &TierDef,
    cooldowns: &HashMap<DealTemplateId, u64>,
    tick: u64,
) -> Vec<&'static DealTemplate> {
    ALL_TEMPLATES
        .iter()
        .filter(|t| t.min_tier <= tier.level)
        .filter(|t| tier.unlocks(t.category))
        .filter(|t| cooldowns.get(&t.id).is_none_or(|until| tick >= *until))
        .collect()
}

/// Builds one concrete deal from a template.
fn instantiate<R: Rng + ?Sized>(
    template: &'static DealTemplate,
    tier: &TierDef,
    heat_level: &HeatLevelDef,
    wealth: Money,
    tick: u64,
    rng: &mut R,
) -> Deal {
    // Cost: wealth-scaled base, tier discount off, heat surcharge on.
    let cost = wealth_scale(template.base_cost, wealth)
        .scaled(1.0 - tier.price_discount)
        .scaled(1.0 + heat_level.cost_increase);

    let risk = effective_risk(
        template.base_risk,
        tier.risk_reduction,
        heat_level.risk_increase,
        rng,
    );

    let effects = template
        .effects
        .iter()
        .map(|spec| PendingEffect {
            kind: spec.kind,
            magnitude: spec.magnitude,
            duration_ticks: spec.duration_ticks,
            target: spec.target,
        })
        .collect();

    // Monetary consequence magnitudes are wealth-scaled here, once, so the
    // numbers shown on the offer are the numbers that fire.
    let consequences = template
        .consequences
        .iter()
        .map(|spec| Consequence {
            kind: match spec.effect {
                ConsequenceEffect::ExtraHeat { amount } => ConsequenceKind::ExtraHeat { amount },
                ConsequenceEffect::Investigation { severity } => {
                    ConsequenceKind::Investigation { severity }
                }
                ConsequenceEffect::Fine { base } => ConsequenceKind::Fine {
                    amount: wealth_scale(base, wealth),
                },
            },
            chance: spec.chance,
        })
        .collect();

    Deal {
        id: Uuid::new_v4(),
        template: template.id,
        cost,
        risk,
        effects,
        consequences,
        xp_reward: template.xp_reward,
        expires_at: tick + rng.random_range(DEAL_LIFETIME_MIN..=DEAL_LIFETIME_MAX),
        status: DealStatus::Available,
    }
}

/// Generates a fresh rotation of deals.
///
/// Draws weighted by template popularity, rejecting duplicates within the
/// batch under a bounded retry ceiling. An exhausted pool yields fewer
/// deals than the tier's slot count rather than spinning.
pub fn generate_rotation<R: Rng + ?Sized>(
    tier: &TierDef,
    heat_level: &HeatLevelDef,
    cooldowns: &HashMap<DealTemplateId, u64>,
    wealth: Money,
    tick: u64,
    rng: &mut R,
) -> Vec<Deal> {
    let pool = eligible_templates(tier, cooldowns, tick);
    if pool.is_empty() {
        return Vec::new();
    }

    let slots = tier
        .deal_slots
        .clamp(MIN_DEALS_PER_ROTATION, MAX_DEALS_PER_ROTATION);
    let weights: Vec<u32> = pool.iter().map(|t| t.weight).collect();

    let mut picked: Vec<&'static DealTemplate> = Vec::with_capacity(slots);
    let mut attempts = 0;
    while picked.len() < slots && attempts < DUPLICATE_DRAW_ATTEMPTS {
        attempts += 1;
        let Some(idx) = weighted_index(&weights, rng) else {
            break;
        };
        let candidate = pool[idx];
        if picked.iter().any(|t| t.id == candidate.id) {
            continue;
        }
        picked.push(candidate);
    }

    picked
        .into_iter()
        .map(|t| instantiate(t, tier, heat_level, wealth, tick, rng))
        .collect()
}
