//! Ability gating and execution.
//!
//! The engine drives the full pipeline (gates, payment, risk gate, logging);
//! this module holds the reusable middle: eligibility checks that reject
//! without touching state, and the per-kind execution once an ability is
//! cleared to run.

use crate::catalog::contacts::{AbilityDef, AbilityKind, ContactDef};
use crate::contacts::types::ContactState;
use crate::core::scaling::{tip_accuracy, wealth_scale};
use crate::effects::EffectSet;
use crate::investigations::InvestigationSet;
use crate::money::Money;
use crate::outcome::{AbilityOutcome, ActionError};
use crate::world::{PriceDirection, World};
use rand::Rng;

/// Checks the static gates in order: tier, loyalty, cooldown, daily limit.
/// The first failing gate wins; nothing is charged or mutated.
pub fn check_gates(
    contact: &ContactDef,
    ability: &AbilityDef,
    state: &ContactState,
    tier_level: u8,
    tick: u64,
) -> Result<(), ActionError> {
    if tier_level < contact.unlock_tier || tier_level < ability.min_tier {
        return Err(ActionError::TierTooLow);
    }
    if state.loyalty < ability.min_loyalty {
        return Err(ActionError::InsufficientLoyalty);
    }
    if !state.ability_ready(ability.id, tick) {
        return Err(ActionError::AbilityOnCooldown);
    }
    if state.daily_uses_of(ability.id) >= ability.daily_limit {
        return Err(ActionError::DailyLimitReached);
    }
    Ok(())
}

/// Rejects abilities whose effect would have nothing to act on, before any
/// payment is taken.
pub fn check_target(
    kind: &AbilityKind,
    world: &World,
    investigations: &InvestigationSet,
) -> Result<(), ActionError> {
    let eligible = match kind {
        AbilityKind::LiquidateInventory { .. } => !world.inventory.is_empty(),
        AbilityKind::PriceTip | AbilityKind::NudgePrice { .. } => !world.assets.is_empty(),
        AbilityKind::DismissInvestigation => investigations.has_active(),
        AbilityKind::ClearNegativeEvent => world.has_negative_event(),
        AbilityKind::FlatPayout { .. } | AbilityKind::GrantEffect { .. } => true,
    };
    if eligible {
        Ok(())
    } else {
        Err(ActionError::NoEligibleTarget)
    }
}

/// Runs a cleared ability and returns what it did.
///
/// Callers have already validated targets via [`check_target`]; a target
/// vanishing between the two calls still surfaces as `NoEligibleTarget`
/// rather than a panic.
pub fn execute<R: Rng + ?Sized>(
    ability: &AbilityDef,
    loyalty: u32,
    world: &mut World,
    effects: &mut EffectSet,
    investigations: &mut InvestigationSet,
    rng: &mut R,
) -> Result<AbilityOutcome, ActionError> {
    match ability.kind {
        AbilityKind::LiquidateInventory { markup } => {
            if world.inventory.is_empty() {
                return Err(ActionError::NoEligibleTarget);
            }
            let items_sold = world.inventory.len();
            let proceeds: Money = world
                .inventory
                .drain(..)
                .map(|item| item.value.scaled(markup))
                .sum();
            world.wallet.credit(proceeds);
            Ok(AbilityOutcome::Liquidated {
                items_sold,
                proceeds,
            })
        }
        AbilityKind::FlatPayout { base } => {
            let amount = wealth_scale(base, world.wallet.balance);
            world.wallet.credit(amount);
            Ok(AbilityOutcome::Payout { amount })
        }
        AbilityKind::PriceTip => {
            let asset = pick_asset(world, rng)?;
            let direction = if rng.random_bool(0.5) {
                PriceDirection::Up
            } else {
                PriceDirection::Down
            };
            Ok(AbilityOutcome::Tip {
                asset_id: asset.id.clone(),
                direction,
                confidence: tip_accuracy(loyalty),
            })
        }
        AbilityKind::NudgePrice { swing } => {
            let index = pick_asset_index(world, rng)?;
            let factor = if rng.random_bool(0.5) {
                1.0 + swing
            } else {
                1.0 - swing
            };
            let asset = &mut world.assets[index];
            asset.price = asset.price.scaled(factor);
            Ok(AbilityOutcome::PriceNudged {
                asset_id: asset.id.clone(),
                new_price: asset.price,
            })
        }
        AbilityKind::GrantEffect {
            kind,
            magnitude,
            duration_ticks,
            target,
        } => {
            effects.add(kind, magnitude, duration_ticks, target);
            Ok(AbilityOutcome::EffectGranted)
        }
        AbilityKind::DismissInvestigation => {
            // The quiet version: the case folds without a catch roll.
            let investigation = investigations
                .take_oldest()
                .ok_or(ActionError::NoEligibleTarget)?;
            let id = investigation.id;
            investigations.archive(investigation, false);
            Ok(AbilityOutcome::InvestigationDismissed {
                investigation_id: id,
            })
        }
        AbilityKind::ClearNegativeEvent => {
            let event = world
                .take_negative_event()
                .ok_or(ActionError::NoEligibleTarget)?;
            Ok(AbilityOutcome::EventCleared { event_id: event.id })
        }
    }
}

fn pick_asset_index<R: Rng + ?Sized>(world: &World, rng: &mut R) -> Result<usize, ActionError> {
    if world.assets.is_empty() {
        return Err(ActionError::NoEligibleTarget);
    }
    Ok(rng.random_range(0..world.assets.len()))
}

fn pick_asset<'a, R: Rng + ?Sized>(
    world: &'a World,
    rng: &mut R,
) -> Result<&'a crate::world::MarketAsset, ActionError> {
    let index = pick_asset_index(world, rng)?;
    Ok(&world.assets[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::contacts::{contact_def, AbilityId, ContactId};
    use crate::world::{InventoryItem, MarketAsset};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn fence_goods() -> (&'static ContactDef, &'static AbilityDef) {
        let contact = contact_def(ContactId::Fence);
        let ability = contact.ability(AbilityId::FenceGoods).unwrap();
        (contact, ability)
    }

    #[test]
    fn test_gate_order_tier_first() {
        let (contact, ability) = fence_goods();
        let mut state = ContactState::new();
        state.loyalty = 0;
        // Tier 0 fails on tier even though loyalty would also fail for
        // higher-requirement abilities.
        assert_eq!(
            check_gates(contact, ability, &state, 0, 0),
            Err(ActionError::TierTooLow)
        );
    }

    #[test]
    fn test_gate_loyalty_then_cooldown_then_daily() {
        let contact = contact_def(ContactId::Fence);
        let ability = contact.ability(AbilityId::QuickFlip).unwrap();
        let mut state = ContactState::new();

        state.loyalty = ability.min_loyalty - 1;
        assert_eq!(
            check_gates(contact, ability, &state, 1, 0),
            Err(ActionError::InsufficientLoyalty)
        );

        state.loyalty = ability.min_loyalty;
        state.cooldown_until.insert(ability.id, 500);
        assert_eq!(
            check_gates(contact, ability, &state, 1, 100),
            Err(ActionError::AbilityOnCooldown)
        );

        state.cooldown_until.clear();
        state.daily_uses.insert(ability.id, ability.daily_limit);
        assert_eq!(
            check_gates(contact, ability, &state, 1, 100),
            Err(ActionError::DailyLimitReached)
        );

        state.daily_uses.clear();
        assert_eq!(check_gates(contact, ability, &state, 1, 100), Ok(()));
    }

    #[test]
    fn test_liquidate_empties_inventory_at_markup() {
        let (_, ability) = fence_goods();
        let mut world = World::with_balance(0);
        world.inventory.push(InventoryItem {
            id: Uuid::new_v4(),
            name: "hot watches".into(),
            value: Money::from_units(100),
        });
        world.inventory.push(InventoryItem {
            id: Uuid::new_v4(),
            name: "forged art".into(),
            value: Money::from_units(300),
        });
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        let mut rng = test_rng();

        let outcome = execute(
            ability,
            10,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        assert!(world.inventory.is_empty());
        match outcome {
            AbilityOutcome::Liquidated { items_sold, proceeds } => {
                assert_eq!(items_sold, 2);
                assert_eq!(proceeds, Money::from_f64(400.0 * 1.15));
                assert_eq!(world.wallet.balance, proceeds);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_liquidate_with_nothing_to_sell_rejected() {
        let (_, ability) = fence_goods();
        let mut world = World::with_balance(0);
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        let mut rng = test_rng();
        assert_eq!(
            execute(
                ability,
                10,
                &mut world,
                &mut effects,
                &mut investigations,
                &mut rng
            ),
            Err(ActionError::NoEligibleTarget)
        );
    }

    #[test]
    fn test_tip_confidence_tracks_loyalty() {
        let contact = contact_def(ContactId::Informant);
        let ability = contact.ability(AbilityId::MarketTip).unwrap();
        let mut world = World::with_balance(0);
        world.assets.push(MarketAsset {
            id: "ACME".into(),
            price: Money::from_units(50),
        });
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        let mut rng = test_rng();

        let low = execute(
            ability,
            10,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        let high = execute(
            ability,
            90,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        let confidence_of = |o: &AbilityOutcome| match o {
            AbilityOutcome::Tip { confidence, .. } => *confidence,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert!(confidence_of(&high) > confidence_of(&low));
    }

    #[test]
    fn test_nudge_moves_price_by_swing() {
        let contact = contact_def(ContactId::Informant);
        let ability = contact.ability(AbilityId::PriceNudge).unwrap();
        let mut world = World::with_balance(0);
        world.assets.push(MarketAsset {
            id: "ACME".into(),
            price: Money::from_units(100),
        });
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        let mut rng = test_rng();

        let outcome = execute(
            ability,
            30,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        match outcome {
            AbilityOutcome::PriceNudged { new_price, .. } => {
                let up = Money::from_f64(104.0);
                let down = Money::from_f64(96.0);
                assert!(new_price == up || new_price == down);
                assert_eq!(world.assets[0].price, new_price);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_dismissal_archives_oldest_as_dodged() {
        let contact = contact_def(ContactId::Fixer);
        let ability = contact.ability(AbilityId::CaseDismissal).unwrap();
        let mut world = World::with_balance(0);
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        let first = investigations
            .spawn(2, Money::from_units(10_000))
            .unwrap();
        investigations.spawn(4, Money::from_units(10_000)).unwrap();
        let mut rng = test_rng();

        let outcome = execute(
            ability,
            40,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        assert_eq!(
            outcome,
            AbilityOutcome::InvestigationDismissed {
                investigation_id: first
            }
        );
        assert_eq!(investigations.active().len(), 1);
        let archived = &investigations.recent()[0];
        assert_eq!(archived.id, first);
        assert!(!archived.caught);
    }

    #[test]
    fn test_clear_event_requires_negative_event() {
        let contact = contact_def(ContactId::Fixer);
        let ability = contact.ability(AbilityId::CleanSlate).unwrap();
        let mut world = World::with_balance(0);
        let mut effects = EffectSet::default();
        let mut investigations = InvestigationSet::default();
        assert_eq!(
            check_target(&ability.kind, &world, &investigations),
            Err(ActionError::NoEligibleTarget)
        );

        world.events.push(crate::world::WorldEvent {
            id: Uuid::new_v4(),
            category: crate::world::EventCategory::Negative,
        });
        assert_eq!(check_target(&ability.kind, &world, &investigations), Ok(()));
        let mut rng = test_rng();
        let outcome = execute(
            ability,
            40,
            &mut world,
            &mut effects,
            &mut investigations,
            &mut rng,
        )
        .unwrap();
        assert!(matches!(outcome, AbilityOutcome::EventCleared { .. }));
        assert!(!world.has_negative_event());
    }
}
