//! Tick pipeline behavior: rotation scheduling, expiry, countdowns,
//! periodic checks. State that cannot be reached through actions alone is
//! injected through the save payload.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use undermarket::core::constants::{
    DAILY_CYCLE_TICKS, HEAT_PER_CAUGHT_SEVERITY, LOYALTY_HEAL_AMOUNT, LOYALTY_HEAL_INTERVAL,
    LOYALTY_INITIAL, ROTATION_INTERVAL_MAX, ROTATION_INTERVAL_MIN,
};
use undermarket::effects::EffectKind;
use undermarket::{Money, SaveData, TickEvent, UndergroundMarket, World};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn rotation_is_scheduled_within_the_configured_window() {
    let mut engine = UndergroundMarket::new();
    let mut world = World::with_balance(20_000);
    let mut rng = test_rng();
    let report = engine.tick(0, &mut world, &mut rng);
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::RotationRefreshed { .. })));
    let countdown = engine.rotation_countdown(0);
    assert!((ROTATION_INTERVAL_MIN..=ROTATION_INTERVAL_MAX).contains(&countdown));
}

#[test]
fn stale_deals_expire_before_the_new_rotation_lands() {
    let mut engine = UndergroundMarket::new();
    let mut world = World::with_balance(20_000);
    let mut rng = test_rng();
    engine.tick(0, &mut world, &mut rng);
    let old_ids: Vec<_> = engine.deals().iter().map(|d| d.id).collect();

    // Far past every lifetime and the rotation schedule.
    let report = engine.tick(10_000, &mut world, &mut rng);
    let expired: Vec<_> = report
        .events
        .iter()
        .filter_map(|e| match e {
            TickEvent::DealExpired { deal_id } => Some(*deal_id),
            _ => None,
        })
        .collect();
    assert_eq!(expired.len(), old_ids.len());
    for id in old_ids {
        assert!(expired.contains(&id));
        assert!(!engine.deals().iter().any(|d| d.id == id));
    }
}

#[test]
fn injected_effect_counts_down_and_expires() {
    let mut data = SaveData::default();
    data.effects.push(json!({
        "id": uuid::Uuid::new_v4(),
        "kind": "IncomeBoost",
        "magnitude": 0.25,
        "target": null,
        "remaining_ticks": 50,
        "total_ticks": 100,
    }));
    let mut engine = UndergroundMarket::import(data);
    assert!((engine.effect_multiplier(EffectKind::IncomeBoost, None) - 1.25).abs() < 1e-9);

    let mut world = World::with_balance(20_000);
    let mut rng = test_rng();
    let report = engine.tick(50, &mut world, &mut rng);
    assert!(report.events.contains(&TickEvent::EffectExpired {
        kind: EffectKind::IncomeBoost
    }));
    assert!((engine.effect_multiplier(EffectKind::IncomeBoost, None) - 1.0).abs() < 1e-9);
    assert_eq!(engine.active_effects().count(), 0);
}

fn investigation_payload(catch_chance: u8) -> serde_json::Value {
    json!({
        "id": uuid::Uuid::new_v4(),
        "severity": 3,
        "remaining_ticks": 10,
        "total_ticks": 300,
        "fine": "6000",
        "catch_chance": catch_chance,
    })
}

#[test]
fn certain_catch_fines_and_spikes_heat_on_timeout() {
    let mut data = SaveData::default();
    data.investigations_active.push(investigation_payload(100));
    let mut engine = UndergroundMarket::import(data);

    let mut world = World::with_balance(10_000);
    let mut rng = test_rng();
    let report = engine.tick(10, &mut world, &mut rng);
    let concluded = report
        .events
        .iter()
        .find_map(|e| match e {
            TickEvent::InvestigationConcluded {
                caught, fine_paid, ..
            } => Some((*caught, *fine_paid)),
            _ => None,
        })
        .unwrap();
    assert_eq!(concluded, (true, Money::from_units(6_000)));
    assert_eq!(world.wallet.balance, Money::from_units(4_000));
    assert_eq!(engine.statistics().fines_paid, Money::from_units(6_000));
    assert!(engine.heat_value() >= 3.0 * HEAT_PER_CAUGHT_SEVERITY - 1.0);
    assert!(engine.investigations().is_empty());
    assert_eq!(engine.recent_investigations().len(), 1);
    assert!(engine.recent_investigations()[0].caught);
}

#[test]
fn certain_dodge_relieves_heat_on_timeout() {
    let mut data = SaveData::default();
    data.investigations_active.push(investigation_payload(0));
    let mut engine = UndergroundMarket::import(data);

    let mut world = World::with_balance(10_000);
    let mut rng = test_rng();
    engine.tick(10, &mut world, &mut rng);
    assert_eq!(world.wallet.balance, Money::from_units(10_000));
    assert_eq!(engine.statistics().fines_paid, Money::ZERO);
    assert!(engine.investigations().is_empty());
    assert!(!engine.recent_investigations()[0].caught);
}

#[test]
fn fine_caps_at_remaining_cash() {
    let mut data = SaveData::default();
    data.investigations_active.push(investigation_payload(100));
    let mut engine = UndergroundMarket::import(data);

    let mut world = World::with_balance(1_500);
    let mut rng = test_rng();
    engine.tick(10, &mut world, &mut rng);
    assert_eq!(world.wallet.balance, Money::ZERO);
    assert_eq!(engine.statistics().fines_paid, Money::from_units(1_500));
}

#[test]
fn daily_cycle_resets_uses_and_heals_loyalty() {
    let mut engine = UndergroundMarket::new();
    let mut world = World::with_balance(20_000);
    let mut rng = test_rng();
    engine.tick(0, &mut world, &mut rng);
    let report = engine.tick(DAILY_CYCLE_TICKS, &mut world, &mut rng);
    assert!(report.events.contains(&TickEvent::DailyReset));
    assert!(report.events.contains(&TickEvent::LoyaltyHealed));

    let heals = (DAILY_CYCLE_TICKS / LOYALTY_HEAL_INTERVAL) as u32;
    let expected = LOYALTY_INITIAL + heals * LOYALTY_HEAL_AMOUNT;
    for view in engine.contacts(Money::from_units(20_000)) {
        assert_eq!(view.loyalty, expected);
    }
}

#[test]
fn cold_heat_never_triggers_periodic_investigations() {
    let mut engine = UndergroundMarket::new();
    let mut world = World::with_balance(20_000);
    let mut rng = test_rng();
    // Many check intervals at heat zero: trigger chance is 0.0.
    for step in 0..20u64 {
        let report = engine.tick(step * 300, &mut world, &mut rng);
        assert!(!report
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::InvestigationOpened { .. })));
    }
    assert!(engine.investigations().is_empty());
    assert_eq!(engine.statistics().investigations_triggered, 0);
}
