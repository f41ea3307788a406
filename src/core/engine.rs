//! The engine facade: owns all market state, drives the tick pipeline, and
//! exposes the player-facing mutating and query surface.
//!
//! Single-threaded by construction: the host scheduler calls [`UndergroundMarket::tick`]
//! once per simulated step, and player actions run synchronously between
//! ticks. Nothing here locks, blocks, or awaits.

use crate::activity::{ActivityLog, LogEntry, LogSeverity};
use crate::catalog::contacts::{contact_def, AbilityId, ContactId};
use crate::catalog::deals::{template, DealTemplateId};
use crate::catalog::heat_levels::HeatLevelDef;
use crate::catalog::tiers::TierDef;
use crate::contacts::logic;
use crate::contacts::types::ContactState;
use crate::core::constants::{
    ABILITY_XP, DAILY_CYCLE_TICKS, HEAT_ON_BETRAYAL, HEAT_PER_ABILITY,
    HEAT_PER_CAUGHT_SEVERITY, HEAT_RELIEF_ON_DODGE, INVESTIGATION_CHECK_INTERVAL,
    LOYALTY_HEAL_AMOUNT, LOYALTY_HEAL_INTERVAL, ROTATION_INTERVAL_MAX, ROTATION_INTERVAL_MIN,
};
use crate::core::scaling::{betrayal_chance, chance_hits, percent_roll, scam_chance, wealth_scale};
use crate::deals::generation::generate_rotation;
use crate::deals::resolution::{
    fired_consequences, heat_for_failure, heat_for_success, partial_xp, roll_succeeds,
};
use crate::deals::types::{ConsequenceKind, Deal};
use crate::effects::{ActiveEffect, EffectKind, EffectSet, EffectTarget};
use crate::heat::HeatTracker;
use crate::investigations::{severity_for_heat, Investigation, InvestigationSet};
use crate::money::Money;
use crate::outcome::{AbilityOutcome, ActionError, ActionResult, ActionSuccess};
use crate::reputation::{progress_percent, tier_for};
use crate::stats::Statistics;
use crate::world::World;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Something that happened during a tick, reported for UI reaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    RotationRefreshed { deals: usize },
    DealExpired { deal_id: Uuid },
    EffectExpired { kind: EffectKind },
    InvestigationOpened { investigation_id: Uuid, severity: u8 },
    InvestigationConcluded {
        investigation_id: Uuid,
        caught: bool,
        fine_paid: Money,
    },
    LoyaltyHealed,
    DailyReset,
}

/// Everything one tick call did.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<TickEvent>,
}

/// Read-model for one contact ability, priced for the current wealth.
#[derive(Debug, Clone)]
pub struct AbilityView {
    pub id: AbilityId,
    pub name_key: &'static str,
    pub cost: Money,
    /// Tick at which the ability comes off cooldown (may be in the past).
    pub ready_at: u64,
    pub uses_remaining: u32,
}

/// Read-model for one contact.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub id: ContactId,
    pub name_key: &'static str,
    pub unlocked: bool,
    pub loyalty: u32,
    pub max_loyalty: u32,
    pub interactions: u64,
    pub abilities: Vec<AbilityView>,
}

/// The underground-market engine. One instance per game.
#[derive(Debug, Clone)]
pub struct UndergroundMarket {
    last_tick: u64,
    next_rotation_tick: u64,
    active_deals: Vec<Deal>,
    template_cooldowns: HashMap<DealTemplateId, u64>,
    heat: HeatTracker,
    effects: EffectSet,
    investigations: InvestigationSet,
    contacts: HashMap<ContactId, ContactState>,
    stats: Statistics,
    log: ActivityLog,
}

impl Default for UndergroundMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl UndergroundMarket {
    pub fn new() -> Self {
        UndergroundMarket {
            last_tick: 0,
            next_rotation_tick: 0,
            active_deals: Vec::new(),
            template_cooldowns: HashMap::new(),
            heat: HeatTracker::default(),
            effects: EffectSet::default(),
            investigations: InvestigationSet::default(),
            contacts: ContactId::ALL
                .into_iter()
                .map(|id| (id, ContactState::new()))
                .collect(),
            stats: Statistics::default(),
            log: ActivityLog::default(),
        }
    }

    // ---- tick pipeline ----------------------------------------------------

    /// Advances the engine to `current_tick`.
    ///
    /// Stage order is load-bearing: expiry/rotation, then effect countdown,
    /// then investigation countdown, then heat decay, then periodic checks.
    /// Later stages observe values mutated by earlier ones.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        current_tick: u64,
        world: &mut World,
        rng: &mut R,
    ) -> TickReport {
        if current_tick < self.last_tick {
            tracing::warn!(current_tick, last_tick = self.last_tick, "tick went backwards");
            return TickReport::default();
        }
        let last = self.last_tick;
        let delta = current_tick - last;
        let mut report = TickReport::default();

        self.expire_deals(current_tick, &mut report);
        if current_tick >= self.next_rotation_tick {
            self.rotate_deals(current_tick, world.wallet.balance, rng, &mut report);
        }

        for kind in self.effects.advance(delta) {
            report.events.push(TickEvent::EffectExpired { kind });
        }

        for investigation in self.investigations.advance(delta) {
            let roll = percent_roll(rng);
            let event = self.settle_investigation(investigation, roll, current_tick, world);
            report.events.push(event);
        }

        self.heat.decay(delta);

        self.run_periodic(last, current_tick, world, rng, &mut report);
        self.last_tick = current_tick;
        report
    }

    fn expire_deals(&mut self, tick: u64, report: &mut TickReport) {
        let mut kept = Vec::with_capacity(self.active_deals.len());
        for deal in self.active_deals.drain(..) {
            if deal.is_expired(tick) {
                report.events.push(TickEvent::DealExpired { deal_id: deal.id });
                self.log.push(
                    tick,
                    LogSeverity::Info,
                    "log.deal_expired",
                    vec![template(deal.template).name_key.to_string()],
                );
            } else {
                kept.push(deal);
            }
        }
        self.active_deals = kept;
    }

    fn rotate_deals<R: Rng + ?Sized>(
        &mut self,
        tick: u64,
        wealth: Money,
        rng: &mut R,
        report: &mut TickReport,
    ) {
        let tier = self.tier();
        let heat_level = self.heat.level();
        self.active_deals = generate_rotation(
            tier,
            heat_level,
            &self.template_cooldowns,
            wealth,
            tick,
            rng,
        );
        self.next_rotation_tick =
            tick + rng.random_range(ROTATION_INTERVAL_MIN..=ROTATION_INTERVAL_MAX);
        report.events.push(TickEvent::RotationRefreshed {
            deals: self.active_deals.len(),
        });
        self.log.push(
            tick,
            LogSeverity::Info,
            "log.rotation_refreshed",
            vec![self.active_deals.len().to_string()],
        );
    }

    fn run_periodic<R: Rng + ?Sized>(
        &mut self,
        last: u64,
        now: u64,
        world: &mut World,
        rng: &mut R,
        report: &mut TickReport,
    ) {
        if crossings(last, now, DAILY_CYCLE_TICKS) > 0 {
            for state in self.contacts.values_mut() {
                state.reset_daily_uses();
            }
            report.events.push(TickEvent::DailyReset);
        }

        let heals = crossings(last, now, LOYALTY_HEAL_INTERVAL);
        if heals > 0 {
            let amount = LOYALTY_HEAL_AMOUNT * heals as u32;
            for (id, state) in self.contacts.iter_mut() {
                state.heal(amount, contact_def(*id).max_loyalty);
            }
            report.events.push(TickEvent::LoyaltyHealed);
        }

        for _ in 0..crossings(last, now, INVESTIGATION_CHECK_INTERVAL) {
            let chance = self.heat.level().investigation_chance;
            if chance_hits(chance, rng) {
                let severity = severity_for_heat(self.heat.value());
                if let Some(id) = self.investigations.spawn(severity, world.wallet.balance) {
                    self.stats.investigations_triggered += 1;
                    self.log.push(
                        now,
                        LogSeverity::Warning,
                        "log.investigation_opened",
                        vec![severity.to_string()],
                    );
                    report.events.push(TickEvent::InvestigationOpened {
                        investigation_id: id,
                        severity,
                    });
                }
            }
        }
    }

    /// Final state transition of one investigation: catch roll, fine or
    /// relief, archive. Used by both timeout and explicit dismissal.
    fn settle_investigation(
        &mut self,
        investigation: Investigation,
        roll: u8,
        tick: u64,
        world: &mut World,
    ) -> TickEvent {
        let caught = roll < investigation.catch_chance;
        let id = investigation.id;
        let fine_paid = if caught {
            let paid = world.wallet.debit_up_to(investigation.fine);
            self.stats.fines_paid += paid;
            self.heat
                .add(f64::from(investigation.severity) * HEAT_PER_CAUGHT_SEVERITY);
            self.log.push(
                tick,
                LogSeverity::Danger,
                "log.investigation_caught",
                vec![investigation.severity.to_string(), paid.to_string()],
            );
            paid
        } else {
            self.heat.relieve(HEAT_RELIEF_ON_DODGE);
            self.log.push(
                tick,
                LogSeverity::Success,
                "log.investigation_dodged",
                vec![investigation.severity.to_string()],
            );
            Money::ZERO
        };
        self.investigations.archive(investigation, caught);
        TickEvent::InvestigationConcluded {
            investigation_id: id,
            caught,
            fine_paid,
        }
    }

    // ---- player actions ---------------------------------------------------

    /// Accepts a deal: validates, pays, rolls against the deal's risk.
    pub fn accept_deal<R: Rng + ?Sized>(
        &mut self,
        deal_id: Uuid,
        world: &mut World,
        rng: &mut R,
    ) -> ActionResult {
        let roll = percent_roll(rng);
        self.accept_deal_with_roll(deal_id, roll, world, rng)
    }

    /// Deterministic-roll variant of [`UndergroundMarket::accept_deal`];
    /// consequence rolls still come from `rng`.
    pub fn accept_deal_with_roll<R: Rng + ?Sized>(
        &mut self,
        deal_id: Uuid,
        roll: u8,
        world: &mut World,
        rng: &mut R,
    ) -> ActionResult {
        let tick = self.last_tick;
        let index = self
            .active_deals
            .iter()
            .position(|d| d.id == deal_id && d.is_available() && !d.is_expired(tick))
            .ok_or(ActionError::DealUnavailable)?;
        if !world.wallet.can_afford(self.active_deals[index].cost) {
            return Err(ActionError::InsufficientFunds);
        }

        // Point of no return: the deal leaves the active set and the cost
        // is committed before the outcome roll.
        let deal = self.active_deals.remove(index);
        let tmpl = template(deal.template);
        world.wallet.debit_up_to(deal.cost);
        self.stats.cash_spent += deal.cost;

        if roll_succeeds(deal.risk, roll) {
            // A pulled-off job rests the template; a botched one can come
            // straight back around.
            self.template_cooldowns
                .insert(deal.template, tick + tmpl.cooldown_ticks);
            self.heat.add(heat_for_success(deal.risk));
            for effect in &deal.effects {
                self.effects
                    .add(effect.kind, effect.magnitude, effect.duration_ticks, effect.target);
            }
            let xp = (deal.xp_reward as f64 * self.effects.multiplier(EffectKind::XpGain, None))
                .round() as u64;
            world.wallet.grant_xp(xp);
            self.stats.deals_completed += 1;
            self.log.push(
                tick,
                LogSeverity::Success,
                "log.deal_completed",
                vec![tmpl.name_key.to_string(), xp.to_string()],
            );
            Ok(ActionSuccess::DealCompleted { deal_id, xp })
        } else {
            self.heat.add(heat_for_failure());
            let fired = fired_consequences(&deal, rng);
            for consequence in &fired {
                match consequence.kind {
                    ConsequenceKind::ExtraHeat { amount } => self.heat.add(amount),
                    ConsequenceKind::Investigation { severity } => {
                        if self
                            .investigations
                            .spawn(severity, world.wallet.balance)
                            .is_some()
                        {
                            self.stats.investigations_triggered += 1;
                        }
                    }
                    ConsequenceKind::Fine { amount } => {
                        let paid = world.wallet.debit_up_to(amount);
                        self.stats.fines_paid += paid;
                    }
                }
            }
            let xp = partial_xp(deal.xp_reward);
            world.wallet.grant_xp(xp);
            self.stats.deals_failed += 1;
            self.log.push(
                tick,
                LogSeverity::Danger,
                "log.deal_failed",
                vec![tmpl.name_key.to_string(), fired.len().to_string()],
            );
            Ok(ActionSuccess::DealFailed {
                deal_id,
                consequences_fired: fired.len(),
                xp,
            })
        }
    }

    /// Invokes a contact ability through the full pipeline: gates, target
    /// preconditions, payment, betrayal/scam risk gate, execution.
    ///
    /// Payment lands strictly after the preconditions and strictly before
    /// the risk gate, so a betrayal or scam is a committed loss.
    pub fn use_ability<R: Rng + ?Sized>(
        &mut self,
        contact_id: ContactId,
        ability_id: AbilityId,
        world: &mut World,
        rng: &mut R,
    ) -> ActionResult {
        let tick = self.last_tick;
        let contact = contact_def(contact_id);
        let ability = contact
            .ability(ability_id)
            .ok_or(ActionError::UnknownAbility)?;
        let tier_level = self.tier().level;
        let loyalty = {
            let state = self
                .contacts
                .get(&contact_id)
                .ok_or(ActionError::UnknownContact)?;
            logic::check_gates(contact, ability, state, tier_level, tick)?;
            state.loyalty
        };
        logic::check_target(&ability.kind, world, &self.investigations)?;

        let cost = wealth_scale(ability.base_cost, world.wallet.balance);
        if !world.wallet.can_afford(cost) {
            return Err(ActionError::InsufficientFunds);
        }
        world.wallet.debit_up_to(cost);
        self.stats.cash_spent += cost;

        let heat_now = self.heat.value();
        if chance_hits(betrayal_chance(heat_now, loyalty), rng) {
            if let Some(state) = self.contacts.get_mut(&contact_id) {
                state.punish_betrayal();
                state
                    .cooldown_until
                    .insert(ability_id, tick + ability.cooldown_ticks * 2);
            }
            self.heat.add(HEAT_ON_BETRAYAL);
            let severity = severity_for_heat(self.heat.value());
            if self
                .investigations
                .spawn(severity, world.wallet.balance)
                .is_some()
            {
                self.stats.investigations_triggered += 1;
            }
            self.log.push(
                tick,
                LogSeverity::Danger,
                "log.contact_betrayed",
                vec![contact.name_key.to_string()],
            );
            return Ok(ActionSuccess::Betrayed {
                contact: contact_id,
            });
        }
        if chance_hits(scam_chance(heat_now, loyalty), rng) {
            if let Some(state) = self.contacts.get_mut(&contact_id) {
                state.punish_scam();
                state
                    .cooldown_until
                    .insert(ability_id, tick + ability.cooldown_ticks);
            }
            self.log.push(
                tick,
                LogSeverity::Warning,
                "log.contact_scammed",
                vec![contact.name_key.to_string()],
            );
            return Ok(ActionSuccess::Scammed {
                contact: contact_id,
            });
        }

        let outcome = logic::execute(
            ability,
            loyalty,
            world,
            &mut self.effects,
            &mut self.investigations,
            rng,
        )?;
        match &outcome {
            AbilityOutcome::Liquidated { proceeds, .. } => self.stats.cash_earned += *proceeds,
            AbilityOutcome::Payout { amount } => self.stats.cash_earned += *amount,
            AbilityOutcome::InvestigationDismissed { .. } => {
                self.heat.relieve(HEAT_RELIEF_ON_DODGE);
            }
            _ => {}
        }
        if let Some(state) = self.contacts.get_mut(&contact_id) {
            state.record_use(contact, ability_id, tick, ability.cooldown_ticks);
        }
        self.heat.add(HEAT_PER_ABILITY);
        world.wallet.grant_xp(ABILITY_XP);
        self.log.push(
            tick,
            LogSeverity::Success,
            "log.ability_used",
            vec![contact.name_key.to_string(), ability.name_key.to_string()],
        );
        Ok(ActionSuccess::AbilityExecuted {
            contact: contact_id,
            ability: ability_id,
            outcome,
        })
    }

    /// Resolves an active investigation right now via its catch roll
    /// instead of waiting out the countdown.
    pub fn dismiss_investigation<R: Rng + ?Sized>(
        &mut self,
        investigation_id: Uuid,
        world: &mut World,
        rng: &mut R,
    ) -> ActionResult {
        let roll = percent_roll(rng);
        self.dismiss_investigation_with_roll(investigation_id, roll, world)
    }

    /// Deterministic-roll variant of [`UndergroundMarket::dismiss_investigation`].
    pub fn dismiss_investigation_with_roll(
        &mut self,
        investigation_id: Uuid,
        roll: u8,
        world: &mut World,
    ) -> ActionResult {
        let investigation = self
            .investigations
            .take(investigation_id)
            .ok_or(ActionError::UnknownInvestigation)?;
        let tick = self.last_tick;
        let event = self.settle_investigation(investigation, roll, tick, world);
        match event {
            TickEvent::InvestigationConcluded {
                investigation_id,
                caught,
                fine_paid,
            } => Ok(ActionSuccess::InvestigationResolved {
                investigation_id,
                caught,
                fine_paid,
            }),
            _ => Err(ActionError::UnknownInvestigation),
        }
    }

    // ---- query surface ----------------------------------------------------

    pub fn tier(&self) -> &'static TierDef {
        tier_for(self.stats.deals_completed)
    }

    /// Progress toward the next reputation tier, 0..=100.
    pub fn reputation_progress(&self) -> u8 {
        progress_percent(self.stats.deals_completed)
    }

    pub fn heat_value(&self) -> f64 {
        self.heat.value()
    }

    pub fn heat_level(&self) -> &'static HeatLevelDef {
        self.heat.level()
    }

    /// Income penalty the host economy should apply for the current heat.
    pub fn heat_income_penalty(&self) -> f64 {
        self.heat.level().income_penalty
    }

    pub fn lifetime_heat(&self) -> f64 {
        self.heat.lifetime_accumulated()
    }

    pub fn deals(&self) -> &[Deal] {
        &self.active_deals
    }

    /// Ticks until the next deal rotation, from the given current tick.
    pub fn rotation_countdown(&self, current_tick: u64) -> u64 {
        self.next_rotation_tick.saturating_sub(current_tick)
    }

    /// Aggregate effect multiplier for sibling subsystems.
    pub fn effect_multiplier(&self, kind: EffectKind, target: Option<EffectTarget>) -> f64 {
        self.effects.multiplier(kind, target)
    }

    pub fn active_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn investigations(&self) -> &[Investigation] {
        self.investigations.active()
    }

    pub fn recent_investigations(&self) -> &[Investigation] {
        self.investigations.recent()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn net_profit(&self) -> f64 {
        self.stats.net_profit()
    }

    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    /// Read-models for every contact, priced against the given wealth.
    pub fn contacts(&self, wealth: Money) -> Vec<ContactView> {
        let tier_level = self.tier().level;
        ContactId::ALL
            .into_iter()
            .map(|id| {
                let def = contact_def(id);
                let state = self.contacts.get(&id).cloned().unwrap_or_default();
                ContactView {
                    id,
                    name_key: def.name_key,
                    unlocked: tier_level >= def.unlock_tier,
                    loyalty: state.loyalty,
                    max_loyalty: def.max_loyalty,
                    interactions: state.interactions,
                    abilities: def
                        .abilities
                        .iter()
                        .map(|a| AbilityView {
                            id: a.id,
                            name_key: a.name_key,
                            cost: wealth_scale(a.base_cost, wealth),
                            ready_at: state.cooldown_until.get(&a.id).copied().unwrap_or(0),
                            uses_remaining: a
                                .daily_limit
                                .saturating_sub(state.daily_uses_of(a.id)),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    // ---- resets -----------------------------------------------------------

    /// Prestige-style reset: wipes the transient market (deals, cooldowns,
    /// effects, current heat, investigations, log) while preserving lifetime
    /// statistics, reputation, and contact loyalty. Connections persist
    /// across a fresh start.
    pub fn soft_reset(&mut self) {
        self.active_deals.clear();
        self.template_cooldowns.clear();
        self.effects.clear();
        self.heat.reset_current();
        self.investigations.clear();
        self.log.clear();
        for state in self.contacts.values_mut() {
            state.clear_timers();
        }
        self.next_rotation_tick = self.last_tick;
    }

    /// New-game reset: everything back to initial defaults.
    pub fn full_reset(&mut self) {
        *self = UndergroundMarket::new();
    }

    // ---- persistence ------------------------------------------------------

    /// Serializes the full engine state.
    pub fn export(&self) -> SaveData {
        SaveData {
            last_tick: self.last_tick,
            next_rotation_tick: self.next_rotation_tick,
            deals: to_values(&self.active_deals, "deal"),
            template_cooldowns: self
                .template_cooldowns
                .iter()
                .map(|(id, until)| (id.key().to_string(), *until))
                .collect(),
            heat: self.heat.clone(),
            effects: to_values(&self.effects.iter().cloned().collect::<Vec<_>>(), "effect"),
            investigations_active: to_values(self.investigations.active(), "investigation"),
            investigations_recent: to_values(self.investigations.recent(), "investigation"),
            contacts: self
                .contacts
                .iter()
                .filter_map(|(id, state)| {
                    to_value_or_skip(state, "contact").map(|v| (id.key().to_string(), v))
                })
                .collect(),
            stats: self.stats.clone(),
            log: to_values(&self.log.iter().cloned().collect::<Vec<_>>(), "log entry"),
        }
    }

    /// Restores an engine from a save payload.
    ///
    /// Lenient by design: malformed records are logged and skipped, missing
    /// fields fall back to defaults, and contacts absent from the payload
    /// (first load, legacy saves) are re-initialized from the catalog.
    pub fn import(data: SaveData) -> Self {
        let template_cooldowns = data
            .template_cooldowns
            .into_iter()
            .filter_map(|(key, until)| match DealTemplateId::from_key(&key) {
                Some(id) => Some((id, until)),
                None => {
                    tracing::warn!(key, "skipping cooldown for unknown deal template");
                    None
                }
            })
            .collect();
        let contacts = ContactId::ALL
            .into_iter()
            .map(|id| {
                let state = data
                    .contacts
                    .get(id.key())
                    .and_then(|v| parse_record(v.clone(), "contact"))
                    .unwrap_or_default();
                (id, state)
            })
            .collect();
        UndergroundMarket {
            last_tick: data.last_tick,
            next_rotation_tick: data.next_rotation_tick,
            active_deals: parse_records(data.deals, "deal"),
            template_cooldowns,
            heat: data.heat,
            effects: EffectSet::restore(parse_records(data.effects, "effect")),
            investigations: InvestigationSet::restore(
                parse_records(data.investigations_active, "investigation"),
                parse_records(data.investigations_recent, "investigation"),
            ),
            contacts,
            stats: data.stats,
            log: ActivityLog::restore(parse_records(data.log, "log entry")),
        }
    }
}

/// Full-state save payload. All fields default so partial or legacy
/// payloads still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub last_tick: u64,
    #[serde(default)]
    pub next_rotation_tick: u64,
    #[serde(default)]
    pub deals: Vec<Value>,
    #[serde(default)]
    pub template_cooldowns: HashMap<String, u64>,
    #[serde(default)]
    pub heat: HeatTracker,
    #[serde(default)]
    pub effects: Vec<Value>,
    #[serde(default)]
    pub investigations_active: Vec<Value>,
    #[serde(default)]
    pub investigations_recent: Vec<Value>,
    #[serde(default)]
    pub contacts: HashMap<String, Value>,
    #[serde(default)]
    pub stats: Statistics,
    #[serde(default)]
    pub log: Vec<Value>,
}

/// Interval boundaries crossed moving from `last` (exclusive) to `now`
/// (inclusive).
fn crossings(last: u64, now: u64, interval: u64) -> u64 {
    now / interval - last / interval
}

fn to_value_or_skip<T: Serialize>(value: &T, what: &'static str) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(v) => Some(v),
        Err(error) => {
            tracing::warn!(%error, what, "skipping unserializable record");
            None
        }
    }
}

fn to_values<T: Serialize>(values: &[T], what: &'static str) -> Vec<Value> {
    values
        .iter()
        .filter_map(|v| to_value_or_skip(v, what))
        .collect()
}

fn parse_record<T: DeserializeOwned>(value: Value, what: &'static str) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::warn!(%error, what, "skipping malformed record");
            None
        }
    }
}

fn parse_records<T: DeserializeOwned>(values: Vec<Value>, what: &'static str) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|v| parse_record(v, what))
        .collect()
}
