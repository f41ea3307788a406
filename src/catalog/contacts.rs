//! Static contact and ability definitions.
//!
//! Each contact is a persistent NPC relationship offering a couple of
//! special abilities. Ability behavior is a closed enum so dispatch stays
//! exhaustive; adding a contact means extending these tables and the match
//! arms that consume `AbilityKind`.

#![allow(dead_code)]

use crate::effects::{EffectKind, EffectTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContactId {
    Fence,
    Informant,
    Smuggler,
    Fixer,
    Kingpin,
}

impl ContactId {
    pub const ALL: [ContactId; 5] = [
        ContactId::Fence,
        ContactId::Informant,
        ContactId::Smuggler,
        ContactId::Fixer,
        ContactId::Kingpin,
    ];

    /// Stable string key used in save payloads.
    pub fn key(&self) -> &'static str {
        match self {
            ContactId::Fence => "fence",
            ContactId::Informant => "informant",
            ContactId::Smuggler => "smuggler",
            ContactId::Fixer => "fixer",
            ContactId::Kingpin => "kingpin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AbilityId {
    FenceGoods,
    QuickFlip,
    MarketTip,
    PriceNudge,
    SupplyRoute,
    CourierJob,
    CaseDismissal,
    CleanSlate,
    LaunderNetwork,
    MarketPump,
}

/// What an ability does when it actually executes (after gates, payment,
/// and the risk gate).
#[derive(Debug, Clone, Copy)]
pub enum AbilityKind {
    /// Sell the entire inventory at a contact-specific markup.
    LiquidateInventory { markup: f64 },
    /// Flat cash reward, wealth-scaled.
    FlatPayout { base: i64 },
    /// Reveal a directional price tip; accuracy scales with loyalty.
    PriceTip,
    /// Push a random asset's price by the given fraction.
    NudgePrice { swing: f64 },
    /// Grant a timed economic effect.
    GrantEffect {
        kind: EffectKind,
        magnitude: f64,
        duration_ticks: u64,
        target: Option<EffectTarget>,
    },
    /// Make the oldest active investigation go away quietly.
    DismissInvestigation,
    /// Clear one active negative game event.
    ClearNegativeEvent,
}

#[derive(Debug, Clone, Copy)]
pub struct AbilityDef {
    pub id: AbilityId,
    pub name_key: &'static str,
    pub min_tier: u8,
    pub min_loyalty: u32,
    /// Base cost in whole currency units, wealth-scaled at invocation.
    pub base_cost: i64,
    pub cooldown_ticks: u64,
    /// Uses allowed per daily cycle.
    pub daily_limit: u32,
    pub kind: AbilityKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDef {
    pub id: ContactId,
    pub name_key: &'static str,
    /// Reputation tier at which this contact becomes reachable.
    pub unlock_tier: u8,
    pub max_loyalty: u32,
    /// Loyalty gained per successful ability use.
    pub loyalty_per_use: u32,
    pub abilities: &'static [AbilityDef],
}

impl ContactDef {
    pub fn ability(&self, id: AbilityId) -> Option<&'static AbilityDef> {
        self.abilities.iter().find(|a| a.id == id)
    }
}

pub const ALL_CONTACTS: [ContactDef; 5] = [
    ContactDef {
        id: ContactId::Fence,
        name_key: "contact.fence",
        unlock_tier: 1,
        max_loyalty: 100,
        loyalty_per_use: 2,
        abilities: &[
            AbilityDef {
                id: AbilityId::FenceGoods,
                name_key: "ability.fence_goods",
                min_tier: 1,
                min_loyalty: 0,
                base_cost: 200,
                cooldown_ticks: 120,
                daily_limit: 3,
                kind: AbilityKind::LiquidateInventory { markup: 1.15 },
            },
            AbilityDef {
                id: AbilityId::QuickFlip,
                name_key: "ability.quick_flip",
                min_tier: 1,
                min_loyalty: 10,
                base_cost: 250,
                cooldown_ticks: 240,
                daily_limit: 2,
                kind: AbilityKind::FlatPayout { base: 600 },
            },
        ],
    },
    ContactDef {
        id: ContactId::Informant,
        name_key: "contact.informant",
        unlock_tier: 2,
        max_loyalty: 100,
        loyalty_per_use: 2,
        abilities: &[
            AbilityDef {
                id: AbilityId::MarketTip,
                name_key: "ability.market_tip",
                min_tier: 2,
                min_loyalty: 10,
                base_cost: 800,
                cooldown_ticks: 180,
                daily_limit: 3,
                kind: AbilityKind::PriceTip,
            },
            AbilityDef {
                id: AbilityId::PriceNudge,
                name_key: "ability.price_nudge",
                min_tier: 2,
                min_loyalty: 25,
                base_cost: 2_000,
                cooldown_ticks: 360,
                daily_limit: 1,
                kind: AbilityKind::NudgePrice { swing: 0.04 },
            },
        ],
    },
    ContactDef {
        id: ContactId::Smuggler,
        name_key: "contact.smuggler",
        unlock_tier: 2,
        max_loyalty: 100,
        loyalty_per_use: 3,
        abilities: &[
            AbilityDef {
                id: AbilityId::SupplyRoute,
                name_key: "ability.supply_route",
                min_tier: 2,
                min_loyalty: 15,
                base_cost: 1_500,
                cooldown_ticks: 300,
                daily_limit: 2,
                kind: AbilityKind::GrantEffect {
                    kind: EffectKind::CostReduction,
                    magnitude: -0.08,
                    duration_ticks: 360,
                    target: Some(EffectTarget::Business),
                },
            },
            AbilityDef {
                id: AbilityId::CourierJob,
                name_key: "ability.courier_job",
                min_tier: 2,
                min_loyalty: 5,
                base_cost: 1_000,
                cooldown_ticks: 240,
                daily_limit: 2,
                kind: AbilityKind::FlatPayout { base: 2_500 },
            },
        ],
    },
    ContactDef {
        id: ContactId::Fixer,
        name_key: "contact.fixer",
        unlock_tier: 3,
        max_loyalty: 100,
        loyalty_per_use: 2,
        abilities: &[
            AbilityDef {
                id: AbilityId::CaseDismissal,
                name_key: "ability.case_dismissal",
                min_tier: 3,
                min_loyalty: 20,
                base_cost: 5_000,
                cooldown_ticks: 480,
                daily_limit: 1,
                kind: AbilityKind::DismissInvestigation,
            },
            AbilityDef {
                id: AbilityId::CleanSlate,
                name_key: "ability.clean_slate",
                min_tier: 3,
                min_loyalty: 30,
                base_cost: 8_000,
                cooldown_ticks: 600,
                daily_limit: 1,
                kind: AbilityKind::ClearNegativeEvent,
            },
        ],
    },
    ContactDef {
        id: ContactId::Kingpin,
        name_key: "contact.kingpin",
        unlock_tier: 5,
        max_loyalty: 100,
        loyalty_per_use: 1,
        abilities: &[
            AbilityDef {
                id: AbilityId::LaunderNetwork,
                name_key: "ability.launder_network",
                min_tier: 5,
                min_loyalty: 40,
                base_cost: 20_000,
                cooldown_ticks: 900,
                daily_limit: 1,
                kind: AbilityKind::GrantEffect {
                    kind: EffectKind::IncomeBoost,
                    magnitude: 0.20,
                    duration_ticks: 600,
                    target: None,
                },
            },
            AbilityDef {
                id: AbilityId::MarketPump,
                name_key: "ability.market_pump",
                min_tier: 5,
                min_loyalty: 50,
                base_cost: 30_000,
                cooldown_ticks: 1_200,
                daily_limit: 1,
                kind: AbilityKind::NudgePrice { swing: 0.10 },
            },
        ],
    },
];

/// Looks up a contact definition. Total over the closed id set.
pub fn contact_def(id: ContactId) -> &'static ContactDef {
    ALL_CONTACTS
        .iter()
        .find(|c| c.id == id)
        .expect("every ContactId has a catalog entry")
}
