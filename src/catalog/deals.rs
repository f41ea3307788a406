//! Static deal template definitions.
//!
//! Pure data: the deal engine reads these tables and never writes them.
//! Localization keys follow `deal.<id>.{name,desc}`; the UI layer resolves
//! them.

#![allow(dead_code)]

use crate::effects::{EffectKind, EffectTarget};

/// Category a deal belongs to. Categories unlock per reputation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DealCategory {
    Smuggling,
    Counterfeit,
    Cyber,
    Heist,
    Cartel,
}

/// Identity of a deal template in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DealTemplateId {
    CigaretteRun,
    BootlegLiquor,
    GreyMarketParts,
    FakeDesignerGoods,
    ForgedPapers,
    PhishingCampaign,
    InsiderLeak,
    CryptoMixer,
    WarehouseJob,
    ArmoredTransport,
    RouteTakeover,
    CartelSummit,
}

impl DealTemplateId {
    /// Stable string key used in save payloads.
    pub fn key(&self) -> &'static str {
        match self {
            DealTemplateId::CigaretteRun => "cigarette_run",
            DealTemplateId::BootlegLiquor => "bootleg_liquor",
            DealTemplateId::GreyMarketParts => "grey_market_parts",
            DealTemplateId::FakeDesignerGoods => "fake_designer_goods",
            DealTemplateId::ForgedPapers => "forged_papers",
            DealTemplateId::PhishingCampaign => "phishing_campaign",
            DealTemplateId::InsiderLeak => "insider_leak",
            DealTemplateId::CryptoMixer => "crypto_mixer",
            DealTemplateId::WarehouseJob => "warehouse_job",
            DealTemplateId::ArmoredTransport => "armored_transport",
            DealTemplateId::RouteTakeover => "route_takeover",
            DealTemplateId::CartelSummit => "cartel_summit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_TEMPLATES.iter().map(|t| t.id).find(|id| id.key() == key)
    }
}

/// Success effect carried by a template.
#[derive(Debug, Clone, Copy)]
pub struct EffectSpec {
    pub kind: EffectKind,
    pub magnitude: f64,
    pub duration_ticks: u64,
    pub target: Option<EffectTarget>,
}

/// What a fired failure consequence does. Monetary bases are wealth-scaled
/// when the deal instance is generated.
#[derive(Debug, Clone, Copy)]
pub enum ConsequenceEffect {
    ExtraHeat { amount: f64 },
    Investigation { severity: u8 },
    Fine { base: i64 },
}

/// Failure consequence with its own independent trigger probability.
#[derive(Debug, Clone, Copy)]
pub struct ConsequenceSpec {
    pub effect: ConsequenceEffect,
    /// Percent chance [0, 100] this consequence fires on failure.
    pub chance: u8,
}

/// A static deal template the rotation draws from.
#[derive(Debug, Clone, Copy)]
pub struct DealTemplate {
    pub id: DealTemplateId,
    pub category: DealCategory,
    pub min_tier: u8,
    pub name_key: &'static str,
    pub desc_key: &'static str,
    /// Base cost in whole currency units, before wealth scaling.
    pub base_cost: i64,
    /// Base failure probability in percent, before variance and modifiers.
    pub base_risk: u8,
    /// Popularity weight for the rotation's weighted draw.
    pub weight: u32,
    pub xp_reward: u64,
    /// Ticks before this template may be generated again after completion.
    pub cooldown_ticks: u64,
    pub effects: &'static [EffectSpec],
    pub consequences: &'static [ConsequenceSpec],
}

pub const ALL_TEMPLATES: [DealTemplate; 12] = [
    DealTemplate {
        id: DealTemplateId::CigaretteRun,
        category: DealCategory::Smuggling,
        min_tier: 1,
        name_key: "deal.cigarette_run.name",
        desc_key: "deal.cigarette_run.desc",
        base_cost: 800,
        base_risk: 15,
        weight: 30,
        xp_reward: 10,
        cooldown_ticks: 120,
        effects: &[EffectSpec {
            kind: EffectKind::CostReduction,
            magnitude: -0.05,
            duration_ticks: 300,
            target: Some(EffectTarget::Business),
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::ExtraHeat { amount: 4.0 },
            chance: 40,
        }],
    },
    DealTemplate {
        id: DealTemplateId::BootlegLiquor,
        category: DealCategory::Smuggling,
        min_tier: 1,
        name_key: "deal.bootleg_liquor.name",
        desc_key: "deal.bootleg_liquor.desc",
        base_cost: 1_500,
        base_risk: 25,
        weight: 25,
        xp_reward: 16,
        cooldown_ticks: 180,
        effects: &[EffectSpec {
            kind: EffectKind::IncomeBoost,
            magnitude: 0.08,
            duration_ticks: 300,
            target: None,
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::ExtraHeat { amount: 5.0 },
            chance: 50,
        }],
    },
    DealTemplate {
        id: DealTemplateId::GreyMarketParts,
        category: DealCategory::Smuggling,
        min_tier: 1,
        name_key: "deal.grey_market_parts.name",
        desc_key: "deal.grey_market_parts.desc",
        base_cost: 2_500,
        base_risk: 20,
        weight: 20,
        xp_reward: 14,
        cooldown_ticks: 200,
        effects: &[EffectSpec {
            kind: EffectKind::CostReduction,
            magnitude: -0.06,
            duration_ticks: 360,
            target: None,
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::Fine { base: 500 },
            chance: 30,
        }],
    },
    DealTemplate {
        id: DealTemplateId::FakeDesignerGoods,
        category: DealCategory::Counterfeit,
        min_tier: 2,
        name_key: "deal.fake_designer_goods.name",
        desc_key: "deal.fake_designer_goods.desc",
        base_cost: 4_000,
        base_risk: 30,
        weight: 22,
        xp_reward: 24,
        cooldown_ticks: 240,
        effects: &[EffectSpec {
            kind: EffectKind::IncomeBoost,
            magnitude: 0.10,
            duration_ticks: 400,
            target: Some(EffectTarget::Business),
        }],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::ExtraHeat { amount: 6.0 },
                chance: 50,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::Fine { base: 1_200 },
                chance: 25,
            },
        ],
    },
    DealTemplate {
        id: DealTemplateId::ForgedPapers,
        category: DealCategory::Counterfeit,
        min_tier: 2,
        name_key: "deal.forged_papers.name",
        desc_key: "deal.forged_papers.desc",
        base_cost: 6_000,
        base_risk: 35,
        weight: 18,
        xp_reward: 30,
        cooldown_ticks: 300,
        effects: &[EffectSpec {
            kind: EffectKind::XpGain,
            magnitude: 0.15,
            duration_ticks: 400,
            target: None,
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::Investigation { severity: 1 },
            chance: 30,
        }],
    },
    DealTemplate {
        id: DealTemplateId::PhishingCampaign,
        category: DealCategory::Cyber,
        min_tier: 3,
        name_key: "deal.phishing_campaign.name",
        desc_key: "deal.phishing_campaign.desc",
        base_cost: 9_000,
        base_risk: 40,
        weight: 20,
        xp_reward: 40,
        cooldown_ticks: 300,
        effects: &[EffectSpec {
            kind: EffectKind::IncomeBoost,
            magnitude: 0.12,
            duration_ticks: 350,
            target: None,
        }],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::Investigation { severity: 2 },
                chance: 35,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::ExtraHeat { amount: 8.0 },
                chance: 40,
            },
        ],
    },
    DealTemplate {
        id: DealTemplateId::InsiderLeak,
        category: DealCategory::Cyber,
        min_tier: 3,
        name_key: "deal.insider_leak.name",
        desc_key: "deal.insider_leak.desc",
        base_cost: 12_000,
        base_risk: 45,
        weight: 15,
        xp_reward: 48,
        cooldown_ticks: 360,
        effects: &[EffectSpec {
            kind: EffectKind::StockReturn,
            magnitude: 0.20,
            duration_ticks: 300,
            target: Some(EffectTarget::Stocks),
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::Investigation { severity: 2 },
            chance: 40,
        }],
    },
    DealTemplate {
        id: DealTemplateId::CryptoMixer,
        category: DealCategory::Cyber,
        min_tier: 3,
        name_key: "deal.crypto_mixer.name",
        desc_key: "deal.crypto_mixer.desc",
        base_cost: 15_000,
        base_risk: 40,
        weight: 14,
        xp_reward: 46,
        cooldown_ticks: 360,
        effects: &[EffectSpec {
            kind: EffectKind::CryptoReturn,
            magnitude: 0.20,
            duration_ticks: 300,
            target: Some(EffectTarget::Crypto),
        }],
        consequences: &[ConsequenceSpec {
            effect: ConsequenceEffect::Fine { base: 4_000 },
            chance: 35,
        }],
    },
    DealTemplate {
        id: DealTemplateId::WarehouseJob,
        category: DealCategory::Heist,
        min_tier: 4,
        name_key: "deal.warehouse_job.name",
        desc_key: "deal.warehouse_job.desc",
        base_cost: 25_000,
        base_risk: 55,
        weight: 12,
        xp_reward: 70,
        cooldown_ticks: 480,
        effects: &[EffectSpec {
            kind: EffectKind::IncomeBoost,
            magnitude: 0.18,
            duration_ticks: 400,
            target: None,
        }],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::Investigation { severity: 3 },
                chance: 45,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::ExtraHeat { amount: 10.0 },
                chance: 50,
            },
        ],
    },
    DealTemplate {
        id: DealTemplateId::ArmoredTransport,
        category: DealCategory::Heist,
        min_tier: 4,
        name_key: "deal.armored_transport.name",
        desc_key: "deal.armored_transport.desc",
        base_cost: 40_000,
        base_risk: 65,
        weight: 10,
        xp_reward: 90,
        cooldown_ticks: 600,
        effects: &[EffectSpec {
            kind: EffectKind::IncomeBoost,
            magnitude: 0.25,
            duration_ticks: 400,
            target: None,
        }],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::Investigation { severity: 4 },
                chance: 50,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::Fine { base: 12_000 },
                chance: 40,
            },
        ],
    },
    DealTemplate {
        id: DealTemplateId::RouteTakeover,
        category: DealCategory::Cartel,
        min_tier: 5,
        name_key: "deal.route_takeover.name",
        desc_key: "deal.route_takeover.desc",
        base_cost: 70_000,
        base_risk: 60,
        weight: 8,
        xp_reward: 120,
        cooldown_ticks: 720,
        effects: &[
            EffectSpec {
                kind: EffectKind::IncomeBoost,
                magnitude: 0.30,
                duration_ticks: 500,
                target: None,
            },
            EffectSpec {
                kind: EffectKind::CostReduction,
                magnitude: -0.10,
                duration_ticks: 500,
                target: None,
            },
        ],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::Investigation { severity: 4 },
                chance: 50,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::ExtraHeat { amount: 14.0 },
                chance: 60,
            },
        ],
    },
    DealTemplate {
        id: DealTemplateId::CartelSummit,
        category: DealCategory::Cartel,
        min_tier: 5,
        name_key: "deal.cartel_summit.name",
        desc_key: "deal.cartel_summit.desc",
        base_cost: 100_000,
        base_risk: 70,
        weight: 6,
        xp_reward: 160,
        cooldown_ticks: 900,
        effects: &[
            EffectSpec {
                kind: EffectKind::StockReturn,
                magnitude: 0.25,
                duration_ticks: 400,
                target: Some(EffectTarget::Stocks),
            },
            EffectSpec {
                kind: EffectKind::IncomeBoost,
                magnitude: 0.35,
                duration_ticks: 400,
                target: None,
            },
        ],
        consequences: &[
            ConsequenceSpec {
                effect: ConsequenceEffect::Investigation { severity: 5 },
                chance: 55,
            },
            ConsequenceSpec {
                effect: ConsequenceEffect::Fine { base: 30_000 },
                chance: 45,
            },
        ],
    },
];

/// Looks up a template by id. Templates are a closed set, so this is total.
pub fn template(id: DealTemplateId) -> &'static DealTemplate {
    ALL_TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .expect("every DealTemplateId has a catalog entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_id_resolves() {
        for t in &ALL_TEMPLATES {
            assert_eq!(template(t.id).id, t.id);
        }
    }

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        for t in &ALL_TEMPLATES {
            assert_eq!(DealTemplateId::from_key(t.id.key()), Some(t.id));
        }
        let mut keys: Vec<_> = ALL_TEMPLATES.iter().map(|t| t.id.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL_TEMPLATES.len());
    }

    #[test]
    fn test_base_risks_within_clamp() {
        for t in &ALL_TEMPLATES {
            assert!((1..=95).contains(&t.base_risk), "{:?}", t.id);
        }
    }

    #[test]
    fn test_consequence_chances_are_percentages() {
        for t in &ALL_TEMPLATES {
            for c in t.consequences {
                assert!(c.chance <= 100, "{:?}", t.id);
            }
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(DealTemplateId::from_key("no_such_deal"), None);
    }
}
