//! Reputation tier definitions.
//!
//! Tiers are derived from the lifetime completed-deal count; they gate deal
//! categories and contact abilities and grant price/risk perks.

#![allow(dead_code)]

use crate::catalog::deals::DealCategory;

#[derive(Debug, Clone, Copy)]
pub struct TierDef {
    pub level: u8,
    pub name_key: &'static str,
    /// Lifetime completed deals required to reach this tier.
    pub deals_required: u64,
    /// Deal categories unlocked at this tier (cumulative).
    pub categories: &'static [DealCategory],
    /// How many deals each rotation offers at this tier.
    pub deal_slots: usize,
    /// Fractional price discount applied to generated deal costs.
    pub price_discount: f64,
    /// Flat risk reduction in percent points.
    pub risk_reduction: u8,
}

pub const TIERS: [TierDef; 5] = [
    TierDef {
        level: 1,
        name_key: "tier.street_runner",
        deals_required: 0,
        categories: &[DealCategory::Smuggling],
        deal_slots: 2,
        price_discount: 0.0,
        risk_reduction: 0,
    },
    TierDef {
        level: 2,
        name_key: "tier.hustler",
        deals_required: 5,
        categories: &[DealCategory::Smuggling, DealCategory::Counterfeit],
        deal_slots: 3,
        price_discount: 0.05,
        risk_reduction: 2,
    },
    TierDef {
        level: 3,
        name_key: "tier.operator",
        deals_required: 15,
        categories: &[
            DealCategory::Smuggling,
            DealCategory::Counterfeit,
            DealCategory::Cyber,
        ],
        deal_slots: 4,
        price_discount: 0.10,
        risk_reduction: 4,
    },
    TierDef {
        level: 4,
        name_key: "tier.capo",
        deals_required: 30,
        categories: &[
            DealCategory::Smuggling,
            DealCategory::Counterfeit,
            DealCategory::Cyber,
            DealCategory::Heist,
        ],
        deal_slots: 5,
        price_discount: 0.15,
        risk_reduction: 6,
    },
    TierDef {
        level: 5,
        name_key: "tier.shadow_boss",
        deals_required: 50,
        categories: &[
            DealCategory::Smuggling,
            DealCategory::Counterfeit,
            DealCategory::Cyber,
            DealCategory::Heist,
            DealCategory::Cartel,
        ],
        deal_slots: 6,
        price_discount: 0.20,
        risk_reduction: 8,
    },
];

impl TierDef {
    pub fn unlocks(&self, category: DealCategory) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_increase() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].deals_required < pair[1].deals_required);
            assert!(pair[0].level < pair[1].level);
        }
    }

    #[test]
    fn test_categories_are_cumulative() {
        for pair in TIERS.windows(2) {
            for cat in pair[0].categories {
                assert!(pair[1].unlocks(*cat));
            }
        }
    }

    #[test]
    fn test_perks_never_regress() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].deal_slots <= pair[1].deal_slots);
            assert!(pair[0].price_discount <= pair[1].price_discount);
            assert!(pair[0].risk_reduction <= pair[1].risk_reduction);
        }
    }
}
