//! Lifetime statistics: monotone counters the UI stats panel reads and
//! reputation derives from. Survives soft resets, zeroed by a full reset.

use crate::money::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Lifetime completed deals; drives the reputation tier.
    #[serde(default)]
    pub deals_completed: u64,
    #[serde(default)]
    pub deals_failed: u64,
    /// Cash spent on deal costs and ability fees.
    #[serde(default)]
    pub cash_spent: Money,
    /// Cash earned from payouts and liquidations.
    #[serde(default)]
    pub cash_earned: Money,
    /// Fines paid to investigations and failure consequences.
    #[serde(default)]
    pub fines_paid: Money,
    /// Investigations ever spawned (dropped-over-cap ones not counted).
    #[serde(default)]
    pub investigations_triggered: u64,
}

impl Statistics {
    /// Earned minus spent minus fines. Negative numbers are reported as a
    /// loss by the UI, so this returns the signed value as f64.
    pub fn net_profit(&self) -> f64 {
        self.cash_earned.to_f64() - self.cash_spent.to_f64() - self.fines_paid.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_profit_signed() {
        let mut stats = Statistics::default();
        stats.cash_earned = Money::from_units(1_000);
        stats.cash_spent = Money::from_units(600);
        stats.fines_paid = Money::from_units(500);
        assert!((stats.net_profit() - (-100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = Statistics::default();
        assert_eq!(stats.deals_completed, 0);
        assert_eq!(stats.cash_spent, Money::ZERO);
        assert_eq!(stats.net_profit(), 0.0);
    }

    #[test]
    fn test_legacy_payload_missing_fields_defaults() {
        let minimal = serde_json::json!({ "deals_completed": 7 });
        let stats: Statistics = serde_json::from_value(minimal).unwrap();
        assert_eq!(stats.deals_completed, 7);
        assert_eq!(stats.fines_paid, Money::ZERO);
    }
}
