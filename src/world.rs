//! External collaborators mutated by the engine.
//!
//! The engine does not own the player's wallet, the market, the inventory,
//! or the global event list; the surrounding game does. Callers pass a
//! `&mut World` into every mutating call, mirroring the single shared-state
//! pool of the host game loop. Nothing here is persisted by this crate.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player wallet: cash balance plus experience.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: Money,
    pub xp: u64,
}

impl Wallet {
    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    pub fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Debits up to `amount`, flooring the balance at zero.
    /// Returns what was actually taken.
    pub fn debit_up_to(&mut self, amount: Money) -> Money {
        let taken = self.balance.min(amount);
        self.balance = self.balance.saturating_sub(amount);
        taken
    }

    pub fn grant_xp(&mut self, amount: u64) {
        self.xp += amount;
    }
}

/// Direction of a market price movement, as revealed by contact tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDirection {
    Up,
    Down,
}

impl PriceDirection {
    pub fn flipped(self) -> PriceDirection {
        match self {
            PriceDirection::Up => PriceDirection::Down,
            PriceDirection::Down => PriceDirection::Up,
        }
    }
}

/// A price-bearing asset (stock, crypto, ...) some abilities read or nudge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAsset {
    pub id: String,
    pub price: Money,
}

/// An inventory item with a resale value, liquidated by fence abilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub value: Money,
}

/// Category of a global game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Positive,
    Negative,
}

/// A global game event; fixer abilities can clear negative ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldEvent {
    pub id: Uuid,
    pub category: EventCategory,
}

/// The shared-state pool the engine mutates on behalf of the player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub wallet: Wallet,
    pub assets: Vec<MarketAsset>,
    pub inventory: Vec<InventoryItem>,
    pub events: Vec<WorldEvent>,
}

impl World {
    /// Convenience constructor for a world with just cash; used all over the tests.
    pub fn with_balance(units: i64) -> Self {
        World {
            wallet: Wallet {
                balance: Money::from_units(units),
                xp: 0,
            },
            ..World::default()
        }
    }

    pub fn has_negative_event(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.category == EventCategory::Negative)
    }

    /// Removes and returns the first negative event, if any.
    pub fn take_negative_event(&mut self) -> Option<WorldEvent> {
        let idx = self
            .events
            .iter()
            .position(|e| e.category == EventCategory::Negative)?;
        Some(self.events.remove(idx))
    }
}
