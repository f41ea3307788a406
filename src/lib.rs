//! Underground-market risk economy engine.
//!
//! A self-contained simulation subsystem for an idle-game host: it
//! generates time-limited deals from a weighted catalog, resolves them
//! probabilistically against a player risk profile, tracks a decaying heat
//! accumulator with escalating penalties, runs NPC contact relationships
//! with loyalty and betrayal/scam mechanics, and manages bounded
//! adversarial investigations.
//!
//! The host drives the engine through [`UndergroundMarket`]: one `tick`
//! call per simulated step, synchronous player actions in between, and a
//! lenient export/import pair for persistence. The engine mutates the
//! shared [`World`] (wallet, market prices, inventory, events) directly
//! and never blocks.

pub mod activity;
pub mod catalog;
pub mod contacts;
pub mod core;
pub mod deals;
pub mod effects;
pub mod heat;
pub mod investigations;
pub mod money;
pub mod outcome;
pub mod reputation;
pub mod stats;
pub mod world;

pub use crate::core::engine::{
    AbilityView, ContactView, SaveData, TickEvent, TickReport, UndergroundMarket,
};
pub use crate::money::Money;
pub use crate::outcome::{AbilityOutcome, ActionError, ActionResult, ActionSuccess};
pub use crate::world::World;
