//! Contact relationships: mutable state, gating, and ability execution.

pub mod logic;
pub mod types;
