//! Static game data: deal templates, contacts, reputation tiers, and the
//! heat penalty table. Read-only input to the engine.

pub mod contacts;
pub mod deals;
pub mod heat_levels;
pub mod tiers;
