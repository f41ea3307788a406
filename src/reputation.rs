//! Reputation: a tier derived from the lifetime completed-deal count.
//!
//! Nothing is stored here; the completed counter lives in [`crate::stats`]
//! and these functions map it to a tier and a progress percentage.

use crate::catalog::tiers::{TierDef, TIERS};

/// Highest tier whose threshold is at or below `completed`.
/// Total and monotone for all counts.
pub fn tier_for(completed: u64) -> &'static TierDef {
    TIERS
        .iter()
        .rev()
        .find(|tier| completed >= tier.deals_required)
        .unwrap_or(&TIERS[0])
}

/// The tier after `level`, if any.
pub fn next_tier(level: u8) -> Option<&'static TierDef> {
    TIERS.iter().find(|tier| tier.level == level + 1)
}

/// Progress toward the next tier as a 0–100 integer.
/// Reports 100 once no higher tier exists.
pub fn progress_percent(completed: u64) -> u8 {
    let current = tier_for(completed);
    let Some(next) = next_tier(current.level) else {
        return 100;
    };
    let span = next.deals_required - current.deals_required;
    let into = completed - current.deals_required;
    ((into * 100) / span).min(100) as u8
}
