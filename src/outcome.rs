//! Typed results for player-initiated actions.
//!
//! Business-rule rejections are [`ActionError`] values the caller branches
//! on; they are expected, cheap, and never panic. Randomness-driven losses
//! (a failed deal, a betrayal, getting caught) are *successful* action
//! results: the action ran, the dice just came up badly. The split keeps
//! "the player cannot do this" distinguishable from "the player did this
//! and it went poorly".

use crate::catalog::contacts::{AbilityId, ContactId};
use crate::money::Money;
use crate::world::PriceDirection;
use std::fmt;
use uuid::Uuid;

/// Why an action was rejected before any state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    DealUnavailable,
    InsufficientFunds,
    UnknownContact,
    UnknownAbility,
    TierTooLow,
    InsufficientLoyalty,
    AbilityOnCooldown,
    DailyLimitReached,
    NoEligibleTarget,
    UnknownInvestigation,
}

impl ActionError {
    /// Stable reason code the UI maps to a localized message.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ActionError::DealUnavailable => "deal_unavailable",
            ActionError::InsufficientFunds => "insufficient_funds",
            ActionError::UnknownContact => "unknown_contact",
            ActionError::UnknownAbility => "unknown_ability",
            ActionError::TierTooLow => "tier_too_low",
            ActionError::InsufficientLoyalty => "insufficient_loyalty",
            ActionError::AbilityOnCooldown => "ability_on_cooldown",
            ActionError::DailyLimitReached => "daily_limit_reached",
            ActionError::NoEligibleTarget => "no_eligible_target",
            ActionError::UnknownInvestigation => "unknown_investigation",
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason_code())
    }
}

impl std::error::Error for ActionError {}

/// Concrete result of an ability that actually executed.
#[derive(Debug, Clone, PartialEq)]
pub enum AbilityOutcome {
    Liquidated {
        items_sold: usize,
        proceeds: Money,
    },
    Payout {
        amount: Money,
    },
    Tip {
        asset_id: String,
        direction: PriceDirection,
        /// Probability the direction is right, as shown to the player.
        confidence: f64,
    },
    PriceNudged {
        asset_id: String,
        new_price: Money,
    },
    EffectGranted,
    InvestigationDismissed {
        investigation_id: Uuid,
    },
    EventCleared {
        event_id: Uuid,
    },
}

/// A completed action, including the unlucky outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionSuccess {
    /// Deal roll beat the risk: effects applied, reputation earned.
    DealCompleted { deal_id: Uuid, xp: u64 },
    /// Deal roll lost; the listed consequences fired.
    DealFailed {
        deal_id: Uuid,
        consequences_fired: usize,
        xp: u64,
    },
    /// The ability ran its effect.
    AbilityExecuted {
        contact: ContactId,
        ability: AbilityId,
        outcome: AbilityOutcome,
    },
    /// The contact turned on the player: payment lost, heat spiked,
    /// an investigation may have opened.
    Betrayed { contact: ContactId },
    /// The contact pocketed the payment and vanished for a while.
    Scammed { contact: ContactId },
    /// An investigation resolved early by explicit dismissal.
    InvestigationResolved {
        investigation_id: Uuid,
        caught: bool,
        fine_paid: Money,
    },
}

pub type ActionResult = Result<ActionSuccess, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_are_unique() {
        let all = [
            ActionError::DealUnavailable,
            ActionError::InsufficientFunds,
            ActionError::UnknownContact,
            ActionError::UnknownAbility,
            ActionError::TierTooLow,
            ActionError::InsufficientLoyalty,
            ActionError::AbilityOnCooldown,
            ActionError::DailyLimitReached,
            ActionError::NoEligibleTarget,
            ActionError::UnknownInvestigation,
        ];
        let mut codes: Vec<&str> = all.iter().map(|e| e.reason_code()).collect();
        let before = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }

    #[test]
    fn test_display_matches_reason_code() {
        assert_eq!(
            ActionError::InsufficientFunds.to_string(),
            "insufficient_funds"
        );
    }
}
