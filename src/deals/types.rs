//! Deal instance types.
//!
//! A [`Deal`] is a concrete, time-limited offer generated from a catalog
//! template: costs and monetary consequences are already wealth-scaled,
//! risk already carries variance and tier/heat modifiers.

use crate::catalog::deals::DealTemplateId;
use crate::effects::{EffectKind, EffectTarget};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    Available,
    Completed,
    Failed,
}

/// A success effect pending on a deal instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingEffect {
    pub kind: EffectKind,
    pub magnitude: f64,
    pub duration_ticks: u64,
    pub target: Option<EffectTarget>,
}

/// A failure consequence on a deal instance. Monetary amounts were
/// wealth-scaled at generation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ConsequenceKind {
    ExtraHeat { amount: f64 },
    Investigation { severity: u8 },
    Fine { amount: Money },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Consequence {
    pub kind: ConsequenceKind,
    /// Independent percent chance [0, 100] this fires on failure.
    pub chance: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub template: DealTemplateId,
    pub cost: Money,
    /// Failure probability in percent, clamped to [1, 95].
    pub risk: u8,
    pub effects: Vec<PendingEffect>,
    pub consequences: Vec<Consequence>,
    pub xp_reward: u64,
    /// Tick at which this offer leaves the board.
    pub expires_at: u64,
    pub status: DealStatus,
}

impl Deal {
    pub fn is_available(&self) -> bool {
        self.status == DealStatus::Available
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick >= self.expires_at
    }
}
