//! Investigations: time-boxed adversarial events.
//!
//! Each investigation is a two-state machine: `active` until its countdown
//! hits zero or the player dismisses it, then `resolved{caught|dodged}`,
//! terminal. The set is bounded; triggers past the cap are dropped, and a
//! short history of resolved investigations is retained for the UI.

use crate::core::constants::{
    INVESTIGATION_BASE_TICKS, INVESTIGATION_CATCH_BASE, INVESTIGATION_CATCH_CAP,
    INVESTIGATION_CATCH_PER_SEVERITY, INVESTIGATION_FINE_BASE,
    INVESTIGATION_TICKS_PER_SEVERITY, MAX_ACTIVE_INVESTIGATIONS, RECENT_INVESTIGATIONS_CAP,
};
use crate::core::scaling::wealth_scale;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity bounds; severity drives duration, fine size and catch chance.
pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    pub id: Uuid,
    pub severity: u8,
    pub remaining_ticks: u64,
    pub total_ticks: u64,
    /// Precomputed at spawn so the fine doesn't drift with wealth.
    pub fine: Money,
    /// Percent chance [0, 100] the resolution roll catches the player.
    pub catch_chance: u8,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub caught: bool,
}

impl Investigation {
    fn new(severity: u8, wealth: Money) -> Self {
        let severity = severity.clamp(SEVERITY_MIN, SEVERITY_MAX);
        let total = INVESTIGATION_BASE_TICKS + severity as u64 * INVESTIGATION_TICKS_PER_SEVERITY;
        Investigation {
            id: Uuid::new_v4(),
            severity,
            remaining_ticks: total,
            total_ticks: total,
            fine: wealth_scale(INVESTIGATION_FINE_BASE * severity as i64, wealth),
            catch_chance: catch_chance(severity),
            resolved: false,
            caught: false,
        }
    }
}

/// Catch probability for a severity, in percent.
pub fn catch_chance(severity: u8) -> u8 {
    (INVESTIGATION_CATCH_BASE + severity * INVESTIGATION_CATCH_PER_SEVERITY)
        .min(INVESTIGATION_CATCH_CAP)
}

/// Severity a heat value escalates to when a periodic check fires.
pub fn severity_for_heat(heat: f64) -> u8 {
    (1 + (heat / 25.0) as u8).clamp(SEVERITY_MIN, SEVERITY_MAX)
}

/// Bounded set of active investigations plus a recent-resolved history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestigationSet {
    active: Vec<Investigation>,
    recent: Vec<Investigation>,
}

impl InvestigationSet {
    /// Spawns a new investigation unless the concurrency cap is reached.
    /// Returns the new id, or `None` when the trigger was dropped.
    pub fn spawn(&mut self, severity: u8, wealth: Money) -> Option<Uuid> {
        if self.active.len() >= MAX_ACTIVE_INVESTIGATIONS {
            tracing::debug!(severity, "investigation cap reached, dropping trigger");
            return None;
        }
        let investigation = Investigation::new(severity, wealth);
        let id = investigation.id;
        self.active.push(investigation);
        Some(id)
    }

    /// Counts every active investigation down by `delta` ticks and removes
    /// the ones that reached zero, returning them for resolution.
    pub fn advance(&mut self, delta: u64) -> Vec<Investigation> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.active.len());
        for mut inv in self.active.drain(..) {
            inv.remaining_ticks = inv.remaining_ticks.saturating_sub(delta);
            if inv.remaining_ticks == 0 {
                due.push(inv);
            } else {
                keep.push(inv);
            }
        }
        self.active = keep;
        due
    }

    /// Removes an active investigation by id for explicit resolution.
    pub fn take(&mut self, id: Uuid) -> Option<Investigation> {
        let idx = self.active.iter().position(|i| i.id == id)?;
        Some(self.active.remove(idx))
    }

    /// Removes the oldest active investigation (fixer dismissal target).
    pub fn take_oldest(&mut self) -> Option<Investigation> {
        if self.active.is_empty() {
            None
        } else {
            Some(self.active.remove(0))
        }
    }

    /// Archives a resolved investigation into the bounded history.
    pub fn archive(&mut self, mut investigation: Investigation, caught: bool) {
        investigation.resolved = true;
        investigation.caught = caught;
        investigation.remaining_ticks = 0;
        if self.recent.len() >= RECENT_INVESTIGATIONS_CAP {
            self.recent.remove(0);
        }
        self.recent.push(investigation);
    }

    pub fn active(&self) -> &[Investigation] {
        &self.active
    }

    pub fn recent(&self) -> &[Investigation] {
        &self.recent
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.recent.clear();
    }

    pub(crate) fn restore(active: Vec<Investigation>, recent: Vec<Investigation>) -> Self {
        let mut active = active;
        active.retain(|i| !i.resolved);
        active.truncate(MAX_ACTIVE_INVESTIGATIONS);
        let mut recent = recent;
        recent.truncate(RECENT_INVESTIGATIONS_CAP);
        InvestigationSet { active, recent }
    }
}
