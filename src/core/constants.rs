//! Balance constants for the underground-market engine.
//!
//! All tunable numbers live here. Change once, test everywhere.

#![allow(dead_code)]

// =============================================================================
// HEAT: bounded suspicion accumulator
// =============================================================================

/// Heat is clamped to [0, MAX_HEAT] at every mutation.
pub const MAX_HEAT: f64 = 100.0;

/// Passive heat decay applied every tick (floor at 0).
pub const HEAT_DECAY_PER_TICK: f64 = 0.02;

/// Base heat added by a successful deal; scaled by `risk / 50`.
pub const HEAT_PER_DEAL_BASE: f64 = 5.0;

/// Flat heat added by a failed deal (on top of fired consequences).
pub const HEAT_ON_FAILURE: f64 = 12.0;

/// Heat added by a contact betrayal.
pub const HEAT_ON_BETRAYAL: f64 = 15.0;

/// Small heat tick for every successful ability use.
pub const HEAT_PER_ABILITY: f64 = 1.0;

/// Heat spike per severity point when an investigation catches the player.
pub const HEAT_PER_CAUGHT_SEVERITY: f64 = 5.0;

/// Heat relief for dodging an investigation.
pub const HEAT_RELIEF_ON_DODGE: f64 = 2.0;

// =============================================================================
// DEAL ROTATION & GENERATION
// =============================================================================

/// Ticks between deal rotations, drawn from this range so the timing
/// cannot be gamed by watching the clock.
pub const ROTATION_INTERVAL_MIN: u64 = 240;
pub const ROTATION_INTERVAL_MAX: u64 = 420;

/// Lifetime of a generated deal before it expires, drawn per deal.
pub const DEAL_LIFETIME_MIN: u64 = 180;
pub const DEAL_LIFETIME_MAX: u64 = 600;

/// Bounds on how many deals a rotation offers, before tier scaling.
pub const MIN_DEALS_PER_ROTATION: usize = 2;
pub const MAX_DEALS_PER_ROTATION: usize = 6;

/// Attempts at drawing a non-duplicate template before giving up.
/// The pool can be smaller than the slot count at low tiers.
pub const DUPLICATE_DRAW_ATTEMPTS: u32 = 10;

/// Random variance added to a template's base risk, in percent points.
pub const RISK_VARIANCE: i32 = 5;

/// Risk clamp after variance, tier reduction and heat increase.
pub const RISK_MIN: u8 = 1;
pub const RISK_MAX: u8 = 95;

/// XP fraction granted for a failed deal.
pub const PARTIAL_XP_FRACTION: f64 = 0.30;

// =============================================================================
// WEALTH SCALING
// =============================================================================

/// Net worth at which catalog base values apply unscaled. Below this the
/// factor stays 1.0 so early-game numbers match the catalog.
pub const WEALTH_REFERENCE: f64 = 50_000.0;

/// Sub-linear exponent keeps late-game values growing with wealth without
/// outpacing it.
pub const WEALTH_SCALE_EXPONENT: f64 = 0.85;

/// Hard ceiling on the wealth factor for degenerate saves.
pub const WEALTH_FACTOR_CAP: f64 = 100_000.0;

// =============================================================================
// INVESTIGATIONS
// =============================================================================

/// Max concurrently active investigations; extra triggers are dropped.
pub const MAX_ACTIVE_INVESTIGATIONS: usize = 3;

/// Resolved investigations kept for the UI before pruning.
pub const RECENT_INVESTIGATIONS_CAP: usize = 5;

/// Countdown length: base plus a per-severity increment.
pub const INVESTIGATION_BASE_TICKS: u64 = 120;
pub const INVESTIGATION_TICKS_PER_SEVERITY: u64 = 60;

/// Fine base per severity point, wealth-scaled at spawn time.
pub const INVESTIGATION_FINE_BASE: i64 = 2_000;

/// Catch chance: base percent plus a per-severity increment, capped.
pub const INVESTIGATION_CATCH_BASE: u8 = 20;
pub const INVESTIGATION_CATCH_PER_SEVERITY: u8 = 10;
pub const INVESTIGATION_CATCH_CAP: u8 = 75;

/// Periodic heat-driven investigation roll happens every this many ticks.
pub const INVESTIGATION_CHECK_INTERVAL: u64 = 300;

// =============================================================================
// CONTACTS & LOYALTY
// =============================================================================

/// Loyalty a fresh relationship starts with.
pub const LOYALTY_INITIAL: u32 = 10;

/// Passive loyalty recovery: amount and tick interval.
pub const LOYALTY_HEAL_AMOUNT: u32 = 1;
pub const LOYALTY_HEAL_INTERVAL: u64 = 600;

/// Loyalty lost to a betrayal / a scam.
pub const LOYALTY_LOSS_BETRAYAL: u32 = 30;
pub const LOYALTY_LOSS_SCAM: u32 = 10;

/// Daily-use counters reset on this tick cycle, independent of wall time.
pub const DAILY_CYCLE_TICKS: u64 = 1_800;

/// XP for a successfully executed ability.
pub const ABILITY_XP: u64 = 5;

// Betrayal/scam probability curves. Both rise with heat and fall with
// loyalty; see `core::scaling`.
pub const BETRAYAL_BASE_CHANCE: f64 = 0.01;
pub const BETRAYAL_PER_HEAT: f64 = 0.0008;
pub const BETRAYAL_PER_LOYALTY: f64 = 0.0005;
pub const BETRAYAL_CHANCE_CAP: f64 = 0.25;

pub const SCAM_BASE_CHANCE: f64 = 0.02;
pub const SCAM_PER_HEAT: f64 = 0.0006;
pub const SCAM_PER_LOYALTY: f64 = 0.0008;
pub const SCAM_CHANCE_CAP: f64 = 0.30;

// Price tips: accuracy grows with loyalty.
pub const TIP_BASE_ACCURACY: f64 = 0.55;
pub const TIP_ACCURACY_PER_LOYALTY: f64 = 0.004;
pub const TIP_ACCURACY_CAP: f64 = 0.95;

// =============================================================================
// EFFECTS & LOG
// =============================================================================

/// Max concurrently active timed effects; extras are silently dropped.
pub const MAX_ACTIVE_EFFECTS: usize = 8;

/// Aggregate effect multipliers never drop below this floor.
pub const EFFECT_MULTIPLIER_FLOOR: f64 = 0.1;

/// Activity log ring-buffer capacity.
pub const ACTIVITY_LOG_CAP: usize = 50;
