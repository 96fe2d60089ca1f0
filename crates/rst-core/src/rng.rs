//! Deterministic per-pawn and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each pawn gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (pawn_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive pawn IDs uniformly across the seed space.  A
//! worker's contest rolls therefore depend only on the run seed and the
//! worker's own history, never on which other pawns happened to act first.
//!
//! # The `Dice` seam
//!
//! Game rules never touch `rand` directly.  They take `&mut dyn Dice`, which
//! exposes exactly the two draws the rules need: a uniform integer below a
//! bound and a uniform unit-interval float.  Tests substitute
//! [`ScriptedDice`] to force specific rolls.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PawnId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Dice ──────────────────────────────────────────────────────────────────────

/// The random-number source consumed by game rules.
pub trait Dice {
    /// Uniform integer in `[0, upper)`.  `upper == 0` yields `0`.
    fn roll_below(&mut self, upper: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

// ── PawnRng ───────────────────────────────────────────────────────────────────

/// Per-pawn deterministic RNG.
///
/// Create one per pawn at colony init and store it alongside the pawn store.
/// The type is `!Sync` to prevent accidental sharing across threads.
pub struct PawnRng(SmallRng);

impl PawnRng {
    /// Seed deterministically from the run's global seed and a pawn ID.
    pub fn new(global_seed: u64, pawn: PawnId) -> Self {
        let seed = global_seed ^ (pawn.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PawnRng(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for PawnRng {
    #[inline]
    fn roll_below(&mut self, upper: u32) -> u32 {
        if upper == 0 { 0 } else { self.0.gen_range(0..upper) }
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Free-standing seeded dice, not tied to any pawn.  Statistical contest
/// tests roll on it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for SimRng {
    #[inline]
    fn roll_below(&mut self, upper: u32) -> u32 {
        if upper == 0 { 0 } else { self.0.gen_range(0..upper) }
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedDice ──────────────────────────────────────────────────────────────

/// A [`Dice`] that replays pre-recorded draws in order.
///
/// Integer rolls are clamped into `[0, upper)` so a script written for one
/// band width stays valid for another.  Once a queue runs dry it keeps
/// returning `0` / `0.0`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    units: VecDeque<f64>,
    /// Number of `roll_below` calls served so far.
    pub rolls_taken: usize,
    /// Number of `unit` calls served so far.
    pub units_taken: usize,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer rolls.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue unit-interval draws.
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }
}

impl Dice for ScriptedDice {
    fn roll_below(&mut self, upper: u32) -> u32 {
        self.rolls_taken += 1;
        let v = self.rolls.pop_front().unwrap_or(0);
        if upper == 0 { 0 } else { v.min(upper - 1) }
    }

    fn unit(&mut self) -> f64 {
        self.units_taken += 1;
        self.units.pop_front().unwrap_or(0.0)
    }
}
