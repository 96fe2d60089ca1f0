//! Claims on pawns and beds held on behalf of jobs.
//!
//! A reservation is `(claimant, job, target)` plus the capacity the claimant
//! asked for.  A target accepts new claimants while fewer than `max_claimants`
//! distinct other pawns hold it.  Reservations are released either one by one
//! or all at once when their job ends.

use std::fmt;

use rst_core::{BedId, JobId, PawnId};

use crate::{JobError, JobResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReservationTarget {
    Pawn(PawnId),
    Bed(BedId),
}

impl fmt::Display for ReservationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationTarget::Pawn(p) => write!(f, "pawn {p}"),
            ReservationTarget::Bed(b)  => write!(f, "bed {b}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Reservation {
    claimant:      PawnId,
    job:           JobId,
    target:        ReservationTarget,
    max_claimants: u32,
}

#[derive(Default, Debug)]
pub struct ReservationManager {
    reservations: Vec<Reservation>,
}

impl ReservationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    fn other_claimants(&self, claimant: PawnId, target: ReservationTarget) -> impl Iterator<Item = PawnId> + '_ {
        let mut seen: Vec<PawnId> = Vec::new();
        self.reservations
            .iter()
            .filter(move |r| r.target == target && r.claimant != claimant)
            .filter_map(move |r| {
                if seen.contains(&r.claimant) {
                    None
                } else {
                    seen.push(r.claimant);
                    Some(r.claimant)
                }
            })
    }

    /// Whether `claimant` could take `target` with room for `max_claimants`.
    ///
    /// A claimant that already holds the target can always re-reserve it.
    pub fn can_reserve(&self, claimant: PawnId, target: ReservationTarget, max_claimants: u32) -> bool {
        self.other_claimants(claimant, target).count() < max_claimants.max(1) as usize
    }

    /// Reserve `target` for `claimant` on behalf of `job`.
    ///
    /// Reserving something the same job already holds is a no-op.
    pub fn reserve(
        &mut self,
        claimant:      PawnId,
        job:           JobId,
        target:        ReservationTarget,
        max_claimants: u32,
    ) -> JobResult<()> {
        if self.reservations.iter().any(|r| r.job == job && r.claimant == claimant && r.target == target) {
            return Ok(());
        }
        if !self.can_reserve(claimant, target, max_claimants) {
            let holder = self.other_claimants(claimant, target).next().unwrap_or(PawnId::INVALID);
            return Err(JobError::ReservationConflict { target, holder });
        }
        self.reservations.push(Reservation { claimant, job, target, max_claimants });
        Ok(())
    }

    /// Drop the reservation `job` holds on `target`.  Returns `true` if one
    /// existed.
    pub fn release(&mut self, claimant: PawnId, job: JobId, target: ReservationTarget) -> bool {
        let before = self.reservations.len();
        self.reservations
            .retain(|r| !(r.claimant == claimant && r.job == job && r.target == target));
        before != self.reservations.len()
    }

    /// Drop everything `job` holds.  Returns how many reservations went away.
    pub fn release_all_for_job(&mut self, job: JobId) -> usize {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.job != job);
        before - self.reservations.len()
    }

    pub fn is_reserved(&self, target: ReservationTarget) -> bool {
        self.reservations.iter().any(|r| r.target == target)
    }

    /// `true` if anyone other than `claimant` holds `target`.
    pub fn reserved_by_other(&self, target: ReservationTarget, claimant: PawnId) -> bool {
        self.other_claimants(claimant, target).next().is_some()
    }

    /// Every target `job` currently holds.
    pub fn held_by_job(&self, job: JobId) -> Vec<ReservationTarget> {
        self.reservations.iter().filter(|r| r.job == job).map(|r| r.target).collect()
    }

    /// Capacity the first holder of `target` asked for.
    pub fn capacity_of(&self, target: ReservationTarget) -> Option<u32> {
        self.reservations.iter().find(|r| r.target == target).map(|r| r.max_claimants)
    }
}
