//! The shared colony world: pawns, beds, lords, and colony-wide bookkeeping.
//!
//! `World` replaces host-engine singletons (map pawn lists, the player
//! faction, the tutorial tracker) with one explicit value that the scanner
//! reads and the job driver mutates.  Operations that touch more than one
//! store live here so the cross-references (bed owners ↔ pawn ownership,
//! carrier ↔ carried) are always updated together.

use std::collections::BTreeSet;

use rst_core::{BedId, Cell, FactionId, PawnId, RstResult, Tick};

use crate::{BedStore, LordStore, MemoryKind, PawnStore};

/// One-time guidance hints surfaced to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lesson {
    /// "Captives are managed from the prisoner tab."
    PrisonerTab,
}

impl Lesson {
    pub fn as_str(self) -> &'static str {
        match self {
            Lesson::PrisonerTab => "prisoner_tab",
        }
    }
}

pub struct World {
    pub pawns:          PawnStore,
    pub beds:           BedStore,
    pub lords:          LordStore,
    /// The faction the player controls; captures are made on its behalf.
    pub player_faction: FactionId,
    lessons_taught:     BTreeSet<Lesson>,
}

impl World {
    pub fn new(pawns: PawnStore, beds: BedStore, lords: LordStore, player_faction: FactionId) -> Self {
        Self { pawns, beds, lords, player_faction, lessons_taught: BTreeSet::new() }
    }

    pub fn check_pawn(&self, pawn: PawnId) -> RstResult<()> {
        self.pawns.check(pawn)
    }

    pub fn check_bed(&self, bed: BedId) -> RstResult<()> {
        self.beds.get(bed).map(|_| ())
    }

    // ── Colony predicates ─────────────────────────────────────────────────

    #[inline]
    pub fn is_prisoner_of_colony(&self, pawn: PawnId) -> bool {
        self.pawns.is_prisoner_of(pawn, self.player_faction)
    }

    #[inline]
    pub fn is_free_colonist(&self, pawn: PawnId) -> bool {
        self.pawns.is_free_colonist(pawn, self.player_faction)
    }

    /// Spawned free colonists of the player faction, ascending id.
    pub fn free_colonists_spawned(&self) -> impl Iterator<Item = PawnId> + '_ {
        self.pawns.pawn_ids().filter(move |&p| self.is_free_colonist(p))
    }

    // ── Bed occupancy ─────────────────────────────────────────────────────

    /// The pawn lying in sleeping slot `slot` of `bed`, if any.
    pub fn occupant_of_slot(&self, bed: BedId, slot: usize) -> Option<PawnId> {
        let cell = self.beds[bed].slot_pos(slot);
        self.pawns.pawn_ids().find(|&p| {
            let i = p.index();
            self.pawns.in_bed[i] == Some(bed)
                && self.pawns.position[i] == cell
                && !self.pawns.destroyed[i]
        })
    }

    pub fn any_unoccupied_slot(&self, bed: BedId) -> bool {
        (0..self.beds[bed].slots as usize).any(|s| self.occupant_of_slot(bed, s).is_none())
    }

    /// The cell `pawn` should lie in when put into `bed`.
    ///
    /// Owners use the slot matching their claim order; a pawn already lying
    /// in the bed keeps its slot; anyone else gets the first empty slot not
    /// assigned to another owner, then any empty slot, then slot 0.
    pub fn sleeping_slot_pos_for(&self, pawn: PawnId, bed: BedId) -> Cell {
        let b = &self.beds[bed];
        let slots = b.slots as usize;

        if let Some(i) = b.owners.iter().position(|&o| o == pawn).filter(|&i| i < slots) {
            return b.slot_pos(i);
        }
        if let Some(i) = (0..slots).find(|&i| self.occupant_of_slot(bed, i) == Some(pawn)) {
            return b.slot_pos(i);
        }
        let free = |i: &usize| self.occupant_of_slot(bed, *i).is_none();
        (b.owners.len()..slots)
            .find(free)
            .or_else(|| (0..slots).find(free))
            .map_or(b.slot_pos(0), |i| b.slot_pos(i))
    }

    // ── Ownership ─────────────────────────────────────────────────────────

    /// Make `pawn` an owner of `bed` unless the bed is medical.
    ///
    /// A full bed evicts its most recent owner.  Returns `true` if `pawn`
    /// owns the bed afterwards.
    pub fn claim_bed_if_non_medical(&mut self, pawn: PawnId, bed: BedId) -> bool {
        let b = &self.beds[bed];
        if b.medical || b.destroyed || self.pawns.ownership[pawn.index()].is_none() {
            return false;
        }
        if b.is_owner(pawn) {
            return true;
        }

        self.unclaim_bed(pawn);
        if self.beds[bed].owner_slots_full() {
            if let Some(&last) = self.beds[bed].owners.last() {
                self.unclaim_bed(last);
                self.beds[bed].owners.retain(|&o| o != last);
            }
        }

        self.beds[bed].owners.push(pawn);
        if let Some(own) = self.pawns.ownership[pawn.index()].as_mut() {
            own.owned_bed = Some(bed);
        }
        true
    }

    /// Drop `pawn`'s bed claim.  Returns the bed it owned, if any.
    pub fn unclaim_bed(&mut self, pawn: PawnId) -> Option<BedId> {
        let bed = self.pawns.ownership[pawn.index()].as_mut()?.owned_bed.take()?;
        if let Some(b) = self.beds.beds.get_mut(bed.index()) {
            b.owners.retain(|&o| o != pawn);
        }
        Some(bed)
    }

    /// The bed `pawn` currently owns.
    pub fn owned_bed(&self, pawn: PawnId) -> Option<BedId> {
        self.pawns.ownership[pawn.index()].and_then(|o| o.owned_bed)
    }

    // ── Placement & hauling ───────────────────────────────────────────────

    /// Move `pawn` to `cell`, dragging anything it carries along.
    pub fn move_pawn(&mut self, pawn: PawnId, cell: Cell) {
        let i = pawn.index();
        self.pawns.position[i] = cell;
        self.pawns.in_bed[i] = None;
        if let Some(carried) = self.pawns.carrying[i] {
            self.pawns.position[carried.index()] = cell;
        }
    }

    /// `carrier` picks up `pawn`.  The carried pawn leaves the map grid.
    pub fn start_carrying(&mut self, carrier: PawnId, pawn: PawnId) {
        let (c, p) = (carrier.index(), pawn.index());
        self.pawns.carrying[c] = Some(pawn);
        self.pawns.carried_by[p] = Some(carrier);
        self.pawns.spawned[p] = false;
        self.pawns.in_bed[p] = None;
        self.pawns.position[p] = self.pawns.position[c];
    }

    /// `carrier` puts down whatever it carries at `at`.
    pub fn drop_carried(&mut self, carrier: PawnId, at: Cell) -> Option<PawnId> {
        let pawn = self.pawns.carrying[carrier.index()].take()?;
        let p = pawn.index();
        self.pawns.carried_by[p] = None;
        self.pawns.spawned[p] = !self.pawns.destroyed[p];
        self.pawns.position[p] = at;
        Some(pawn)
    }

    /// Lay `pawn` down in `bed` at its sleeping slot.
    pub fn tuck_into_bed(&mut self, pawn: PawnId, bed: BedId, now: Tick) {
        let slot = self.sleeping_slot_pos_for(pawn, bed);
        let i = pawn.index();
        self.pawns.position[i] = slot;
        self.pawns.in_bed[i] = Some(bed);
        self.pawns.last_tucked[i] = Some(now);
    }

    // ── Memories & lessons ────────────────────────────────────────────────

    /// Forget every "released a healthy prisoner" memory about `prisoner`,
    /// colony-wide.  Returns how many memories were dropped.
    pub fn remove_released_prisoner_memories(&mut self, prisoner: PawnId) -> usize {
        let mut removed = 0;
        for memories in &mut self.pawns.memories {
            let before = memories.len();
            memories.retain(|m| {
                !(m.kind == MemoryKind::ReleasedHealthyPrisoner && m.other == Some(prisoner))
            });
            removed += before - memories.len();
        }
        removed
    }

    /// Record that `lesson` was shown.  `true` only the first time.
    pub fn teach_opportunity(&mut self, lesson: Lesson) -> bool {
        self.lessons_taught.insert(lesson)
    }

    pub fn lesson_taught(&self, lesson: Lesson) -> bool {
        self.lessons_taught.contains(&lesson)
    }

    // ── Destruction ───────────────────────────────────────────────────────

    pub fn destroy_pawn(&mut self, pawn: PawnId) {
        let i = pawn.index();
        self.pawns.destroyed[i] = true;
        self.pawns.spawned[i] = false;
        self.pawns.in_bed[i] = None;
    }

    pub fn destroy_bed(&mut self, bed: BedId) {
        self.beds[bed].destroyed = true;
        for p in self.pawns.pawn_ids().collect::<Vec<_>>() {
            if self.pawns.in_bed[p.index()] == Some(bed) {
                self.pawns.in_bed[p.index()] = None;
            }
        }
    }
}
