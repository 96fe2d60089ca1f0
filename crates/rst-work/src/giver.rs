//! The restrain work giver.

use rst_core::PawnId;
use rst_job::{Danger, ReservationManager, ReservationTarget, RestrainDef, Task};
use rst_pawn::World;

use crate::{BedFinder, BedQuery, NearestBedFinder, WorkResult};

/// Hands out restrain tasks to idle colonists.
///
/// Generic over the bed finder so callers can swap in their own search;
/// the default is the R-tree backed [`NearestBedFinder`].
pub struct RestrainWorkGiver<B: BedFinder = NearestBedFinder> {
    pub def:    RestrainDef,
    bed_finder: B,
}

impl RestrainWorkGiver<NearestBedFinder> {
    /// Work giver with a bed index built from `world`'s current beds.
    pub fn for_world(def: RestrainDef, world: &World) -> Self {
        Self::new(def, NearestBedFinder::new(&world.beds))
    }
}

impl<B: BedFinder> RestrainWorkGiver<B> {
    pub fn new(def: RestrainDef, bed_finder: B) -> Self {
        Self { def, bed_finder }
    }

    pub fn bed_finder(&self) -> &B {
        &self.bed_finder
    }

    pub fn bed_finder_mut(&mut self) -> &mut B {
        &mut self.bed_finder
    }

    /// Restraining is worth any path risk.
    pub fn max_path_danger(&self) -> Danger {
        Danger::Deadly
    }

    /// `true` when no spawned pawn of `worker`'s faction is in a mental
    /// state, so there is nobody to restrain.
    pub fn should_skip(&self, worker: PawnId, world: &World) -> bool {
        let faction = world.pawns.faction[worker.index()];
        !world.pawns.spawned_in_faction(faction).any(|p| world.pawns.in_mental_state(p))
    }

    /// A free colonist in its right mind and on its feet.
    pub fn can_work(&self, worker: PawnId, world: &World) -> bool {
        world.is_free_colonist(worker)
            && !world.pawns.in_mental_state(worker)
            && !world.pawns.is_downed(worker)
    }

    pub fn is_candidate(
        &self,
        worker:       PawnId,
        target:       PawnId,
        world:        &World,
        reservations: &ReservationManager,
    ) -> bool {
        let pawns = &world.pawns;
        let broken = if self.def.include_distressed_targets {
            pawns.in_mental_state(target)
        } else {
            pawns.in_aggressive_mental_state(target)
        };
        target != worker
            && broken
            && world.is_free_colonist(target)
            && !reservations.reserved_by_other(ReservationTarget::Pawn(target), worker)
    }

    /// Candidate targets for `worker`, nearest first, ties by id.
    pub fn potential_targets(
        &self,
        worker:       PawnId,
        world:        &World,
        reservations: &ReservationManager,
    ) -> Vec<PawnId> {
        let from = world.pawns.position[worker.index()];
        let mut targets: Vec<(u64, PawnId)> = world
            .free_colonists_spawned()
            .filter(|&t| self.is_candidate(worker, t, world, reservations))
            .map(|t| (from.distance_sq(world.pawns.position[t.index()]), t))
            .collect();
        targets.sort_unstable();
        targets.into_iter().map(|(_, t)| t).collect()
    }

    /// A task restraining `target`, if a bed can be found for it.
    pub fn job_on(
        &self,
        worker:       PawnId,
        target:       PawnId,
        world:        &World,
        reservations: &ReservationManager,
    ) -> Option<Task> {
        let bed = self.bed_finder.find_bed_for(target, worker, &BedQuery::RESTRAIN, world, reservations)?;
        Some(Task::new(worker, target, bed, self.def.make_target_prisoner))
    }

    /// The first restrain task available to `worker`.
    ///
    /// `Ok(None)` covers every ordinary "no work" outcome; an error means
    /// `worker` is not in the world at all.
    pub fn find_task(
        &self,
        worker:       PawnId,
        world:        &World,
        reservations: &ReservationManager,
    ) -> WorkResult<Option<Task>> {
        world.check_pawn(worker)?;
        if self.should_skip(worker, world) || !self.can_work(worker, world) {
            return Ok(None);
        }
        Ok(self
            .potential_targets(worker, world, reservations)
            .into_iter()
            .find_map(|target| self.job_on(worker, target, world, reservations)))
    }

    /// [`find_task`][Self::find_task] for several workers against one
    /// snapshot of the world.  Results keep the order of `workers`.
    ///
    /// Two workers may be offered the same target; the scheduler settles
    /// that when it makes reservations.
    pub fn scan(
        &self,
        workers:      &[PawnId],
        world:        &World,
        reservations: &ReservationManager,
    ) -> WorkResult<Vec<Task>> {
        #[cfg(not(feature = "parallel"))]
        let found: Vec<Option<Task>> = workers
            .iter()
            .map(|&w| self.find_task(w, world, reservations))
            .collect::<WorkResult<_>>()?;

        #[cfg(feature = "parallel")]
        let found: Vec<Option<Task>> = {
            use rayon::prelude::*;
            workers
                .par_iter()
                .map(|&w| self.find_task(w, world, reservations))
                .collect::<WorkResult<_>>()?
        };

        Ok(found.into_iter().flatten().collect())
    }
}
