//! Grid movement: one king-move step per `ticks_per_cell` ticks.
//!
//! No terrain, no obstacles.  A walking pawn heads straight for its goal
//! and stops as soon as the path end mode is satisfied.  Pawns that cannot
//! move (restrained, carried, gone) wait in place.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use rst_core::{PawnId, Tick};
use rst_job::{PathEndMode, PathTarget, Pather};
use rst_pawn::World;

#[derive(Copy, Clone, Debug)]
struct Walk {
    target:    PathTarget,
    mode:      PathEndMode,
    /// Earliest tick of the next step; `None` steps on the next advance.
    next_step: Option<Tick>,
}

pub struct GridPather {
    walks:              HashMap<PawnId, Walk>,
    pub ticks_per_cell: u64,
}

impl GridPather {
    pub fn new(ticks_per_cell: u64) -> Self {
        Self { walks: HashMap::default(), ticks_per_cell: ticks_per_cell.max(1) }
    }

    pub fn is_walking(&self, pawn: PawnId) -> bool {
        self.walks.contains_key(&pawn)
    }

    /// Number of pawns holding a path, arrived or not.
    pub fn walking(&self) -> usize {
        self.walks.len()
    }

    /// Step every pawn whose next step is due, in ascending id order.
    ///
    /// Returns the pawns that reached their goal with this step.
    pub fn advance(&mut self, world: &mut World, now: Tick) -> Vec<PawnId> {
        let mut pawns: Vec<PawnId> = self.walks.keys().copied().collect();
        pawns.sort_unstable();

        let mut arrived = Vec::new();
        for pawn in pawns {
            let Some(walk) = self.walks.get_mut(&pawn) else {
                continue;
            };
            let here = world.pawns.position[pawn.index()];
            let goal = walk.target.resolve(world);
            if walk.mode.reached(here, goal) || walk.next_step.is_some_and(|t| now < t) {
                continue;
            }
            let pawns = &world.pawns;
            if pawns.is_gone(pawn) || pawns.is_downed(pawn) || pawns.carried_by[pawn.index()].is_some() {
                continue;
            }

            let next = here.step_toward(goal);
            world.move_pawn(pawn, next);
            walk.next_step = Some(now + self.ticks_per_cell);
            if walk.mode.reached(next, goal) {
                arrived.push(pawn);
            }
        }
        arrived
    }
}

impl Pather for GridPather {
    fn start_path(&mut self, pawn: PawnId, target: PathTarget, mode: PathEndMode, _world: &World) {
        self.walks.insert(pawn, Walk { target, mode, next_step: None });
    }

    fn arrived(&self, pawn: PawnId, world: &World) -> bool {
        self.walks.get(&pawn).is_some_and(|w| {
            w.mode.reached(world.pawns.position[pawn.index()], w.target.resolve(world))
        })
    }

    fn stop(&mut self, pawn: PawnId) {
        self.walks.remove(&pawn);
    }
}
