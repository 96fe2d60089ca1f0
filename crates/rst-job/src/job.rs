//! The unit of work produced by the scanner and executed by the driver.

use rst_core::{BedId, JobId, PawnId};
use rst_pawn::World;

use crate::{JobError, JobResult};

/// What the scanner found: who restrains whom, and where they go.
///
/// Immutable once created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub worker:               PawnId,
    pub target:               PawnId,
    pub bed:                  BedId,
    pub make_target_prisoner: bool,
    /// Things to carry.  Always 1 for restrain jobs.
    pub count:                u32,
}

impl Task {
    pub fn new(worker: PawnId, target: PawnId, bed: BedId, make_target_prisoner: bool) -> Self {
        Self { worker, target, bed, make_target_prisoner, count: 1 }
    }

    /// Reject tasks whose ids do not resolve, or that point a pawn at itself.
    pub fn validate(&self, world: &World) -> JobResult<()> {
        world.check_pawn(self.worker)?;
        world.check_pawn(self.target)?;
        world.check_bed(self.bed)?;
        if self.worker == self.target {
            return Err(JobError::SelfTarget(self.worker));
        }
        Ok(())
    }
}

/// A task the scheduler has accepted and numbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub id:   JobId,
    pub task: Task,
}

impl Job {
    pub fn new(id: JobId, task: Task) -> Self {
        Self { id, task }
    }

    #[inline]
    pub fn worker(&self) -> PawnId {
        self.task.worker
    }

    #[inline]
    pub fn target(&self) -> PawnId {
        self.task.target
    }

    #[inline]
    pub fn bed(&self) -> BedId {
        self.task.bed
    }
}
