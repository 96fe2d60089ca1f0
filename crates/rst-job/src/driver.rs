//! The restrain job state machine.
//!
//! A [`RestrainDriver`] walks [`ToilKind::SEQUENCE`] one toil at a time.
//! Before a toil is entered its guard may skip it or fail the job; once
//! entered, its enter action runs exactly once and a travel toil then waits
//! for the pather.  Job-wide fail conditions are re-checked before every
//! step.  However the job ends, the same cleanup runs once.

use std::fmt;

use rst_contest::{Contestant, resolve};
use rst_core::PawnId;
use rst_pawn::{Condition, ConditionKind, Lesson, PawnStore, PlayerSettings, World};

use crate::{
    CompleteMode, Guard, Job, JobContext, JobError, JobEvent, JobResult, MessageKind, PathEndMode,
    PathTarget, RestrainDef, ReservationManager, ReservationTarget, ToilKind, make_prisoner,
};

/// Why a job could not be completed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailReason {
    WorkerGone,
    TargetGone,
    BedGone,
    /// The job takes prisoners but the bed stopped being a prisoner bed.
    BedNotForPrisoners,
    /// The target does not own the non-medical bed it is about to be
    /// carried to.
    BedNotOwned,
    /// Pre-toil reservations could not be made.
    ReservationFailed,
}

impl FailReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FailReason::WorkerGone         => "worker_gone",
            FailReason::TargetGone         => "target_gone",
            FailReason::BedGone            => "bed_gone",
            FailReason::BedNotForPrisoners => "bed_not_for_prisoners",
            FailReason::BedNotOwned        => "bed_not_owned",
            FailReason::ReservationFailed  => "reservation_failed",
        }
    }
}

/// How a job ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobEnd {
    Succeeded,
    Incompletable(FailReason),
    /// The target won the restraint contest.
    Interrupted,
    /// Stopped from outside.
    Cancelled,
}

impl JobEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            JobEnd::Succeeded        => "succeeded",
            JobEnd::Incompletable(_) => "incompletable",
            JobEnd::Interrupted      => "interrupted",
            JobEnd::Cancelled        => "cancelled",
        }
    }

    pub fn reason(self) -> Option<FailReason> {
        match self {
            JobEnd::Incompletable(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for JobEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobEnd::Incompletable(r) => write!(f, "incompletable ({})", r.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Result of one [`RestrainDriver::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverStatus {
    /// Waiting inside this toil; tick again later.
    Running(ToilKind),
    Ended(JobEnd),
}

/// Whether the job's `Restrained` condition is on the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RestraintState {
    #[default]
    NotApplied,
    Applied,
    Removed,
}

pub struct RestrainDriver {
    job:                    Job,
    annoyed_duration_ticks: u64,
    clamor_radius:          f32,

    cursor:    usize,
    entered:   bool,
    started:   bool,
    restraint: RestraintState,
    executed:  Vec<ToilKind>,
    end:       Option<JobEnd>,
}

impl RestrainDriver {
    pub fn new(job: Job, def: &RestrainDef) -> Self {
        Self {
            job,
            annoyed_duration_ticks: def.annoyed_duration_ticks,
            clamor_radius:          def.clamor_radius,
            cursor:                 0,
            entered:                false,
            started:                false,
            restraint:              RestraintState::NotApplied,
            executed:               Vec::with_capacity(ToilKind::SEQUENCE.len()),
            end:                    None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// The toil the job is in, or `None` before start and after the end.
    pub fn current_toil(&self) -> Option<ToilKind> {
        if !self.started || self.end.is_some() {
            return None;
        }
        ToilKind::SEQUENCE.get(self.cursor).copied()
    }

    /// Toils entered so far, in order.  Skipped toils are absent.
    pub fn executed(&self) -> &[ToilKind] {
        &self.executed
    }

    pub fn end(&self) -> Option<JobEnd> {
        self.end
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.end.is_some()
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn restraint_state(&self) -> RestraintState {
        self.restraint
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Reserve the target (one claimant) and then the bed (one claimant per
    /// sleeping slot).  On failure nothing stays reserved.
    pub fn try_make_pre_toil_reservations(
        &self,
        reservations: &mut ReservationManager,
        world:        &World,
    ) -> JobResult<()> {
        let (worker, id) = (self.job.worker(), self.job.id);
        let target = ReservationTarget::Pawn(self.job.target());
        let bed = ReservationTarget::Bed(self.job.bed());

        reservations.reserve(worker, id, target, 1)?;
        let slots = world.beds.get(self.job.bed())?.slots as u32;
        if let Err(e) = reservations.reserve(worker, id, bed, slots) {
            reservations.release(worker, id, target);
            return Err(e);
        }
        Ok(())
    }

    /// Validate the job and make its reservations.  The job does not run if
    /// this fails.
    pub fn start(&mut self, ctx: &mut JobContext<'_>) -> JobResult<()> {
        if self.started || self.end.is_some() {
            return Err(JobError::AlreadyStarted);
        }
        self.job.task.validate(ctx.world)?;
        self.try_make_pre_toil_reservations(ctx.reservations, ctx.world)?;
        self.started = true;
        ctx.emit(JobEvent::Started {
            job:    self.job.id,
            worker: self.job.worker(),
            target: self.job.target(),
            bed:    self.job.bed(),
        });
        Ok(())
    }

    /// Run toils until one waits on the pather or the job ends.
    ///
    /// A driver that was never started is started first; if that fails the
    /// job ends as `Incompletable(ReservationFailed)` without cleanup.
    pub fn tick(&mut self, ctx: &mut JobContext<'_>) -> DriverStatus {
        if let Some(end) = self.end {
            return DriverStatus::Ended(end);
        }
        if !self.started && self.start(ctx).is_err() {
            let end = JobEnd::Incompletable(FailReason::ReservationFailed);
            self.end = Some(end);
            return DriverStatus::Ended(end);
        }

        loop {
            let Some(&toil) = ToilKind::SEQUENCE.get(self.cursor) else {
                return self.finish(ctx, JobEnd::Succeeded);
            };
            if let Some(reason) = self.fail_condition(ctx.world) {
                return self.finish(ctx, JobEnd::Incompletable(reason));
            }

            if !self.entered {
                match self.guard(toil, ctx.world) {
                    Ok(Guard::Proceed) => {}
                    Ok(Guard::Skip) => {
                        self.cursor += 1;
                        continue;
                    }
                    Err(reason) => return self.finish(ctx, JobEnd::Incompletable(reason)),
                }
                self.entered = true;
                self.executed.push(toil);
                ctx.emit(JobEvent::ToilEntered { job: self.job.id, toil });
                if let Err(end) = self.enter(toil, ctx) {
                    return self.finish(ctx, end);
                }
            }

            if toil.complete_mode() == CompleteMode::PatherArrival
                && !ctx.pather.arrived(self.job.worker(), ctx.world)
            {
                return DriverStatus::Running(toil);
            }
            self.cursor += 1;
            self.entered = false;
        }
    }

    /// Stop the job from outside.  Runs the exit cleanup unless the job has
    /// already ended, in which case the earlier ending is returned.
    pub fn cancel(&mut self, ctx: &mut JobContext<'_>) -> JobEnd {
        if let Some(end) = self.end {
            return end;
        }
        if !self.started {
            self.end = Some(JobEnd::Cancelled);
            return JobEnd::Cancelled;
        }
        self.finish(ctx, JobEnd::Cancelled);
        JobEnd::Cancelled
    }

    // ── Conditions ────────────────────────────────────────────────────────

    fn fail_condition(&self, world: &World) -> Option<FailReason> {
        if world.pawns.is_gone(self.job.worker()) {
            return Some(FailReason::WorkerGone);
        }
        if world.pawns.is_gone(self.job.target()) {
            return Some(FailReason::TargetGone);
        }
        if world.beds.is_gone(self.job.bed()) {
            return Some(FailReason::BedGone);
        }
        if self.job.task.make_target_prisoner && !world.beds[self.job.bed()].for_prisoners {
            return Some(FailReason::BedNotForPrisoners);
        }
        None
    }

    fn guard(&self, toil: ToilKind, world: &World) -> Result<Guard, FailReason> {
        let bed = &world.beds[self.job.bed()];
        match toil {
            ToilKind::ClaimBed if bed.medical => Ok(Guard::Skip),
            ToilKind::MakePrisoner if !self.job.task.make_target_prisoner => Ok(Guard::Skip),
            ToilKind::StartCarry if !bed.medical && !bed.is_owner(self.job.target()) => {
                Err(FailReason::BedNotOwned)
            }
            _ => Ok(Guard::Proceed),
        }
    }

    // ── Enter actions ─────────────────────────────────────────────────────

    fn enter(&mut self, toil: ToilKind, ctx: &mut JobContext<'_>) -> Result<(), JobEnd> {
        let (worker, target, bed) = (self.job.worker(), self.job.target(), self.job.bed());
        match toil {
            ToilKind::ClaimBed => {
                if ctx.world.claim_bed_if_non_medical(target, bed) {
                    ctx.emit(JobEvent::BedClaimed { pawn: target, bed });
                }
            }
            ToilKind::GotoTarget => {
                ctx.pather.start_path(worker, PathTarget::Pawn(target), PathEndMode::Touch, ctx.world);
            }
            ToilKind::ApplyRestraint => return self.apply_restraint(ctx),
            ToilKind::MakePrisoner => {
                make_prisoner(ctx, &self.job, self.clamor_radius);
            }
            ToilKind::StartCarry => ctx.world.start_carrying(worker, target),
            ToilKind::GotoBed => {
                let goal = ctx.world.beds[bed].position;
                ctx.pather.start_path(worker, PathTarget::Cell(goal), PathEndMode::Touch, ctx.world);
            }
            ToilKind::SecureCustody => {
                make_prisoner(ctx, &self.job, self.clamor_radius);
                let settings = &mut ctx.world.pawns.player_settings[target.index()];
                if settings.is_none() {
                    *settings = Some(PlayerSettings::default());
                }
            }
            ToilKind::ReleaseBed => {
                ctx.reservations.release(worker, self.job.id, ReservationTarget::Bed(bed));
            }
            ToilKind::TuckIntoBed => self.tuck_into_bed(ctx),
        }
        Ok(())
    }

    fn apply_restraint(&mut self, ctx: &mut JobContext<'_>) -> Result<(), JobEnd> {
        let (worker, target) = (self.job.worker(), self.job.target());
        let pawns = &ctx.world.pawns;
        let challenger = contestant(pawns, worker);
        let defender = contestant(pawns, target);
        let aggressive = pawns.in_aggressive_mental_state(target);
        let (worker_name, target_name) = (pawns.label(worker), pawns.label(target));

        let outcome = resolve(&challenger, &defender, aggressive, &mut *ctx.dice);
        ctx.emit(JobEvent::ContestRolled { job: self.job.id, worker, target, outcome });

        if !outcome.succeeded() {
            ctx.emit(JobEvent::Message {
                job:  self.job.id,
                kind: MessageKind::Negative,
                text: format!("{worker_name} failed to restrain {target_name}."),
            });
            return Err(JobEnd::Interrupted);
        }

        let now = ctx.now;
        let conditions = &mut ctx.world.pawns.conditions[target.index()];
        conditions.add(Condition::permanent(ConditionKind::Restrained, now));
        conditions.add(Condition::timed(ConditionKind::Annoyed, now, self.annoyed_duration_ticks));
        self.restraint = RestraintState::Applied;

        ctx.emit(JobEvent::ConditionAdded { pawn: target, kind: ConditionKind::Restrained });
        ctx.emit(JobEvent::ConditionAdded { pawn: target, kind: ConditionKind::Annoyed });
        ctx.emit(JobEvent::Message {
            job:  self.job.id,
            kind: MessageKind::Positive,
            text: format!("{worker_name} restrained {target_name}."),
        });
        Ok(())
    }

    fn tuck_into_bed(&mut self, ctx: &mut JobContext<'_>) {
        let (worker, target, bed) = (self.job.worker(), self.job.target(), self.job.bed());
        let drop_at = ctx.world.beds[bed].position;
        ctx.world.drop_carried(worker, drop_at);

        let b = &ctx.world.beds[bed];
        let tuck = !b.destroyed
            && (b.is_owner(target)
                || (b.medical && ctx.world.any_unoccupied_slot(bed))
                || ctx.world.pawns.ownership[target.index()].is_none());
        if tuck {
            ctx.world.tuck_into_bed(target, bed, ctx.now);
            ctx.emit(JobEvent::TuckedIntoBed { pawn: target, bed });
        }

        if ctx.world.is_prisoner_of_colony(target) && ctx.world.teach_opportunity(Lesson::PrisonerTab) {
            ctx.emit(JobEvent::LessonOpportunity { lesson: Lesson::PrisonerTab, pawn: target });
        }
        self.remove_restraint(ctx);
    }

    // ── Exit ──────────────────────────────────────────────────────────────

    fn remove_restraint(&mut self, ctx: &mut JobContext<'_>) {
        if self.restraint != RestraintState::Applied {
            return;
        }
        self.restraint = RestraintState::Removed;
        let target = self.job.target();
        if ctx.world.pawns.conditions[target.index()].remove(ConditionKind::Restrained).is_some() {
            ctx.emit(JobEvent::ConditionRemoved { pawn: target, kind: ConditionKind::Restrained });
        }
    }

    fn cleanup(&mut self, ctx: &mut JobContext<'_>) {
        let (worker, target, bed) = (self.job.worker(), self.job.target(), self.job.bed());

        let here = ctx.world.pawns.position[worker.index()];
        ctx.world.drop_carried(worker, here);
        ctx.pather.stop(worker);

        if self.job.task.make_target_prisoner
            && ctx.world.pawns.position[target.index()] != ctx.world.sleeping_slot_pos_for(target, bed)
        {
            if let Some(unclaimed) = ctx.world.unclaim_bed(target) {
                ctx.emit(JobEvent::BedUnclaimed { pawn: target, bed: unclaimed });
            }
        }

        self.remove_restraint(ctx);
        ctx.reservations.release_all_for_job(self.job.id);
    }

    fn finish(&mut self, ctx: &mut JobContext<'_>, end: JobEnd) -> DriverStatus {
        self.cleanup(ctx);
        self.end = Some(end);
        ctx.emit(JobEvent::Ended { job: self.job.id, end });
        DriverStatus::Ended(end)
    }
}

fn contestant(pawns: &PawnStore, pawn: PawnId) -> Contestant {
    let i = pawn.index();
    let skills = pawns.skills[i];
    let c = Contestant::new(skills.melee, skills.social);
    if pawns.incapable_of_violence[i] { c.incapable() } else { c }
}
