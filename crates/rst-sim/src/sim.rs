//! The `ColonySim` struct and its tick loop.

use std::collections::BTreeMap;

use rst_core::{JobId, PawnId, SimConfig, Tick};
use rst_job::{DriverStatus, Job, JobContext, JobEnd, JobError, ReservationManager, RestrainDriver, Task};
use rst_pawn::{MentalState, PawnRngs, World};
use rst_work::{BedFinder, NearestBedFinder, RestrainWorkGiver};

use crate::observer::JobEvents;
use crate::{GridPather, SimError, SimObserver, SimResult};

/// The colony scheduler.
///
/// Owns the world and every service a restrain job consumes.  Each worker
/// runs at most one job; drivers are keyed by worker id so they are always
/// ticked in ascending id order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct ColonySim<B: BedFinder = NearestBedFinder> {
    pub config: SimConfig,

    /// The tick the next call to `run`/`run_ticks` will process.
    pub now: Tick,

    pub world: World,

    /// Per-pawn RNGs.  A worker's own stream rolls its restraint contests.
    pub rngs: PawnRngs,

    pub reservations: ReservationManager,

    pub pather: GridPather,

    pub giver: RestrainWorkGiver<B>,

    pub(crate) drivers:  BTreeMap<PawnId, RestrainDriver>,
    pub(crate) next_job: u32,
}

impl<B: BedFinder> ColonySim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Start a restrain job for `task.worker` right away, bypassing the scan.
    pub fn assign<O: SimObserver>(&mut self, task: Task, observer: &mut O) -> SimResult<JobId> {
        self.world.check_pawn(task.worker)?;
        if self.drivers.contains_key(&task.worker) {
            return Err(SimError::WorkerBusy(task.worker));
        }

        let now = self.now;
        let job = Job::new(JobId(self.next_job), task);
        let mut driver = RestrainDriver::new(job, &self.giver.def);
        {
            let mut events = JobEvents(&mut *observer);
            let mut ctx = JobContext::new(
                now,
                &mut self.world,
                &mut self.reservations,
                &mut self.pather,
                self.rngs.get_mut(task.worker),
                &mut events,
            );
            driver.start(&mut ctx)?;
        }

        self.next_job += 1;
        observer.on_job_started(now, &job);
        self.drivers.insert(task.worker, driver);
        Ok(job.id)
    }

    /// Cancel `worker`'s job, running its exit cleanup.  `None` if the worker
    /// had no job.
    pub fn cancel_job<O: SimObserver>(&mut self, worker: PawnId, observer: &mut O) -> Option<JobEnd> {
        let mut driver = self.drivers.remove(&worker)?;
        let now = self.now;
        let end = {
            let mut events = JobEvents(&mut *observer);
            let mut ctx = JobContext::new(
                now,
                &mut self.world,
                &mut self.reservations,
                &mut self.pather,
                self.rngs.get_mut(worker),
                &mut events,
            );
            driver.cancel(&mut ctx)
        };
        observer.on_job_ended(now, driver.job(), end);
        Some(end)
    }

    pub fn active_job(&self, worker: PawnId) -> Option<&RestrainDriver> {
        self.drivers.get(&worker)
    }

    pub fn active_jobs(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_idle(&self, worker: PawnId) -> bool {
        !self.drivers.contains_key(&worker)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        observer.on_tick_start(now);
        let active = self.process_tick(now, observer)?;
        observer.on_tick_end(now, active);
        self.now = now + 1;
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        // ── Phase 1: upkeep ───────────────────────────────────────────────
        self.expire_conditions(now, observer);
        self.recover_minds(now, observer);

        // ── Phase 2: movement ─────────────────────────────────────────────
        self.pather.advance(&mut self.world, now);

        // ── Phase 3: running jobs ─────────────────────────────────────────
        self.tick_drivers(now, observer);

        // ── Phase 4: hand out work ────────────────────────────────────────
        if self.config.is_scan_tick(now) {
            self.scan_idle(observer)?;
        }

        Ok(self.drivers.len())
    }

    fn expire_conditions<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for (i, set) in self.world.pawns.conditions.iter_mut().enumerate() {
            for gone in set.expire(now) {
                observer.on_condition_expired(now, PawnId(i as u32), gone.kind);
            }
        }
    }

    fn recover_minds<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let pawns = &mut self.world.pawns;
        for i in 0..pawns.count {
            if pawns.mental_recovers_at[i].is_some_and(|t| t <= now) {
                pawns.mental[i] = MentalState::None;
                pawns.mental_recovers_at[i] = None;
                observer.on_mental_recovered(now, PawnId(i as u32));
            }
        }
    }

    fn tick_drivers<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let mut ended: Vec<(PawnId, JobEnd)> = Vec::new();
        {
            let mut events = JobEvents(&mut *observer);
            for (&worker, driver) in self.drivers.iter_mut() {
                let mut ctx = JobContext::new(
                    now,
                    &mut self.world,
                    &mut self.reservations,
                    &mut self.pather,
                    self.rngs.get_mut(worker),
                    &mut events,
                );
                if let DriverStatus::Ended(end) = driver.tick(&mut ctx) {
                    ended.push((worker, end));
                }
            }
        }

        for (worker, end) in ended {
            if let Some(driver) = self.drivers.remove(&worker) {
                observer.on_job_ended(now, driver.job(), end);
            }
        }
    }

    fn scan_idle<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let idle: Vec<PawnId> = self
            .world
            .free_colonists_spawned()
            .filter(|w| !self.drivers.contains_key(w))
            .collect();
        let tasks = self.giver.scan(&idle, &self.world, &self.reservations)?;

        // Two workers may have been offered the same target; the first to
        // reserve it keeps it.
        for task in tasks {
            match self.assign(task, observer) {
                Ok(_) | Err(SimError::Job(JobError::ReservationConflict { .. })) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
