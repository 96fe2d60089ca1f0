//! Scheduler observer trait for progress reporting and data collection.

use rst_core::{PawnId, Tick};
use rst_job::{Job, JobEnd, JobEvent, JobObserver};
use rst_pawn::ConditionKind;

/// Callbacks invoked by [`ColonySim::run`][crate::ColonySim::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — job printer
///
/// ```rust,ignore
/// struct JobPrinter;
///
/// impl SimObserver for JobPrinter {
///     fn on_job_ended(&mut self, tick: Tick, job: &Job, end: JobEnd) {
///         println!("{tick}: job {} by {} ended {end}", job.id, job.worker());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of jobs still running.
    fn on_tick_end(&mut self, _tick: Tick, _active_jobs: usize) {}

    /// A job made its reservations and will run from the next tick.
    fn on_job_started(&mut self, _tick: Tick, _job: &Job) {}

    /// Every event a running job reports, as it happens.
    fn on_job_event(&mut self, _tick: Tick, _event: &JobEvent) {}

    /// A job ended and its worker is idle again.
    fn on_job_ended(&mut self, _tick: Tick, _job: &Job, _end: JobEnd) {}

    fn on_condition_expired(&mut self, _tick: Tick, _pawn: PawnId, _kind: ConditionKind) {}

    fn on_mental_recovered(&mut self, _tick: Tick, _pawn: PawnId) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forwards job events from a driver to a [`SimObserver`].
pub(crate) struct JobEvents<'o, O: SimObserver>(pub &'o mut O);

impl<O: SimObserver> JobObserver for JobEvents<'_, O> {
    fn on_event(&mut self, now: Tick, event: &JobEvent) {
        self.0.on_job_event(now, event);
    }
}
