//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use std::collections::BTreeMap;

use rst_core::{JobId, Tick};
use rst_job::{Job, JobEnd, JobEvent};
use rst_sim::SimObserver;

use crate::row::{EventRow, JobSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every job event and one summary per ended
/// job to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Start tick of every job that has not ended yet.
    started:    BTreeMap<JobId, Tick>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, started: BTreeMap::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Jobs started but not yet ended.
    pub fn open_jobs(&self) -> usize {
        self.started.len()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_job_started(&mut self, tick: Tick, job: &Job) {
        self.started.insert(job.id, tick);
    }

    fn on_job_event(&mut self, tick: Tick, event: &JobEvent) {
        let result = self.writer.write_event(&EventRow::from_event(tick, event));
        self.store_err(result);
    }

    fn on_job_ended(&mut self, tick: Tick, job: &Job, end: JobEnd) {
        let started = self.started.remove(&job.id).unwrap_or(tick);
        let result = self.writer.write_summary(&JobSummaryRow::new(job, started, tick, end));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
