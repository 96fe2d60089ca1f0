//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, JobSummaryRow, OutputResult};

/// Sink for job events and job summaries.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write one row for a job that has ended.
    fn write_summary(&mut self, row: &JobSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
