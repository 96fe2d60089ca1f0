//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `job_events.csv`
//! - `job_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, JobSummaryRow, OutputResult};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("job_events.csv"))?;
        events.write_record(["tick", "job", "kind", "pawn", "detail"])?;

        let mut summaries = Writer::from_path(dir.join("job_summaries.csv"))?;
        summaries.write_record(["job_id", "worker", "target", "bed", "started", "ended", "end", "reason"])?;

        Ok(Self { events, summaries, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            opt(row.job),
            row.kind.to_owned(),
            opt(row.pawn),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &JobSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.job_id.to_string(),
            row.worker.to_string(),
            row.target.to_string(),
            row.bed.to_string(),
            row.started.to_string(),
            row.ended.to_string(),
            row.end.to_owned(),
            opt(row.reason),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
