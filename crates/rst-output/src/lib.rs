//! `rst-output` — run output writers for the restrain framework.
//!
//! | Backend | Files created                            |
//! |---------|------------------------------------------|
//! | CSV     | `job_events.csv`, `job_summaries.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rst_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rst_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, JobSummaryRow};
pub use writer::OutputWriter;
