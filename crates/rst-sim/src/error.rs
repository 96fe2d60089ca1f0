use rst_core::{PawnId, RstError};
use rst_job::JobError;
use rst_work::WorkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match pawn count {expected}")]
    PawnCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("pawn {0} already has a job")]
    WorkerBusy(PawnId),

    #[error("job could not start: {0}")]
    Job(#[from] JobError),

    #[error("work scan failed: {0}")]
    Work(#[from] WorkError),

    #[error(transparent)]
    Core(#[from] RstError),
}

pub type SimResult<T> = Result<T, SimError>;
