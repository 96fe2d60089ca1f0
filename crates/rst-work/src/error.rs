use rst_core::RstError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("work scan on unknown id: {0}")]
    Core(#[from] RstError),
}

pub type WorkResult<T> = Result<T, WorkError>;
