use thiserror::Error;

#[derive(Debug, Error)]
pub enum PawnError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("roster CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PawnResult<T> = Result<T, PawnError>;
