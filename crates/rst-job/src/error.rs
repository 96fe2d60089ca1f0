use rst_core::{PawnId, RstError};
use thiserror::Error;

use crate::ReservationTarget;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{target} is already reserved by {holder}")]
    ReservationConflict {
        target: ReservationTarget,
        holder: PawnId,
    },

    #[error("pawn {0} cannot restrain itself")]
    SelfTarget(PawnId),

    #[error("job was already started")]
    AlreadyStarted,

    #[error(transparent)]
    Core(#[from] RstError),
}

pub type JobResult<T> = Result<T, JobError>;
