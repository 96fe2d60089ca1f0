//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RstError` as one variant
//! where they need to surface a lookup failure from shared state.

use thiserror::Error;

use crate::{BedId, PawnId};

/// The top-level error type for `rst-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RstError {
    #[error("pawn {0} not found")]
    PawnNotFound(PawnId),

    #[error("bed {0} not found")]
    BedNotFound(BedId),
}

/// Shorthand result type for all `rst-*` crates.
pub type RstResult<T> = Result<T, RstError>;
