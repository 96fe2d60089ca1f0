//! `rst-work` — deciding whether a worker has restrain work, and for whom.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`bed_finder`] | `BedFinder` trait, `BedQuery`, R-tree `NearestBedFinder`   |
//! | [`giver`]      | `RestrainWorkGiver` — colony gate, worker and target scan  |
//! | [`error`]      | `WorkError`, `WorkResult<T>`                               |
//!
//! # Scan order
//!
//! 1. Colony gate: nothing to do unless some spawned pawn of the worker's
//!    faction is in a mental state.
//! 2. Worker check: a free, sane, standing colonist.
//! 3. Candidates: broken colonists not held by another job, nearest first.
//! 4. First candidate for whom the bed finder returns a prisoner bed wins.
//!
//! The scan never mutates the world; the scheduler turns the returned
//! [`Task`][rst_job::Task] into a job and makes its reservations.

pub mod bed_finder;
pub mod error;
pub mod giver;

#[cfg(test)]
mod tests;

pub use bed_finder::{BedFinder, BedQuery, NearestBedFinder, bed_suits};
pub use error::{WorkError, WorkResult};
pub use giver::RestrainWorkGiver;
