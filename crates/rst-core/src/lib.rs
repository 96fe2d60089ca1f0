//! `rst-core` — foundational types for the `restrain` colony-job framework.
//!
//! This crate is a dependency of every other `rst-*` crate.  It intentionally
//! has no `rst-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PawnId`, `BedId`, `FactionId`, `LordId`, `JobId`     |
//! | [`cell`]        | `Cell` grid coordinate, adjacency and stepping        |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `Dice` trait, `PawnRng`, `SimRng`, `ScriptedDice`     |
//! | [`error`]       | `RstError`, `RstResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{RstError, RstResult};
pub use ids::{BedId, FactionId, JobId, LordId, PawnId};
pub use rng::{Dice, PawnRng, ScriptedDice, SimRng};
pub use time::{SimConfig, Tick};
