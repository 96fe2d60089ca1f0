//! `rst-sim` — the colony scheduler that drives restrain jobs.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Upkeep   — drop expired conditions; end mental states that are due.
//!   ② Movement — GridPather steps every walking pawn that is due.
//!   ③ Jobs     — tick each active RestrainDriver in ascending worker id;
//!                ended jobs are removed and reported.
//!   ④ Scan     — on scan ticks, offer work to every idle free colonist
//!                (parallel with the `parallel` feature) and start the
//!                returned tasks in ascending worker id.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the work scan on Rayon's thread pool.             |
//! | `fx-hash`  | FxHash for the pather's walk table.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rst_core::{FactionId, SimConfig};
//! use rst_pawn::load_roster_csv;
//! use rst_sim::{NoopObserver, SimBuilder};
//!
//! let roster = load_roster_csv("colony.csv".as_ref())?;
//! let (world, rngs) = roster.into_world(config.seed, FactionId(0));
//! let mut sim = SimBuilder::new(config, world, rngs).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pather;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pather::GridPather;
pub use sim::ColonySim;
