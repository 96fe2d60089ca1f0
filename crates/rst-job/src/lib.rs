//! `rst-job` — the restrain job and the state machine that executes it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`def`]         | `RestrainDef` — tunables of the job type                      |
//! | [`job`]         | `Task` (scanner output), `Job` (task + id)                    |
//! | [`toil`]        | `ToilKind`, `CompleteMode`, `Guard`, the fixed toil sequence  |
//! | [`reservation`] | `ReservationManager`, `ReservationTarget`                     |
//! | [`pather`]      | `Pather` trait, `PathTarget`, `PathEndMode`, `Danger`         |
//! | [`observer`]    | `JobEvent`, `JobObserver`, `EventLog`                         |
//! | [`context`]     | `JobContext<'a>` — everything a toil may touch                |
//! | [`custody`]     | `make_prisoner` — captive conversion                          |
//! | [`driver`]      | `RestrainDriver`, `DriverStatus`, `JobEnd`                    |
//! | [`error`]       | `JobError`, `JobResult<T>`                                    |
//!
//! # Execution model
//!
//! The scheduler owns one [`RestrainDriver`] per working pawn and calls
//! [`RestrainDriver::tick`] once per simulation tick.  A tick runs toils
//! back to back until one suspends (waiting on the pather) or the job ends.
//! Cancelling is an explicit call, never an unwinding side effect, and it runs
//! the same cleanup as a normal ending.

pub mod context;
pub mod custody;
pub mod def;
pub mod driver;
pub mod error;
pub mod job;
pub mod observer;
pub mod pather;
pub mod reservation;
pub mod toil;


pub use context::JobContext;
pub use custody::make_prisoner;
pub use def::RestrainDef;
pub use driver::{DriverStatus, FailReason, JobEnd, RestraintState, RestrainDriver};
pub use error::{JobError, JobResult};
pub use job::{Job, Task};
pub use observer::{ClamorKind, EventLog, JobEvent, JobObserver, MessageKind, NoopJobObserver};
pub use pather::{Danger, PathEndMode, PathTarget, Pather};
pub use reservation::{ReservationManager, ReservationTarget};
pub use toil::{CompleteMode, Guard, ToilKind};
