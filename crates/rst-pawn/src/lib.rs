//! `rst-pawn` — colony world storage for the restrain framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`skills`]      | `Skills`, `SKILL_MAX`                                         |
//! | [`mental`]      | `MentalState`                                                 |
//! | [`condition`]   | `ConditionKind`, `Condition`, `ConditionSet`                  |
//! | [`custody`]     | `GuestStatus`, `PrisonerRecord`, `InteractionMode`, memories  |
//! | [`store`]       | `PawnStore` (SoA arrays), `PawnRngs` (per-pawn RNG)           |
//! | [`builder`]     | `PawnSpec`, `PawnStoreBuilder`                                |
//! | [`bed`]         | `Bed`, `BedStore`                                             |
//! | [`lord`]        | `Lord`, `LordStore`                                           |
//! | [`world`]       | `World` — pawns + beds + lords + colony-wide bookkeeping      |
//! | [`loader`]      | `load_roster_csv`, `load_roster_reader`                       |
//! | [`error`]       | `PawnError`, `PawnResult<T>`                                  |
//!
//! Everything the job layer mutates lives in [`World`] and is passed in
//! explicitly; there are no global registries.

pub mod bed;
pub mod builder;
pub mod condition;
pub mod custody;
pub mod error;
pub mod loader;
pub mod lord;
pub mod mental;
pub mod skills;
pub mod store;
pub mod world;


pub use bed::{Bed, BedStore};
pub use builder::{PawnSpec, PawnStoreBuilder};
pub use condition::{Condition, ConditionKind, ConditionSet};
pub use custody::{
    GuestStatus, INITIAL_RESISTANCE, InteractionMode, MedicalCare, Memory, MemoryKind, Ownership,
    PlayerSettings, PrisonerRecord,
};
pub use error::{PawnError, PawnResult};
pub use loader::{Roster, load_roster_csv, load_roster_reader};
pub use lord::{Lord, LordStore};
pub use mental::MentalState;
pub use skills::{SKILL_MAX, Skills};
pub use store::{PawnRngs, PawnStore};
pub use world::{Lesson, World};
