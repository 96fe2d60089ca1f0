//! `rst-contest` — the opposed skill check behind every restrain attempt.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`contestant`]  | `Contestant`, `ContestSkill`                              |
//! | [`resolve`]     | `resolve`, `opposed_check`, `success_chance`, outcomes    |
//!
//! # The check
//!
//! ```text
//! defender incapable of violence, challenger capable → success
//! challenger incapable of violence                   → failure
//! diff = defender - challenger, band = 21 + |diff|, dice ∈ [0, band)
//!   diff < 0 → success iff dice ≥ challenger
//!   diff > 0 → success iff dice < challenger
//!   diff = 0 → success iff unit draw < 0.5
//! ```
//!
//! The check runs on combat skill first.  If that fails and the defender is
//! not violently broken, it runs once more on social skill; either success
//! wins.

pub mod contestant;
pub mod resolve;


pub use contestant::{ContestSkill, Contestant};
pub use resolve::{Attempt, BASE_BAND, ContestOutcome, Roll, opposed_check, resolve, success_chance};
