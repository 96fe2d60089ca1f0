//! Core pawn storage: `PawnStore` (SoA data) and `PawnRngs` (per-pawn RNG).
//!
//! # Why two structs?
//!
//! The scheduler needs `&mut PawnRngs` (a worker's own dice) while the job
//! driver also holds `&mut World` for the same tick.  Keeping RNGs out of the
//! world lets both borrows coexist without interior mutability.

use rst_core::{BedId, Cell, FactionId, LordId, PawnId, PawnRng, RstError, RstResult, Tick};

use crate::{ConditionSet, GuestStatus, Memory, MentalState, Ownership, PlayerSettings, Skills};

// ── PawnRngs ──────────────────────────────────────────────────────────────────

/// Per-pawn deterministic RNG state, separated from [`PawnStore`] for the
/// split-borrow pattern.
pub struct PawnRngs {
    pub inner: Vec<PawnRng>,
}

impl PawnRngs {
    /// Allocate and seed `count` per-pawn RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| PawnRng::new(global_seed, PawnId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one pawn's RNG.
    #[inline]
    pub fn get_mut(&mut self, pawn: PawnId) -> &mut PawnRng {
        &mut self.inner[pawn.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PawnStore ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all pawn state.
///
/// Every `Vec` field has exactly `count` elements; the `PawnId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[pawn.index()];
/// ```
///
/// Pawns are never removed; destroyed pawns keep their slot with
/// `destroyed = true` so ids held by in-flight jobs stay valid.
pub struct PawnStore {
    /// Number of pawns.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Identity ──────────────────────────────────────────────────────────
    pub name:    Vec<String>,
    pub faction: Vec<FactionId>,

    // ── Presence ──────────────────────────────────────────────────────────
    /// Current cell.  A carried pawn's cell tracks its carrier.
    pub position:  Vec<Cell>,
    /// `false` while carried or off-map.
    pub spawned:   Vec<bool>,
    pub destroyed: Vec<bool>,

    // ── Capabilities ──────────────────────────────────────────────────────
    pub skills:                Vec<Skills>,
    pub incapable_of_violence: Vec<bool>,
    pub conditions:            Vec<ConditionSet>,

    // ── Mind ──────────────────────────────────────────────────────────────
    pub mental:             Vec<MentalState>,
    /// Tick at which the current break ends on its own.  `None` = only
    /// external intervention ends it.
    pub mental_recovers_at: Vec<Option<Tick>>,
    /// Last time the pawn was tucked into a bed by someone else.
    pub last_tucked:        Vec<Option<Tick>>,
    pub memories:           Vec<Vec<Memory>>,

    // ── Social / custody ──────────────────────────────────────────────────
    pub guest:           Vec<GuestStatus>,
    pub ownership:       Vec<Option<Ownership>>,
    pub player_settings: Vec<Option<PlayerSettings>>,
    pub lord:            Vec<Option<LordId>>,
    pub quest_tags:      Vec<Vec<String>>,

    // ── Hauling / rest ────────────────────────────────────────────────────
    pub carried_by: Vec<Option<PawnId>>,
    pub carrying:   Vec<Option<PawnId>>,
    /// Bed the pawn is lying in.
    pub in_bed:     Vec<Option<BedId>>,
}

impl PawnStore {
    /// `true` if there are no pawns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PawnId`s in ascending index order.
    pub fn pawn_ids(&self) -> impl Iterator<Item = PawnId> + '_ {
        (0..self.count as u32).map(PawnId)
    }

    #[inline]
    pub fn contains(&self, pawn: PawnId) -> bool {
        pawn.index() < self.count
    }

    /// `Err(PawnNotFound)` for ids outside the store.
    pub fn check(&self, pawn: PawnId) -> RstResult<()> {
        if self.contains(pawn) { Ok(()) } else { Err(RstError::PawnNotFound(pawn)) }
    }

    // ── Derived predicates ────────────────────────────────────────────────

    /// Gone from the world: destroyed, or neither spawned nor carried.
    pub fn is_gone(&self, pawn: PawnId) -> bool {
        let i = pawn.index();
        self.destroyed[i] || (!self.spawned[i] && self.carried_by[i].is_none())
    }

    #[inline]
    pub fn in_mental_state(&self, pawn: PawnId) -> bool {
        self.mental[pawn.index()].is_broken()
    }

    #[inline]
    pub fn in_aggressive_mental_state(&self, pawn: PawnId) -> bool {
        self.mental[pawn.index()].is_aggressive()
    }

    #[inline]
    pub fn is_prisoner(&self, pawn: PawnId) -> bool {
        self.guest[pawn.index()].is_prisoner()
    }

    /// Prisoner held by `faction`.
    #[inline]
    pub fn is_prisoner_of(&self, pawn: PawnId, faction: FactionId) -> bool {
        self.guest[pawn.index()].host() == Some(faction)
    }

    /// Cannot stand: restrained or otherwise unable to move.
    #[inline]
    pub fn is_downed(&self, pawn: PawnId) -> bool {
        !self.conditions[pawn.index()].can_move()
    }

    /// A spawned, living, non-captive member of `faction`.
    pub fn is_free_colonist(&self, pawn: PawnId, faction: FactionId) -> bool {
        let i = pawn.index();
        self.faction[i] == faction
            && self.spawned[i]
            && !self.destroyed[i]
            && !self.guest[i].is_prisoner()
    }

    /// Spawned, living pawns of `faction` (captives included).
    pub fn spawned_in_faction(&self, faction: FactionId) -> impl Iterator<Item = PawnId> + '_ {
        self.pawn_ids().filter(move |&p| {
            let i = p.index();
            self.faction[i] == faction && self.spawned[i] && !self.destroyed[i]
        })
    }

    /// Display name, or the id when the pawn is unnamed.
    pub fn label(&self, pawn: PawnId) -> String {
        match self.name.get(pawn.index()) {
            Some(n) if !n.is_empty() => n.clone(),
            _ => pawn.to_string(),
        }
    }

    // ── Package-private constructor used by PawnStoreBuilder ──────────────

    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            count:                 0,
            name:                  Vec::with_capacity(count),
            faction:               Vec::with_capacity(count),
            position:              Vec::with_capacity(count),
            spawned:               Vec::with_capacity(count),
            destroyed:             Vec::with_capacity(count),
            skills:                Vec::with_capacity(count),
            incapable_of_violence: Vec::with_capacity(count),
            conditions:            Vec::with_capacity(count),
            mental:                Vec::with_capacity(count),
            mental_recovers_at:    Vec::with_capacity(count),
            last_tucked:           Vec::with_capacity(count),
            memories:              Vec::with_capacity(count),
            guest:                 Vec::with_capacity(count),
            ownership:             Vec::with_capacity(count),
            player_settings:       Vec::with_capacity(count),
            lord:                  Vec::with_capacity(count),
            quest_tags:            Vec::with_capacity(count),
            carried_by:            Vec::with_capacity(count),
            carrying:              Vec::with_capacity(count),
            in_bed:                Vec::with_capacity(count),
        }
    }
}
