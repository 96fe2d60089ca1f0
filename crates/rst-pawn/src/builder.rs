//! Fluent construction of `PawnStore` + `PawnRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use rst_core::{Cell, FactionId};
//! use rst_pawn::{MentalState, PawnSpec, PawnStoreBuilder};
//!
//! let (store, rngs) = PawnStoreBuilder::new(/*seed=*/ 42)
//!     .pawn(PawnSpec::colonist("Ada", FactionId(0), Cell::new(0, 0)).melee(9))
//!     .pawn(PawnSpec::colonist("Bo", FactionId(0), Cell::new(4, 1))
//!         .mental(MentalState::AggressiveViolent))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use rst_core::{Cell, FactionId, LordId, PawnId, Tick};

use crate::{
    ConditionSet, GuestStatus, MentalState, Ownership, PawnRngs, PawnStore, PlayerSettings, Skills,
};

/// Initial state of one pawn.
#[derive(Clone, Debug)]
pub struct PawnSpec {
    pub name:                  String,
    pub faction:               FactionId,
    pub position:              Cell,
    pub skills:                Skills,
    pub incapable_of_violence: bool,
    pub mental:                MentalState,
    pub mental_recovers_at:    Option<Tick>,
    pub guest:                 GuestStatus,
    /// `false` models pawns without an ownership tracker.
    pub has_ownership:         bool,
    pub has_player_settings:   bool,
    pub lord:                  Option<LordId>,
    pub quest_tags:            Vec<String>,
}

impl PawnSpec {
    /// A sane, free, skill-0 colonist with ownership and player settings.
    pub fn colonist(name: impl Into<String>, faction: FactionId, position: Cell) -> Self {
        Self {
            name: name.into(),
            faction,
            position,
            skills:                Skills::default(),
            incapable_of_violence: false,
            mental:                MentalState::None,
            mental_recovers_at:    None,
            guest:                 GuestStatus::Free,
            has_ownership:         true,
            has_player_settings:   true,
            lord:                  None,
            quest_tags:            Vec::new(),
        }
    }

    pub fn melee(mut self, level: i32) -> Self {
        self.skills = Skills::new(level, self.skills.social);
        self
    }

    pub fn social(mut self, level: i32) -> Self {
        self.skills = Skills::new(self.skills.melee, level);
        self
    }

    pub fn incapable_of_violence(mut self) -> Self {
        self.incapable_of_violence = true;
        self
    }

    pub fn mental(mut self, state: MentalState) -> Self {
        self.mental = state;
        self
    }

    /// Break ends by itself at `tick`.
    pub fn recovers_at(mut self, tick: Tick) -> Self {
        self.mental_recovers_at = Some(tick);
        self
    }

    pub fn guest(mut self, status: GuestStatus) -> Self {
        self.guest = status;
        self
    }

    pub fn without_ownership(mut self) -> Self {
        self.has_ownership = false;
        self
    }

    pub fn without_player_settings(mut self) -> Self {
        self.has_player_settings = false;
        self
    }

    pub fn lord(mut self, lord: LordId) -> Self {
        self.lord = Some(lord);
        self
    }

    pub fn quest_tag(mut self, tag: impl Into<String>) -> Self {
        self.quest_tags.push(tag.into());
        self
    }
}

/// Fluent builder for [`PawnStore`] + [`PawnRngs`].
pub struct PawnStoreBuilder {
    seed:  u64,
    specs: Vec<PawnSpec>,
}

impl PawnStoreBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, specs: Vec::new() }
    }

    /// Append one pawn.  Pawns receive ids in insertion order.
    pub fn pawn(mut self, spec: PawnSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Append many pawns.
    pub fn pawns(mut self, specs: impl IntoIterator<Item = PawnSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// The id the next appended pawn will receive.
    pub fn next_id(&self) -> PawnId {
        PawnId(self.specs.len() as u32)
    }

    /// Construct `PawnStore` and `PawnRngs`.  Every pawn starts spawned.
    pub fn build(self) -> (PawnStore, PawnRngs) {
        let count = self.specs.len();
        let mut store = PawnStore::with_capacity(count);

        for spec in self.specs {
            store.name.push(spec.name);
            store.faction.push(spec.faction);
            store.position.push(spec.position);
            store.spawned.push(true);
            store.destroyed.push(false);
            store.skills.push(spec.skills);
            store.incapable_of_violence.push(spec.incapable_of_violence);
            store.conditions.push(ConditionSet::new());
            store.mental.push(spec.mental);
            store.mental_recovers_at.push(spec.mental_recovers_at);
            store.last_tucked.push(None);
            store.memories.push(Vec::new());
            store.guest.push(spec.guest);
            store.ownership.push(spec.has_ownership.then(Ownership::default));
            store.player_settings.push(spec.has_player_settings.then(PlayerSettings::default));
            store.lord.push(spec.lord);
            store.quest_tags.push(spec.quest_tags);
            store.carried_by.push(None);
            store.carrying.push(None);
            store.in_bed.push(None);
        }
        store.count = count;

        let rngs = PawnRngs::new(count, self.seed);
        (store, rngs)
    }
}
