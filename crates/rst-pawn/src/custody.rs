//! Custody, ownership and memory records.

use rst_core::{BedId, FactionId, PawnId};

/// Resistance a freshly captured pawn starts with, before any job resets it.
pub const INITIAL_RESISTANCE: f32 = 10.0;

/// What wardens should do with a prisoner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    NoInteraction,
    AttemptRecruit,
    ReduceResistance,
    Release,
}

/// Bookkeeping for a pawn held captive.
#[derive(Clone, Debug, PartialEq)]
pub struct PrisonerRecord {
    /// The faction holding the prisoner.
    pub host:             FactionId,
    /// The pawn that made the capture, if known.
    pub captured_by:      Option<PawnId>,
    /// Marked for release by the player.
    pub released:         bool,
    pub interaction_mode: InteractionMode,
    pub resistance:       f32,
}

/// Custody status of a pawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GuestStatus {
    #[default]
    Free,
    Prisoner(PrisonerRecord),
}

impl GuestStatus {
    #[inline]
    pub fn is_prisoner(&self) -> bool {
        matches!(self, GuestStatus::Prisoner(_))
    }

    /// The holding faction while captive.
    pub fn host(&self) -> Option<FactionId> {
        match self {
            GuestStatus::Prisoner(r) => Some(r.host),
            GuestStatus::Free        => None,
        }
    }

    pub fn record(&self) -> Option<&PrisonerRecord> {
        match self {
            GuestStatus::Prisoner(r) => Some(r),
            GuestStatus::Free        => None,
        }
    }

    pub fn record_mut(&mut self) -> Option<&mut PrisonerRecord> {
        match self {
            GuestStatus::Prisoner(r) => Some(r),
            GuestStatus::Free        => None,
        }
    }

    /// Make the pawn a prisoner of `host`, captured by `by`.
    ///
    /// Capturing a pawn that is already a prisoner of the same faction keeps
    /// the existing record; only a missing captor is filled in.
    pub fn captured_by(&mut self, host: FactionId, by: PawnId) {
        match self {
            GuestStatus::Prisoner(r) if r.host == host => {
                r.captured_by.get_or_insert(by);
            }
            _ => {
                *self = GuestStatus::Prisoner(PrisonerRecord {
                    host,
                    captured_by:      Some(by),
                    released:         false,
                    interaction_mode: InteractionMode::NoInteraction,
                    resistance:       INITIAL_RESISTANCE,
                });
            }
        }
    }
}

/// A pawn's claim on a bed.  Pawns without an ownership record (animals,
/// visitors from off-map) can never own beds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ownership {
    pub owned_bed: Option<BedId>,
}

/// Medical-care policy the player can set per pawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MedicalCare {
    NoCare,
    NoMeds,
    HerbalOrWorse,
    #[default]
    Best,
}

/// Player-facing per-pawn settings.  Captives taken from outside the colony
/// arrive without one; the restrain job creates the default record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerSettings {
    pub medical_care: MedicalCare,
    pub self_tend:    bool,
}

/// Kinds of memory the restrain job touches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemoryKind {
    /// "We released a healthy prisoner", about `other`.
    ReleasedHealthyPrisoner,
    /// Anything else; carried so stores are not single-purpose.
    Other,
}

/// One remembered event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    pub kind:  MemoryKind,
    pub other: Option<PawnId>,
}
