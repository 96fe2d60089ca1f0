//! Timed health conditions attached to a pawn.
//!
//! Conditions are small immutable value records.  A `ConditionSet` holds at
//! most one record per [`ConditionKind`]; adding a kind that is already
//! present replaces the old record and hands it back, so re-applying an
//! effect can never stack.

use rst_core::Tick;

/// The effects the restrain job applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionKind {
    /// Bound hand and foot: cannot move or handle equipment.
    Restrained,
    /// Resentment at having been restrained.
    Annoyed,
}

impl ConditionKind {
    /// `true` if a pawn carrying this condition cannot walk.
    #[inline]
    pub fn blocks_moving(self) -> bool {
        matches!(self, ConditionKind::Restrained)
    }

    /// `true` if a pawn carrying this condition cannot use its hands.
    #[inline]
    pub fn blocks_manipulation(self) -> bool {
        matches!(self, ConditionKind::Restrained)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Restrained => "restrained",
            ConditionKind::Annoyed    => "annoyed",
        }
    }
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applied condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub kind:       ConditionKind,
    pub applied_at: Tick,
    /// `None` = permanent until explicitly removed.
    pub expires_at: Option<Tick>,
}

impl Condition {
    /// A condition that lasts until removed.
    pub fn permanent(kind: ConditionKind, now: Tick) -> Self {
        Self { kind, applied_at: now, expires_at: None }
    }

    /// A condition that drops off after `duration` ticks.
    pub fn timed(kind: ConditionKind, now: Tick, duration: u64) -> Self {
        Self { kind, applied_at: now, expires_at: Some(now + duration) }
    }

    #[inline]
    pub fn is_expired(&self, now: Tick) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }
}

/// The conditions currently on one pawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionSet {
    items: Vec<Condition>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `condition`, replacing any record of the same kind.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add(&mut self, condition: Condition) -> Option<Condition> {
        match self.items.iter_mut().find(|c| c.kind == condition.kind) {
            Some(slot) => Some(std::mem::replace(slot, condition)),
            None => {
                self.items.push(condition);
                None
            }
        }
    }

    /// Detach the record of `kind`.  Returns `None` (and changes nothing) if
    /// the pawn does not carry it.
    pub fn remove(&mut self, kind: ConditionKind) -> Option<Condition> {
        let pos = self.items.iter().position(|c| c.kind == kind)?;
        Some(self.items.remove(pos))
    }

    #[inline]
    pub fn has(&self, kind: ConditionKind) -> bool {
        self.items.iter().any(|c| c.kind == kind)
    }

    pub fn get(&self, kind: ConditionKind) -> Option<&Condition> {
        self.items.iter().find(|c| c.kind == kind)
    }

    pub fn can_move(&self) -> bool {
        !self.items.iter().any(|c| c.kind.blocks_moving())
    }

    pub fn can_manipulate(&self) -> bool {
        !self.items.iter().any(|c| c.kind.blocks_manipulation())
    }

    /// Drop every record whose expiry is at or before `now`, returning them.
    pub fn expire(&mut self, now: Tick) -> Vec<Condition> {
        let (gone, kept): (Vec<_>, Vec<_>) =
            self.items.drain(..).partition(|c| c.is_expired(now));
        self.items = kept;
        gone
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
