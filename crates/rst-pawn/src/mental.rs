//! Mental state of a pawn.

/// Whether a pawn has broken, and how badly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MentalState {
    /// Sane and controllable.
    #[default]
    None,
    /// Non-violent break (sad wander, food binge, …).
    Distressed,
    /// Violent break (berserk).  The target pool of the restrain job.
    AggressiveViolent,
}

impl MentalState {
    /// `true` for any break, violent or not.
    #[inline]
    pub fn is_broken(self) -> bool {
        !matches!(self, MentalState::None)
    }

    #[inline]
    pub fn is_aggressive(self) -> bool {
        matches!(self, MentalState::AggressiveViolent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MentalState::None              => "none",
            MentalState::Distressed        => "distressed",
            MentalState::AggressiveViolent => "aggressive",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" | "none"               => Some(MentalState::None),
            "distressed"              => Some(MentalState::Distressed),
            "aggressive" | "berserk"  => Some(MentalState::AggressiveViolent),
            _                         => None,
        }
    }
}

impl std::fmt::Display for MentalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
