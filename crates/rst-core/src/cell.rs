//! Integer grid coordinate and the distance helpers the job layer needs.
//!
//! The colony map is a flat grid; `x` grows east and `z` grows north.  All
//! distances are in cells.  Diagonal moves cost the same as orthogonal ones,
//! so the natural metric is Chebyshev distance.

use std::fmt;

/// A cell on the colony map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell `dx` east and `dz` north of `self`.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Cell {
        Cell { x: self.x.saturating_add(dx), z: self.z.saturating_add(dz) }
    }

    /// Chebyshev (king-move) distance in cells.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }

    /// Squared Euclidean distance.  Used for nearest-neighbour ordering where
    /// ties under Chebyshev would be ambiguous.
    #[inline]
    pub fn distance_sq(self, other: Cell) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dz = u64::from(self.z.abs_diff(other.z));
        (dx * dx).saturating_add(dz * dz)
    }

    /// `true` if `other` is this cell or one of its eight neighbours; the
    /// "touch" path end mode.
    #[inline]
    pub fn touches(self, other: Cell) -> bool {
        self.chebyshev(other) <= 1
    }

    /// One king-move step from `self` toward `goal`.  Returns `self` when
    /// already there.
    pub fn step_toward(self, goal: Cell) -> Cell {
        Cell {
            x: self.x + goal.x.cmp(&self.x) as i32,
            z: self.z + goal.z.cmp(&self.z) as i32,
        }
    }

    /// `[x, z]` point for spatial indexes.
    #[inline]
    pub fn to_point(self) -> [f64; 2] {
        [f64::from(self.x), f64::from(self.z)]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
