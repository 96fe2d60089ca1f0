//! Skill levels consulted by the restraint contest.

/// Highest attainable skill level.
pub const SKILL_MAX: i32 = 20;

/// The two proficiencies the restrain job cares about.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Skills {
    /// Combat proficiency.
    pub melee: i32,
    /// Social proficiency.
    pub social: i32,
}

impl Skills {
    /// Build from raw levels, clamping into `0..=SKILL_MAX`.
    pub fn new(melee: i32, social: i32) -> Self {
        Self {
            melee:  melee.clamp(0, SKILL_MAX),
            social: social.clamp(0, SKILL_MAX),
        }
    }
}
